use crate::wifi::ByteCounts;
use netuse_core::RateSample;

/// Turns successive cumulative byte counts into instantaneous rates.
///
/// Holds the previous `(counts, time)` pair; each call to [`RateMeter::sample`]
/// yields `(delta bytes) / (delta seconds)` per direction.
#[derive(Debug, Clone)]
pub struct RateMeter {
    prev: ByteCounts,
    prev_t: f64,
}

impl RateMeter {
    /// Start from a baseline reading so the first sample covers a real
    /// interval instead of all bytes since boot.
    pub fn new(baseline: ByteCounts, at: f64) -> Self {
        Self {
            prev: baseline,
            prev_t: at,
        }
    }

    /// Compute rates for the interval since the previous reading.
    ///
    /// Returns `None` when no time has elapsed; the baseline is kept so the
    /// next poll accounts for the full interval. A counter that went backwards
    /// (interface reset) yields a zero rate rather than a negative one.
    pub fn sample(&mut self, counts: ByteCounts, at: f64) -> Option<RateSample> {
        let dt = at - self.prev_t;
        if dt <= 0.0 {
            return None;
        }

        let recv = counts.rx.saturating_sub(self.prev.rx) as f64 / dt;
        let send = counts.tx.saturating_sub(self.prev.tx) as f64 / dt;
        self.prev = counts;
        self.prev_t = at;

        Some(RateSample { recv, send })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_from_counter_deltas() {
        let mut meter = RateMeter::new(ByteCounts { rx: 0, tx: 0 }, 0.0);
        let sample = meter.sample(ByteCounts { rx: 1000, tx: 2000 }, 1.0).unwrap();
        assert_eq!(sample.recv, 1000.0);
        assert_eq!(sample.send, 2000.0);
    }

    #[test]
    fn rates_scale_with_elapsed_time() {
        let mut meter = RateMeter::new(ByteCounts { rx: 100, tx: 0 }, 10.0);
        let sample = meter.sample(ByteCounts { rx: 600, tx: 0 }, 12.0).unwrap();
        assert_eq!(sample.recv, 250.0);
    }

    #[test]
    fn zero_elapsed_time_skips_the_sample() {
        let mut meter = RateMeter::new(ByteCounts { rx: 0, tx: 0 }, 5.0);
        assert!(meter.sample(ByteCounts { rx: 999, tx: 999 }, 5.0).is_none());

        // The skipped bytes are picked up by the next poll.
        let sample = meter.sample(ByteCounts { rx: 1000, tx: 500 }, 6.0).unwrap();
        assert_eq!(sample.recv, 1000.0);
        assert_eq!(sample.send, 500.0);
    }

    #[test]
    fn counter_reset_saturates_to_zero() {
        let mut meter = RateMeter::new(ByteCounts { rx: 5000, tx: 5000 }, 0.0);
        let sample = meter.sample(ByteCounts { rx: 100, tx: 100 }, 1.0).unwrap();
        assert_eq!(sample.recv, 0.0);
        assert_eq!(sample.send, 0.0);
    }
}
