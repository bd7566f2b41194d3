pub mod rate;
pub mod wifi;

pub use rate::RateMeter;
pub use wifi::{ByteCounts, WifiCounters};

use netuse_core::RateSample;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time;
use tracing::warn;

/// Spawn a background Tokio task that polls the wireless byte counters every
/// `interval_ms` milliseconds and forwards [`RateSample`]s through the
/// returned channel.
///
/// The task stops automatically when the receiver is dropped.
pub fn spawn_monitor(counters: WifiCounters, interval_ms: u64) -> mpsc::Receiver<RateSample> {
    let (tx, rx) = mpsc::channel(4);
    let interval = Duration::from_millis(interval_ms);

    tokio::spawn(async move {
        let origin = Instant::now();
        let mut ticker = time::interval(interval);

        // The first tick completes immediately; use it for the baseline read
        // so the first forwarded sample covers one real interval.
        let mut meter = loop {
            ticker.tick().await;
            match counters.read() {
                Ok(baseline) => break RateMeter::new(baseline, origin.elapsed().as_secs_f64()),
                Err(e) => warn!("Counter read failed: {e}"),
            }
        };

        loop {
            ticker.tick().await;

            let counts = match counters.read() {
                Ok(c) => c,
                Err(e) => {
                    warn!("Counter read failed: {e}");
                    continue;
                }
            };

            let Some(sample) = meter.sample(counts, origin.elapsed().as_secs_f64()) else {
                continue; // no time elapsed since the previous poll
            };

            if tx.send(sample).await.is_err() {
                break; // all receivers dropped
            }
        }
    });

    rx
}
