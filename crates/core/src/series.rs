/// Monotonic time in seconds, as produced by [`crate::Clock`].
pub type Timestamp = f64;

/// Append-only sequence of timestamped values with bounded retention.
///
/// Events are appended with the current time, so the sequence is always
/// non-decreasing in timestamp. At least `retention` seconds of history are
/// kept; once the total span grows past twice that, everything older than
/// `last − retention` is discarded.
#[derive(Debug, Clone)]
pub struct TimeIndexedData<T> {
    events: Vec<(Timestamp, T)>,
    retention: f64,
}

impl<T> TimeIndexedData<T> {
    /// Create an empty buffer that keeps at least `retention` seconds.
    pub fn new(retention: f64) -> Self {
        Self {
            events: Vec::new(),
            retention,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn first_event_time(&self) -> Option<Timestamp> {
        self.events.first().map(|(t, _)| *t)
    }

    pub fn last_event_time(&self) -> Option<Timestamp> {
        self.events.last().map(|(t, _)| *t)
    }

    /// Time between the oldest and newest event, `0.0` when empty.
    fn total_time_span(&self) -> f64 {
        match (self.first_event_time(), self.last_event_time()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Append `(at, value)` and prune history older than the retention window
    /// once the total span exceeds twice the window.
    ///
    /// `at` must not be earlier than the last appended timestamp.
    pub fn add(&mut self, at: Timestamp, value: T) {
        self.events.push((at, value));
        if self.total_time_span() > self.retention * 2.0 {
            let cutoff = at - self.retention;
            self.events.retain(|(t, _)| *t >= cutoff);
        }
    }

    /// Events overlapping the open interval `(start, end)`, plus at most one
    /// bracketing event on each side so a consumer can interpolate across the
    /// boundary.
    pub fn segment(&self, start: Timestamp, end: Timestamp) -> &[(Timestamp, T)] {
        debug_assert!(self.events.is_empty() || start <= end);
        if self.events.is_empty() {
            return &[];
        }

        let mut lo = 0;
        while lo < self.events.len() - 1 && self.events[lo + 1].0 <= start {
            lo += 1;
        }
        let mut hi = lo;
        while hi < self.events.len() - 1 && self.events[hi].0 < end {
            hi += 1;
        }
        &self.events[lo..=hi]
    }

    /// Events from the last `duration` seconds.
    pub fn right_segment(&self, duration: f64) -> &[(Timestamp, T)] {
        let Some(last) = self.last_event_time() else {
            return &[];
        };
        let start = last - duration;
        let from = self.events.partition_point(|(t, _)| *t < start);
        &self.events[from..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(times: &[f64]) -> TimeIndexedData<usize> {
        let mut data = TimeIndexedData::new(300.0);
        for (i, &t) in times.iter().enumerate() {
            data.add(t, i);
        }
        data
    }

    #[test]
    fn empty_buffer_queries() {
        let data: TimeIndexedData<usize> = TimeIndexedData::new(300.0);
        assert!(data.is_empty());
        assert_eq!(data.first_event_time(), None);
        assert_eq!(data.last_event_time(), None);
        assert!(data.segment(0.0, 10.0).is_empty());
        assert!(data.right_segment(10.0).is_empty());
    }

    #[test]
    fn single_element_returned_for_any_query() {
        let data = filled(&[5.0]);
        assert_eq!(data.segment(0.0, 1.0), &[(5.0, 0)]);
        assert_eq!(data.segment(10.0, 20.0), &[(5.0, 0)]);
        assert_eq!(data.right_segment(0.0), &[(5.0, 0)]);
    }

    #[test]
    fn segment_is_time_ordered() {
        let data = filled(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let seg = data.segment(0.5, 3.5);
        for pair in seg.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
        }
    }

    #[test]
    fn segment_brackets_the_open_interval() {
        let data = filled(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let seg = data.segment(1.5, 3.5);

        // Every interior event, plus exactly one on each side.
        let times: Vec<f64> = seg.iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(times.iter().filter(|&&t| t <= 1.5).count(), 1);
        assert_eq!(times.iter().filter(|&&t| t >= 3.5).count(), 1);
    }

    #[test]
    fn segment_with_boundary_on_event() {
        let data = filled(&[0.0, 1.0, 2.0, 3.0]);
        // Events at exactly `start` count as the left bracket.
        let times: Vec<f64> = data.segment(1.0, 2.5).iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn retention_prunes_old_events() {
        let mut data = TimeIndexedData::new(10.0);
        for i in 0..=21 {
            data.add(i as f64, i);
            let first = data.first_event_time().unwrap();
            let last = data.last_event_time().unwrap();
            assert!(last - first <= 20.0);
        }

        // The add at t=21 pushed the span past 2× retention, pruning
        // everything older than `last − retention`.
        assert_eq!(data.first_event_time(), Some(11.0));
        assert_eq!(data.last_event_time(), Some(21.0));
        assert_eq!(data.len(), 11);
    }

    #[test]
    fn right_segment_subset_of_segment() {
        let data = filled(&[0.0, 2.0, 4.0, 6.0, 8.0]);
        let last = data.last_event_time().unwrap();
        let right = data.right_segment(5.0);
        let seg = data.segment(last - 5.0, last);

        assert!(!right.is_empty());
        for ev in right {
            assert!(seg.iter().any(|(t, v)| *t == ev.0 && *v == ev.1));
        }
    }

    #[test]
    fn right_segment_keeps_events_at_cutoff() {
        let data = filled(&[0.0, 5.0, 10.0]);
        let times: Vec<f64> = data.right_segment(5.0).iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![5.0, 10.0]);
    }
}
