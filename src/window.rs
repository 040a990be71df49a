use crate::Timestamp;

/// Controls which side of a window boundary a sample belongs to, and which
/// edge of an emitted window is reported as its label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Windows cover `[start, start + period)` and are labelled by their
    /// first timestamp.
    ///
    /// A sample landing exactly on a boundary belongs to the window that
    /// *starts* there.
    FirstTimestamp,

    /// Windows cover `(end - period, end]` and are labelled by their last
    /// timestamp.
    ///
    /// A sample landing exactly on a boundary belongs to the window that
    /// *ends* there.
    #[default]
    LastTimestamp,
}

/// Maps timestamps to integer window indices.
///
/// Windows of length `period` tile the timeline from the anchor onwards with
/// no gaps or overlaps; timestamp to index is a non-decreasing step function.
/// Both edge policies produce the same label arithmetic
/// (`anchor + index * period`), they only differ in which window a boundary
/// sample falls into and whether that label is the window's first or last
/// instant.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WindowIndexer {
    anchor: Timestamp,
    period: u128,
    policy: EdgePolicy,
}

impl WindowIndexer {
    pub fn new(anchor: Timestamp, period: u128, policy: EdgePolicy) -> Self {
        debug_assert!(period > 0);

        Self {
            anchor,
            period,
            policy,
        }
    }

    /// Returns the index of the window the given timestamp falls into.
    ///
    /// Timestamps before the anchor have no window.
    pub fn index(&self, timestamp: Timestamp) -> Option<u128> {
        let elapsed = timestamp.checked_sub(self.anchor)?;

        Some(match self.policy {
            EdgePolicy::FirstTimestamp => elapsed / self.period,
            EdgePolicy::LastTimestamp => elapsed.div_ceil(self.period),
        })
    }

    /// Returns the label timestamp reported for a window.
    pub fn label(&self, index: u128) -> Timestamp {
        self.anchor + index * self.period
    }

    /// Smallest window index that may ever be emitted.
    ///
    /// Under the last-timestamp policy, window 0 degenerates to the single
    /// instant of the anchor itself and is skipped.
    pub fn first_index(&self) -> u128 {
        match self.policy {
            EdgePolicy::FirstTimestamp => 0,
            EdgePolicy::LastTimestamp => 1,
        }
    }

    /// Exclusive upper bound of the window indices fully closed as of the
    /// given timestamp.
    pub fn closed_before(&self, as_of: Timestamp) -> u128 {
        let Some(elapsed) = as_of.checked_sub(self.anchor) else {
            return self.first_index();
        };

        match self.policy {
            EdgePolicy::FirstTimestamp => elapsed / self.period,
            EdgePolicy::LastTimestamp => elapsed / self.period + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Duration;

    #[test_log::test]
    fn index_first_timestamp() {
        let indexer = WindowIndexer::new(0, Duration::seconds(5.0), EdgePolicy::FirstTimestamp);

        assert_eq!(Some(0), indexer.index(0));
        assert_eq!(Some(0), indexer.index(Duration::seconds(4.0)));
        assert_eq!(Some(1), indexer.index(Duration::seconds(5.0)));
        assert_eq!(Some(1), indexer.index(Duration::seconds(9.0)));
        assert_eq!(Some(2), indexer.index(Duration::seconds(10.0)));
    }

    #[test_log::test]
    fn index_last_timestamp() {
        let indexer = WindowIndexer::new(0, Duration::seconds(5.0), EdgePolicy::LastTimestamp);

        assert_eq!(Some(0), indexer.index(0));
        assert_eq!(Some(1), indexer.index(Duration::seconds(1.0)));
        assert_eq!(Some(1), indexer.index(Duration::seconds(5.0)));
        assert_eq!(Some(2), indexer.index(Duration::seconds(6.0)));
        assert_eq!(Some(2), indexer.index(Duration::seconds(10.0)));
    }

    #[test_log::test]
    fn index_before_anchor() {
        let anchor = Duration::seconds(100.0);

        for policy in [EdgePolicy::FirstTimestamp, EdgePolicy::LastTimestamp] {
            let indexer = WindowIndexer::new(anchor, Duration::seconds(5.0), policy);
            assert_eq!(None, indexer.index(anchor - 1));
            assert_eq!(Some(indexer.first_index()), indexer.index(anchor + 1));
        }
    }

    #[test_log::test]
    fn labels_tile_the_timeline() {
        let indexer = WindowIndexer::new(
            Duration::seconds(100.0),
            Duration::seconds(5.0),
            EdgePolicy::LastTimestamp,
        );

        assert_eq!(Duration::seconds(105.0), indexer.label(1));
        assert_eq!(Duration::seconds(110.0), indexer.label(2));
    }

    #[test_log::test]
    fn closed_before_first_timestamp() {
        let indexer = WindowIndexer::new(0, Duration::seconds(5.0), EdgePolicy::FirstTimestamp);

        assert_eq!(0, indexer.closed_before(Duration::seconds(4.0)));
        assert_eq!(1, indexer.closed_before(Duration::seconds(5.0)));
        assert_eq!(2, indexer.closed_before(Duration::seconds(10.0)));
    }

    #[test_log::test]
    fn closed_before_last_timestamp() {
        let indexer = WindowIndexer::new(0, Duration::seconds(5.0), EdgePolicy::LastTimestamp);

        // window 1 is (0s, 5s]; nothing is emittable before 5s
        assert_eq!(1, indexer.closed_before(0));
        assert_eq!(1, indexer.closed_before(Duration::seconds(4.0)));
        assert_eq!(2, indexer.closed_before(Duration::seconds(5.0)));
        assert_eq!(3, indexer.closed_before(Duration::seconds(10.0)));
    }

    #[test_log::test]
    fn closed_before_before_anchor_is_empty() {
        let anchor = Duration::seconds(100.0);

        for policy in [EdgePolicy::FirstTimestamp, EdgePolicy::LastTimestamp] {
            let indexer = WindowIndexer::new(anchor, Duration::seconds(5.0), policy);
            assert_eq!(indexer.first_index(), indexer.closed_before(0));
        }
    }
}
