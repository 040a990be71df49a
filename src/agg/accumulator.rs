use crate::{Timestamp, Value};

/// Running statistics of one open window.
///
/// Holds everything needed to compute any resampling function without
/// retaining individual samples, so an open window costs O(1) memory.
///
/// The all-zero default is the empty window; aggregating it yields the same
/// result as a window that only ever received missing values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct WindowAccumulator {
    /// Number of samples routed to this window, missing values included.
    pub count_total: u64,

    /// Number of samples that carried a value.
    pub count_present: u64,

    /// Sum of all present values.
    pub sum: Value,

    /// Smallest present value. Only meaningful when `count_present > 0`.
    pub min: Value,

    /// Largest present value. Only meaningful when `count_present > 0`.
    pub max: Value,

    /// Value of the present sample with the greatest timestamp seen so far.
    pub last_value: Value,

    /// Timestamp of `last_value`.
    pub last_value_at: Timestamp,
}

impl WindowAccumulator {
    /// Folds one sample into the window.
    ///
    /// "Last" tracks the temporally last value, not the last pushed one, so
    /// out-of-order arrival within a window still converges to chronological
    /// semantics. On equal timestamps the later push wins.
    pub fn update(&mut self, timestamp: Timestamp, value: Option<Value>) {
        self.count_total += 1;

        let Some(value) = value else {
            return;
        };

        if self.count_present == 0 {
            self.min = value;
            self.max = value;
            self.last_value = value;
            self.last_value_at = timestamp;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);

            if timestamp >= self.last_value_at {
                self.last_value = value;
                self.last_value_at = timestamp;
            }
        }

        self.count_present += 1;
        self.sum += value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn update_folds_running_stats() {
        let mut window = WindowAccumulator::default();

        window.update(1, Some(4.0));
        window.update(2, Some(2.0));
        window.update(3, Some(9.0));

        assert_eq!(3, window.count_total);
        assert_eq!(3, window.count_present);
        assert_eq!(15.0, window.sum);
        assert_eq!(2.0, window.min);
        assert_eq!(9.0, window.max);
        assert_eq!(9.0, window.last_value);
        assert_eq!(3, window.last_value_at);
    }

    #[test_log::test]
    fn missing_values_only_bump_total() {
        let mut window = WindowAccumulator::default();

        window.update(1, None);
        window.update(2, Some(5.0));
        window.update(3, None);

        assert_eq!(3, window.count_total);
        assert_eq!(1, window.count_present);
        assert_eq!(5.0, window.sum);
        assert_eq!(5.0, window.min);
        assert_eq!(5.0, window.max);
        assert_eq!(5.0, window.last_value);
    }

    #[test_log::test]
    fn last_is_temporal_not_arrival_order() {
        let mut window = WindowAccumulator::default();

        window.update(5, Some(1.0));
        window.update(3, Some(7.0));

        assert_eq!(1.0, window.last_value);
        assert_eq!(5, window.last_value_at);

        window.update(5, Some(2.0));

        // equal timestamps: the later push wins
        assert_eq!(2.0, window.last_value);
    }
}
