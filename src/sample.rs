use crate::{Timestamp, Value};

/// A single timestamped data point of a scalar series.
///
/// The value is optional: a sensor may report that it was read but had no
/// usable reading. That case is modelled explicitly as `None` instead of a
/// sentinel, so legitimate NaN readings stay distinguishable from missing
/// ones.
///
/// `Sample` is also the type of the points emitted by
/// [`Resampler::resample`](crate::Resampler::resample), where the timestamp is
/// the window label and the value the aggregate (or `None` for a window
/// without usable data).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sample {
    /// Timestamp in nanoseconds since the Unix epoch.
    pub timestamp: Timestamp,

    /// The measured value, if any.
    pub value: Option<Value>,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(timestamp: Timestamp, value: Option<Value>) -> Self {
        Self { timestamp, value }
    }
}
