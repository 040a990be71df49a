use crate::agg::accumulator::WindowAccumulator;
use crate::window::{EdgePolicy, WindowIndexer};
use crate::{Error, ResamplingFunction, Sample, Timestamp, Value};
use std::collections::BTreeMap;

/// Streaming downsampler for one scalar telemetry series.
///
/// Incoming samples are routed into consecutive, non-overlapping windows of a
/// fixed period. Each open window keeps a fixed-size
/// running-statistics record instead of the raw samples, and
/// [`resample`](Self::resample) drains every window that is fully closed as of
/// the queried instant, emitting one aggregated point per window.
///
/// Emission is strictly forward: the emission cursor only advances, an emitted
/// window is gone, and samples addressed to it afterwards are dropped. The
/// number of simultaneously open windows is bounded by the retention depth,
/// so memory stays O(retention depth) regardless of sample arrival rate.
///
/// Both `push_sample` and `resample` mutate the window map and must be called
/// under external mutual exclusion per instance; the resampler performs no
/// internal locking.
#[derive(Debug)]
pub struct Resampler {
    indexer: WindowIndexer,

    /// The function reducing each window to a single value
    function: ResamplingFunction,

    /// How many windows may trail the newest open one before aging out
    retention_depth: u128,

    /// Open windows, keyed by window index
    windows: BTreeMap<u128, WindowAccumulator>,

    /// Smallest window index not yet emitted
    cursor: u128,

    /// Highest window index ever observed
    highest_seen: u128,

    late_drops: u64,
    aged_out: u64,
}

impl Resampler {
    /// Creates a new resampler.
    ///
    /// `period` is the window length in nanoseconds, `anchor` the instant from
    /// which all window boundaries are computed. Timestamps before the anchor
    /// are never resampled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPeriod`] for a zero period and
    /// [`Error::InvalidRetentionDepth`] for a zero retention depth.
    pub fn new(
        period: u128,
        function: ResamplingFunction,
        retention_depth: u32,
        anchor: Timestamp,
        edge_policy: EdgePolicy,
    ) -> crate::Result<Self> {
        if period == 0 {
            return Err(Error::InvalidPeriod);
        }
        if retention_depth == 0 {
            return Err(Error::InvalidRetentionDepth);
        }

        let indexer = WindowIndexer::new(anchor, period, edge_policy);
        let cursor = indexer.first_index();

        Ok(Self {
            indexer,
            function,
            retention_depth: u128::from(retention_depth),
            windows: BTreeMap::new(),
            cursor,
            highest_seen: 0,
            late_drops: 0,
            aged_out: 0,
        })
    }

    /// Routes one sample into its window.
    ///
    /// Never fails. Samples timestamped before the anchor, or addressed to a
    /// window that has already been emitted, are silently dropped; the drops
    /// are observable through [`late_drops`](Self::late_drops).
    pub fn push_sample(&mut self, timestamp: Timestamp, value: Option<Value>) {
        let Some(index) = self.indexer.index(timestamp) else {
            self.late_drops += 1;
            log::trace!("dropping sample at {timestamp}: timestamp is before the anchor");
            return;
        };

        if index < self.cursor {
            self.late_drops += 1;
            log::trace!("dropping sample at {timestamp}: window {index} was already emitted");
            return;
        }

        self.windows.entry(index).or_default().update(timestamp, value);
        self.highest_seen = self.highest_seen.max(index);

        // Enforce the retention horizon: windows trailing more than
        // `retention_depth` behind the newest observed one are lost, not
        // emitted.
        while let Some((&oldest, _)) = self.windows.first_key_value() {
            if oldest + self.retention_depth >= self.highest_seen {
                break;
            }

            self.windows.pop_first();
            self.aged_out += 1;

            log::warn!(
                "window {oldest} aged out unqueried, {} windows behind window {}",
                self.highest_seen - oldest,
                self.highest_seen,
            );
        }
    }

    /// Adds a sample.
    pub fn push(&mut self, sample: Sample) {
        self.push_sample(sample.timestamp, sample.value);
    }

    /// Emits one aggregated point per window fully closed as of `as_of`, in
    /// increasing label order.
    ///
    /// Windows that received no usable samples (or none at all) emit a point
    /// with a `None` value, so the output has no index gaps. Emitted windows
    /// are drained: a later call whose `as_of` does not close any new window
    /// returns an empty vector.
    #[must_use]
    pub fn resample(&mut self, as_of: Timestamp) -> Vec<Sample> {
        let limit = self.indexer.closed_before(as_of);

        if limit <= self.cursor {
            return Vec::new();
        }

        let mut points = Vec::with_capacity(usize::try_from(limit - self.cursor).unwrap_or(0));

        for index in self.cursor..limit {
            let window = self.windows.remove(&index).unwrap_or_default();

            points.push(Sample::new(
                self.indexer.label(index),
                self.function.aggregate(&window),
            ));
        }

        self.cursor = limit;

        points
    }

    /// Emits one aggregated point per window fully closed as of now.
    #[must_use]
    pub fn resample_now(&mut self) -> Vec<Sample> {
        self.resample(crate::time::timestamp())
    }

    /// Number of currently open windows.
    #[must_use]
    pub fn open_windows(&self) -> usize {
        self.windows.len()
    }

    /// Number of samples dropped because they were timestamped before the
    /// anchor or addressed to an already-emitted window.
    #[must_use]
    pub fn late_drops(&self) -> u64 {
        self.late_drops
    }

    /// Number of windows evicted by the retention horizon before ever being
    /// queried.
    #[must_use]
    pub fn aged_out(&self) -> u64 {
        self.aged_out
    }
}

impl Extend<Sample> for Resampler {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}
