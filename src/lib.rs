//! A simple, embeddable streaming downsampler for timestamped telemetry.
//!
//! Samples arrive one at a time with a timestamp and an optional (possibly
//! missing) value. The [`Resampler`] groups them into consecutive,
//! non-overlapping windows of a fixed period and, when queried, emits one
//! aggregated point per completed window.
//!
//! Per open window only a fixed-size running-statistics record is kept, so
//! memory stays bounded by the retention depth no matter how fast samples
//! arrive.
//!
//! Values are f32s by default, but can be switched to f64 using the
//! `high_precision` feature flag.
//!
//! ```
//! use skera::{Duration, EdgePolicy, Resampler, ResamplingFunction};
//!
//! let mut resampler = Resampler::new(
//!     Duration::seconds(5.0),
//!     ResamplingFunction::Average,
//!     /* retention depth */ 1,
//!     /* anchor */ 0,
//!     EdgePolicy::LastTimestamp,
//! )?;
//!
//! let step = Duration::seconds(1.0);
//!
//! for n in 1..=10u32 {
//!     resampler.push_sample(step * u128::from(n), Some(n as skera::Value));
//! }
//!
//! let points = resampler.resample(step * 10);
//!
//! assert_eq!(
//!     points
//!         .iter()
//!         .map(|p| (p.timestamp, p.value))
//!         .collect::<Vec<_>>(),
//!     vec![
//!         (Duration::seconds(5.0), Some(3.0)),
//!         (Duration::seconds(10.0), Some(8.0)),
//!     ],
//! );
//!
//! # Ok::<(), skera::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod agg;
mod duration;
mod error;
mod resampler;
mod sample;
mod time;
mod window;

pub use agg::ResamplingFunction;
pub use duration::Duration;
pub use error::{Error, Result};
pub use resampler::Resampler;
pub use sample::Sample;
pub use time::timestamp;
pub use window::EdgePolicy;

/// Timestamp in nanoseconds since the Unix epoch.
pub type Timestamp = u128;

/// Value used in time series
#[cfg(feature = "high_precision")]
pub type Value = f64;

/// Value used in time series
#[cfg(not(feature = "high_precision"))]
pub type Value = f32;
