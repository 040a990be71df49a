use crate::Timestamp;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current timestamp in nanoseconds.
#[must_use]
pub fn timestamp() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos()
}
