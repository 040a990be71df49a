/// Error type
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The resampling period was zero.
    InvalidPeriod,

    /// The retention depth was zero.
    InvalidRetentionDepth,

    /// A resampling function was constructed from an unknown ordinal.
    InvalidResamplingFunction(u8),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPeriod => {
                write!(f, "InvalidPeriod",)
            }
            Self::InvalidRetentionDepth => {
                write!(f, "InvalidRetentionDepth",)
            }
            Self::InvalidResamplingFunction(ordinal) => {
                write!(f, "InvalidResamplingFunction({ordinal})",)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
