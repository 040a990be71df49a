pub(crate) mod accumulator;

use self::accumulator::WindowAccumulator;
use crate::{Error, Value};

/// The function used to reduce all samples of a window into one value.
///
/// The enumeration is closed and ordered; every variant carries a stable
/// ordinal that survives serialization across process boundaries:
///
/// ```
/// use skera::ResamplingFunction;
///
/// assert_eq!(2, ResamplingFunction::Max.value());
/// assert_eq!(ResamplingFunction::Max, ResamplingFunction::try_from(2)?);
/// assert_eq!("ResamplingFunction.Max", ResamplingFunction::Max.to_string());
/// # Ok::<(), skera::Error>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResamplingFunction {
    /// Average of all present values in the window.
    #[default]
    Average = 0,

    /// Sum of all present values in the window.
    Sum = 1,

    /// Largest present value in the window.
    Max = 2,

    /// Smallest present value in the window.
    Min = 3,

    /// Temporally last present value in the window.
    Last = 4,

    /// Number of present values in the window. Always well-defined, even for
    /// a window without any present values (then it is `0`).
    Count = 5,
}

impl ResamplingFunction {
    /// All functions, in declaration (ordinal) order.
    pub const ALL: [Self; 6] = [
        Self::Average,
        Self::Sum,
        Self::Max,
        Self::Min,
        Self::Last,
        Self::Count,
    ];

    /// `(name, ordinal)` pairs in declaration order.
    #[must_use]
    pub fn entries() -> [(&'static str, u8); 6] {
        Self::ALL.map(|function| (function.name(), function.value()))
    }

    /// The function's declared name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Average => "Average",
            Self::Sum => "Sum",
            Self::Max => "Max",
            Self::Min => "Min",
            Self::Last => "Last",
            Self::Count => "Count",
        }
    }

    /// The function's ordinal.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Reduces a window's running statistics to the aggregated value.
    ///
    /// Windows without a single present value yield `None` for every function
    /// except [`Count`](Self::Count), which reports `0`: a count is a
    /// well-defined number regardless of missing data.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn aggregate(self, window: &WindowAccumulator) -> Option<Value> {
        match self {
            Self::Count => Some(window.count_present as Value),
            _ if window.count_present == 0 => None,
            Self::Average => Some(window.sum / window.count_present as Value),
            Self::Sum => Some(window.sum),
            Self::Max => Some(window.max),
            Self::Min => Some(window.min),
            Self::Last => Some(window.last_value),
        }
    }
}

impl TryFrom<u8> for ResamplingFunction {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Self::Average),
            1 => Ok(Self::Sum),
            2 => Ok(Self::Max),
            3 => Ok(Self::Min),
            4 => Ok(Self::Last),
            5 => Ok(Self::Count),
            _ => Err(Error::InvalidResamplingFunction(ordinal)),
        }
    }
}

impl std::fmt::Display for ResamplingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResamplingFunction.{}", self.name())
    }
}

impl std::fmt::Debug for ResamplingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<ResamplingFunction.{}: {}>", self.name(), self.value())
    }
}
