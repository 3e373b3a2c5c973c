use core::fmt;

/// Failure modes shared across the workspace.
///
/// Every operation that can fail validates its inputs before touching any
/// generator state, so an `Err` never leaves a generator corrupted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A parameter is outside its documented domain (empty or oversized
    /// seed material, invalid round count, bad pool size, ...).
    InvalidValue(&'static str),
    /// A state record carries another family's tag.
    WrongFamily {
        /// The tag the receiving generator expects.
        expected: &'static str,
    },
    /// A state record field has the wrong shape or an impossible value.
    InvalidState(&'static str),
    /// The running CPU lacks a required capability.
    Unavailable(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidValue(msg) => f.write_str(msg),
            Error::WrongFamily { expected } => {
                write!(f, "state record is not for a {} generator", expected)
            }
            Error::InvalidState(msg) => f.write_str(msg),
            Error::Unavailable(msg) => f.write_str(msg),
        }
    }
}

impl core::error::Error for Error {}
