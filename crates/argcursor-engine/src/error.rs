/// Errors returned by cursor extraction operations.
///
/// The messages and numeric codes are the ones command dispatchers have
/// historically surfaced to clients, so they are kept stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    /// The token could not be interpreted as the requested type.
    #[error("Could not convert argument to expected type")]
    ParseFailure,
    /// There is no current token, or an advance would run past the end.
    #[error("Expected an argument, but none provided")]
    NoArgument,
    /// The token parsed but violated a range constraint.
    #[error("Value is outside acceptable bounds")]
    LimitExceeded,
}

impl ArgsError {
    /// Numeric error code (`0` is reserved for success).
    pub fn code(self) -> i32 {
        match self {
            ArgsError::ParseFailure => 1,
            ArgsError::NoArgument => 2,
            ArgsError::LimitExceeded => 3,
        }
    }
}

pub type ArgsResult<T> = Result<T, ArgsError>;
