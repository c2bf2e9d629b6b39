use thiserror::Error;

/// Raised when guess text is not a usable number in the accepted range.
///
/// Always recoverable: the session is left untouched and the player can
/// simply try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{input}' is not a number. Enter a number between 1 and 20.")]
    NotANumber { input: String },
    #[error("{value} is out of range. Enter a number between 1 and 20.")]
    OutOfRange { value: i64 },
}
