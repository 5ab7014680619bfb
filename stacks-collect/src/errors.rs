use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for collection operations.
///
/// Almost every operation in this crate signals "not found" by returning
/// `None` or a caller supplied default. The kinds below cover the few places
/// that raise instead: assertion-style lookups, malformed arguments and
/// serialization.
///
/// # Examples
///
/// ```rust
/// use stacks_collect::errors::{CollectError, CollectResult, ErrorKind};
///
/// fn example() -> CollectResult<()> {
///     Err(CollectError::new("Item not found", ErrorKind::ItemNotFound))
/// }
/// assert!(example().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// An assertion-style lookup (`first_or_fail`, `sole`) found nothing
    ItemNotFound,
    /// `sole` found more than one matching item
    MultipleItemsFound,
    /// A predicate operator token is not one of `== === != <> !== < <= > >=`
    InvalidOperator,
    /// An argument is outside the domain an operation accepts
    InvalidArgument,
    /// Error encoding the collection to JSON
    EncodingError,
    /// No macro is registered under the requested name
    UnknownMacro,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::ItemNotFound => write!(f, "Item not found"),
            ErrorKind::MultipleItemsFound => write!(f, "Multiple items found"),
            ErrorKind::InvalidOperator => write!(f, "Invalid operator"),
            ErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::UnknownMacro => write!(f, "Unknown macro"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type of this crate.
///
/// `CollectError` carries the error message, its kind and an optional cause.
/// A backtrace is captured at construction.
///
/// # Examples
///
/// ```rust
/// use stacks_collect::errors::{CollectError, ErrorKind};
///
/// let cause = CollectError::new("key must be a string", ErrorKind::EncodingError);
/// let err = CollectError::new_with_cause("Failed to encode", ErrorKind::EncodingError, cause);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct CollectError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<CollectError>>,
    backtrace: Backtrace,
}

impl CollectError {
    /// Creates a new `CollectError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        CollectError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Backtrace::new(),
        }
    }

    /// Creates a new `CollectError` chained to the error that caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: CollectError) -> Self {
        CollectError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Backtrace::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&CollectError> {
        self.cause.as_deref()
    }
}

impl Display for CollectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for CollectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for CollectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// Shorthand for `Result<T, CollectError>`.
pub type CollectResult<T> = Result<T, CollectError>;

impl From<serde_json::Error> for CollectError {
    fn from(err: serde_json::Error) -> Self {
        CollectError::new(
            &format!("JSON encoding error: {}", err),
            ErrorKind::EncodingError,
        )
    }
}

impl From<std::fmt::Error> for CollectError {
    fn from(err: std::fmt::Error) -> Self {
        CollectError::new(
            &format!("Formatting error: {}", err),
            ErrorKind::InternalError,
        )
    }
}
