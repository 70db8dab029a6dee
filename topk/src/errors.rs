use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for top-k index operations.
///
/// Errors only arise while building or configuring an index. Query
/// traversal itself never fails: empty results are reported through the
/// cursor protocol and misuse of an exhausted cursor panics.
///
/// # Examples
///
/// ```rust
/// use topk::errors::{ErrorKind, TopKError, TopKResult};
///
/// fn example() -> TopKResult<()> {
///     Err(TopKError::new("levels must be positive", ErrorKind::InvalidConfiguration))
/// }
///
/// assert!(example().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// Input data failed validation (duplicate keys, mismatched lengths, ...)
    ValidationError,
    /// A configuration value is outside its permitted domain
    InvalidConfiguration,
    /// An index could not be built from the given input
    IndexBuildFailed,
    /// The operation exists in the interface but is not provided here
    UnsupportedOperation,

    // The String names the extension (e.g. "spatial", "text")
    /// Error raised by an extension crate
    Extension(String),

    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::InvalidConfiguration => write!(f, "Invalid configuration"),
            ErrorKind::IndexBuildFailed => write!(f, "Index build failed"),
            ErrorKind::UnsupportedOperation => write!(f, "Unsupported operation"),
            ErrorKind::Extension(name) => write!(f, "{} error", name),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type shared by all top-k crates.
///
/// `TopKError` carries a message, an [`ErrorKind`], an optional cause and
/// the backtrace captured at creation time.
///
/// ```rust
/// use topk::errors::{ErrorKind, TopKError};
///
/// let cause = TopKError::new("point (1, 1, 1) stored twice", ErrorKind::ValidationError);
/// let err = TopKError::new_with_cause("treap build failed", ErrorKind::IndexBuildFailed, cause);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct TopKError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<TopKError>>,
    backtrace: Atomic<Backtrace>,
}

impl TopKError {
    /// Creates a new `TopKError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        TopKError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `TopKError` chained onto `cause`.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: TopKError) -> Self {
        TopKError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&TopKError> {
        self.cause.as_deref()
    }
}

impl Display for TopKError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for TopKError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for TopKError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// Shorthand for `Result<T, TopKError>`.
pub type TopKResult<T> = Result<T, TopKError>;

impl From<String> for TopKError {
    fn from(msg: String) -> Self {
        TopKError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for TopKError {
    fn from(msg: &str) -> Self {
        TopKError::new(msg, ErrorKind::InternalError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topk_error_new_creates_error() {
        let error = TopKError::new("bad levels", ErrorKind::InvalidConfiguration);
        assert_eq!(error.message, "bad levels");
        assert_eq!(error.error_kind, ErrorKind::InvalidConfiguration);
        assert!(error.cause.is_none());
    }

    #[test]
    fn topk_error_new_with_cause_creates_error() {
        let cause = TopKError::new("duplicate point", ErrorKind::ValidationError);
        let error = TopKError::new_with_cause("build failed", ErrorKind::IndexBuildFailed, cause);
        assert_eq!(error.kind(), &ErrorKind::IndexBuildFailed);
        assert_eq!(error.cause().map(|c| c.message()), Some("duplicate point"));
    }

    #[test]
    fn topk_error_display_prints_message_only() {
        let error = TopKError::new("snippets are not supported", ErrorKind::UnsupportedOperation);
        assert_eq!(format!("{}", error), "snippets are not supported");
    }

    #[test]
    fn topk_error_debug_contains_cause_chain() {
        let cause = TopKError::new("inner", ErrorKind::ValidationError);
        let error = TopKError::new_with_cause("outer", ErrorKind::IndexBuildFailed, cause);
        let formatted = format!("{:?}", error);
        assert!(formatted.contains("outer"));
        assert!(formatted.contains("Caused by:"));
        assert!(formatted.contains("inner"));
    }

    #[test]
    fn topk_error_source_follows_cause() {
        let error = TopKError::new("alone", ErrorKind::InternalError);
        assert!(error.source().is_none());

        let chained = TopKError::new_with_cause("outer", ErrorKind::InternalError, error);
        assert!(chained.source().is_some());
    }

    #[test]
    fn test_extension_kind_display() {
        assert_eq!(ErrorKind::Extension("spatial".into()).to_string(), "spatial error");
        assert_eq!(ErrorKind::UnsupportedOperation.to_string(), "Unsupported operation");
    }

    #[test]
    fn test_from_string_is_internal() {
        let error: TopKError = "boom".into();
        assert_eq!(error.kind(), &ErrorKind::InternalError);
        let error: TopKError = String::from("boom").into();
        assert_eq!(error.message(), "boom");
    }
}
