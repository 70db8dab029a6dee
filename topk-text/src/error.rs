//! Error and result types for the document index.

use thiserror::Error;
use topk::errors::{ErrorKind, TopKError};

/// Errors raised while assembling a document index or by operations the
/// index does not provide.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("{0} is not supported by this index")]
    Unsupported(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Inconsistent index: {0}")]
    InconsistentIndex(String),
}

impl From<TextError> for TopKError {
    fn from(err: TextError) -> Self {
        match err {
            TextError::Unsupported(_) => {
                TopKError::new(&err.to_string(), ErrorKind::UnsupportedOperation)
            }
            TextError::InvalidConfiguration(msg) => {
                TopKError::new(&msg, ErrorKind::InvalidConfiguration)
            }
            TextError::InconsistentIndex(msg) => TopKError::new(&msg, ErrorKind::ValidationError),
        }
    }
}

/// Result type for document index operations
pub type TextResult<T> = Result<T, TextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_maps_to_unsupported_operation() {
        let err: TopKError = TextError::Unsupported("extract_snippet").into();
        assert_eq!(err.kind(), &ErrorKind::UnsupportedOperation);
        assert_eq!(err.message(), "extract_snippet is not supported by this index");
    }

    #[test]
    fn test_inconsistent_index_maps_to_validation_error() {
        let err: TopKError = TextError::InconsistentIndex("3 weights, 4 documents".into()).into();
        assert_eq!(err.kind(), &ErrorKind::ValidationError);
        assert_eq!(err.message(), "3 weights, 4 documents");
    }
}
