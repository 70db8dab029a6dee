//! Error and result types for building spatial indexes.

use thiserror::Error;
use topk::errors::{ErrorKind, TopKError};

use crate::point::Point;

/// Errors that can occur while building a spatial index.
///
/// Queries never fail; these are raised by [`crate::K3Treap::build`] and the
/// configuration setters only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    #[error("Duplicate point {0}: every coordinate may be stored once")]
    DuplicatePoint(Point),

    #[error("Coordinate {coordinate} needs a universe larger than {branching_factor}^{max_level}")]
    CoordinateOutOfRange {
        coordinate: u64,
        branching_factor: u64,
        max_level: u8,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<SpatialError> for TopKError {
    fn from(err: SpatialError) -> Self {
        match err {
            SpatialError::DuplicatePoint(_) => {
                TopKError::new(&err.to_string(), ErrorKind::ValidationError)
            }
            SpatialError::CoordinateOutOfRange { .. } => TopKError::new(
                &err.to_string(),
                ErrorKind::Extension("spatial".to_string()),
            ),
            SpatialError::InvalidConfiguration(msg) => {
                TopKError::new(&msg, ErrorKind::InvalidConfiguration)
            }
        }
    }
}

/// Result type for spatial operations
pub type SpatialResult<T> = Result<T, SpatialError>;
