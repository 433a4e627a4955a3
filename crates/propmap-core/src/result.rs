//! Result type aliases for propmap.

use crate::MapError;

/// A specialized `Result` type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;
