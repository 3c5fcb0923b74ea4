//! Item error model.

use thiserror::Error;

/// Result type used by item operations.
pub type ItemResult<T> = Result<T, ItemError>;

/// Failure of a name-keyed item operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// No item in the collection carries the requested name.
    #[error("Item not found")]
    NotFound,
}

/// A JSON value other than an object was offered as an item.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("item must be a JSON object, got {0}")]
pub struct NotAnObject(pub &'static str);
