use thiserror::Error;

use crate::model::RecordId;

/// Errors raised by the catalog state machine
///
/// None of these are fatal to a session: selection misses mean no detail
/// view is shown and an out-of-range slice renders nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("interaction target is not inside a display unit")]
    NoDisplayUnit,

    #[error("record '{0}' not found")]
    RecordNotFound(RecordId),

    #[error("slice start {start} is past the end of {len} matched records")]
    OutOfRange { start: usize, len: usize },

    #[error("matched index {index} is not an ascending position in {len} records")]
    InvalidMatch { index: usize, len: usize },

    #[error("duplicate record id '{0}'")]
    DuplicateRecord(RecordId),
}

impl CatalogError {
    /// Whether this is one of the selection misses
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NoDisplayUnit | CatalogError::RecordNotFound(_))
    }
}
