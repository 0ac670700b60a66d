//! Store-level error types.

use thiserror::Error;

use crate::domain::EntityId;

/// Repository errors.
///
/// Missing records on plain lookups are reported as `Ok(None)`; this type
/// covers the operations that reference other records or enforce uniqueness.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: EntityId },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl RepoError {
    pub fn not_found(entity_type: &'static str, id: EntityId) -> Self {
        Self::NotFound { entity_type, id }
    }
}
