use crate::types::DocumentId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DocumentId },

    /// The identifier string could not be parsed. Distinct from `NotFound`:
    /// the store is never consulted for a malformed id.
    #[error("Malformed {entity} id: {value}")]
    MalformedId { entity: &'static str, value: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
