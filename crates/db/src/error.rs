/// Failure of a document store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the driver reported a failure.
    #[error("Document store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    /// A document could not be converted to or from its typed form.
    #[error("Document codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
