use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A transport/auth error from the storage collaborator, surfaced
    /// verbatim. No partial-write rollback is attempted.
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("table not found: {table}")]
    MissingTable { table: String },

    #[error("row index {index} out of bounds for table {table}")]
    RowIndexOutOfBounds { table: String, index: usize },

    /// The patient identifier is the upsert key and must be present
    /// and non-empty; it is otherwise opaque.
    #[error("patient identifier is empty")]
    EmptyIdentifier,
}
