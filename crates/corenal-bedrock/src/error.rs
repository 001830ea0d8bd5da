use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The uploaded document could not be read into text.
    #[error("document parse failed: {0}")]
    Document(String),

    /// The external extraction call failed (transport, auth, quota,
    /// or the explicit call timeout).
    #[error("extraction service error: {0}")]
    Service(String),

    /// The reply could not be parsed into the canonical clinical
    /// record. Carries the offending reply for manual inspection —
    /// clinical data is never guessed or retried automatically.
    #[error("extraction reply did not conform to the clinical schema: {0}")]
    MalformedOutput(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("schema error: {0}")]
    Schema(#[from] corenal_core::error::CoreError),
}
