use thiserror::Error;

use corenal_storage::error::StoreError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Confirm or inspect called with no extraction pending.
    #[error("no extraction is pending review")]
    NothingPending,

    /// The patient process number is supplied externally and must be
    /// non-empty; it is never extracted from the document.
    #[error("patient process number is empty")]
    EmptyIdentifier,

    #[error(transparent)]
    Store(#[from] StoreError),
}
