//! corenal-storage
//!
//! The spreadsheet-style table store: the collaborator trait, the
//! upsert/append store writer, and an in-memory backend.

pub mod error;
pub mod memory;
pub mod store;
pub mod writer;
