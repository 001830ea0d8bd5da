//! corenal-bedrock
//!
//! The extraction collaborator boundary: document-to-text extraction and
//! schema-constrained clinical extraction via the Bedrock Converse API.

pub mod error;
pub mod extract;
pub mod invoke;
pub mod prompt;
