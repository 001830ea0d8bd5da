//! corenal-session
//!
//! One consultation at a time: the document→text→extraction pipeline
//! and the review gate that holds an extraction pending until it is
//! explicitly confirmed into the store or discarded.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod session;
