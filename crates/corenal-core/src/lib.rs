//! corenal-core
//!
//! Pure domain types for the cardio-renal consultation registry: the
//! canonical clinical record, controlled vocabularies, the fixed
//! medication-class set, row projection, and table/header contracts.
//! No AWS dependency — this is the shared vocabulary of the system.

pub mod error;
pub mod normalize;
pub mod project;
pub mod record;
pub mod schema;
pub mod tables;
pub mod vocab;
