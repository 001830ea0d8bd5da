//! The extraction schema skeleton.
//!
//! The instruction payload sent to the extraction collaborator embeds an
//! all-null JSON rendering of [`ClinicalRecord`]. Generating it from the
//! default record — rather than keeping a hand-written template — makes
//! the Rust types the single source of truth: the prompt cannot drift
//! from what the parser accepts.

use crate::error::CoreError;
use crate::record::ClinicalRecord;

/// Serialize the all-null record skeleton as pretty-printed JSON.
///
/// Every leaf renders as `null` except the twelve medication slots,
/// which render as the full `{"presente": null, "farmaco": null,
/// "dose": null}` triple.
pub fn skeleton_json() -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(&ClinicalRecord::default())?)
}
