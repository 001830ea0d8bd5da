//! Document-to-record pipeline: the steps between an upload and a
//! record ready to stage.

use aws_sdk_bedrockruntime::types::DocumentFormat;
use tracing::warn;

use corenal_bedrock::error::ExtractError;
use corenal_bedrock::{extract, invoke};
use corenal_core::normalize;
use corenal_core::record::ClinicalRecord;

/// An uploaded document: raw bytes plus the filename shown to the
/// document collaborator.
pub struct Upload<'a> {
    pub bytes: &'a [u8],
    pub filename: &'a str,
}

/// Run one consultation through text extraction, normalization, and
/// clinical extraction. The result is ready for
/// [`crate::session::ReviewSession::stage`].
///
/// The consultation note is required and a failure to read it aborts.
/// The lab-results PDF is optional both ways: absent, or present but
/// unreadable — the latter logs a warning and proceeds on the note
/// alone, so a bad lab scan never blocks the consultation itself.
pub async fn process_consultation(
    config: &aws_config::SdkConfig,
    model_id: &str,
    note: Upload<'_>,
    labs: Option<Upload<'_>>,
) -> Result<ClinicalRecord, ExtractError> {
    let note_text = extract::document_text(
        config,
        model_id,
        note.bytes,
        note.filename,
        DocumentFormat::Docx,
    )
    .await?;

    let labs_text = match labs {
        Some(labs) => {
            match extract::document_text(
                config,
                model_id,
                labs.bytes,
                labs.filename,
                DocumentFormat::Pdf,
            )
            .await
            {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(filename = labs.filename, error = %e, "lab results unreadable, continuing without them");
                    None
                }
            }
        }
        None => None,
    };

    let combined = normalize::combine_note_and_labs(&note_text, labs_text.as_deref());

    invoke::extract_clinical_record(config, model_id, &combined).await
}
