//! Document text extraction via the Bedrock Converse API.
//!
//! Consultation notes arrive as DOCX and lab results as PDF. Both are
//! sent to the model as a `DocumentBlock`, which parses the format
//! natively, and come back as one plain-text blob: paragraph text in
//! order, table content rendered row by row.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, DocumentBlock, DocumentFormat, DocumentSource, Message,
    SystemContentBlock,
};
use tracing::info;

use crate::error::ExtractError;
use crate::invoke::CALL_TIMEOUT;

const DOCUMENT_TEXT_SYSTEM_PROMPT: &str = "\
Extract the complete text content from this clinical document. \
Return only the plain text, preserving paragraph structure, with each \
table row rendered on its own line. \
Do not add commentary, headers, or formatting.";

/// Extract plain text from a consultation note or lab-results document.
///
/// Sends the document bytes to the given model using the Converse API's
/// `DocumentBlock`. A failed call surfaces as
/// [`ExtractError::Document`]; nothing downstream of the pending review
/// is touched.
pub async fn document_text(
    config: &aws_config::SdkConfig,
    model_id: &str,
    bytes: &[u8],
    filename: &str,
    format: DocumentFormat,
) -> Result<String, ExtractError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let doc_block = DocumentBlock::builder()
        .format(format)
        .name(sanitize_document_name(filename))
        .source(DocumentSource::Bytes(aws_smithy_types::Blob::new(bytes)))
        .build()
        .map_err(|e| ExtractError::Document(e.to_string()))?;

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Document(doc_block))
        .content(ContentBlock::Text(
            "Extract the full text from this document.".to_string(),
        ))
        .build()
        .map_err(|e| ExtractError::Document(e.to_string()))?;

    info!(model_id, filename, "extracting text from document");

    let send = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(
            DOCUMENT_TEXT_SYSTEM_PROMPT.to_string(),
        ))
        .messages(message)
        .send();

    let response = tokio::time::timeout(CALL_TIMEOUT, send)
        .await
        .map_err(|_| {
            ExtractError::Document(format!(
                "document text extraction timed out after {}s",
                CALL_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| ExtractError::Document(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| ExtractError::Document("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    info!(
        model_id,
        filename,
        text_len = text.len(),
        "document text extraction complete"
    );

    Ok(text)
}

/// Sanitize a filename for use as a Bedrock `DocumentBlock` name.
///
/// The name field only allows alphanumeric characters, single
/// whitespace, hyphens, parentheses, and square brackets.
fn sanitize_document_name(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '(' || c == ')' || c == '[' || c == ']' {
                c
            } else {
                ' '
            }
        })
        .collect();

    // Collapse consecutive whitespace.
    let mut result = String::with_capacity(sanitized.len());
    let mut prev_space = false;
    for c in sanitized.chars() {
        if c == ' ' {
            if !prev_space {
                result.push(c);
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }

    result.trim().to_string()
}

/// Map a file extension to a Bedrock `DocumentFormat`.
///
/// Only the two upload kinds this system accepts are mapped: `.docx`
/// consultation notes and `.pdf` lab results.
pub fn document_format_for_extension(ext: &str) -> Option<DocumentFormat> {
    match ext.to_lowercase().as_str() {
        "pdf" => Some(DocumentFormat::Pdf),
        "docx" => Some(DocumentFormat::Docx),
        _ => None,
    }
}
