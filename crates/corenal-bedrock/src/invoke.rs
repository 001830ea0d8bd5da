//! Schema-constrained clinical extraction via the Bedrock Converse API.

use std::time::Duration;

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;

use corenal_core::record::ClinicalRecord;

use crate::error::ExtractError;
use crate::prompt::{EXTRACTION_SYSTEM_PROMPT, build_extraction_prompt};

/// Upper bound on any single external model call. A hung call surfaces
/// as a service error instead of blocking the session indefinitely.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(120);

/// Determinism hint for extraction: values should not wander between
/// runs over identical text.
const EXTRACTION_TEMPERATURE: f32 = 0.1;

/// Extract the canonical clinical record from normalized consultation
/// text.
///
/// Sends the instruction payload with a low temperature and parses the
/// reply. Service failures (including timeout) and malformed replies
/// are distinct errors; neither is retried here — the caller re-submits
/// manually, since clinical data must not be silently guessed.
pub async fn extract_clinical_record(
    config: &aws_config::SdkConfig,
    model_id: &str,
    clinical_text: &str,
) -> Result<ClinicalRecord, ExtractError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let user_message = build_extraction_prompt(clinical_text)?;

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(user_message))
        .build()
        .map_err(|e| ExtractError::Service(e.to_string()))?;

    info!(
        model_id,
        text_len = clinical_text.len(),
        "starting clinical extraction"
    );

    let send = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(EXTRACTION_SYSTEM_PROMPT.to_string()))
        .messages(message)
        .inference_config(
            InferenceConfiguration::builder()
                .temperature(EXTRACTION_TEMPERATURE)
                .build(),
        )
        .send();

    let response = tokio::time::timeout(CALL_TIMEOUT, send)
        .await
        .map_err(|_| {
            ExtractError::Service(format!(
                "extraction call timed out after {}s",
                CALL_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| ExtractError::Service(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| ExtractError::Service("no message in response".to_string()))?;

    let reply = output_message
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

    let record = parse_extraction_reply(&reply)?;

    info!(model_id, "clinical extraction complete");

    Ok(record)
}

/// Parse a model reply into the canonical clinical record.
///
/// Tolerates an incidental markdown code-fence wrapper; anything that
/// still fails to deserialize is a [`ExtractError::MalformedOutput`]
/// carrying the reply.
pub fn parse_extraction_reply(raw: &str) -> Result<ClinicalRecord, ExtractError> {
    let body = strip_code_fence(raw);
    serde_json::from_str(body).map_err(|e| {
        ExtractError::MalformedOutput(format!(
            "failed to parse clinical record: {e}. Reply: {raw}"
        ))
    })
}

/// Strip a markdown code-fence wrapper (```` ``` ```` or ```` ```json ````),
/// if present. The opening and closing fences are removed independently,
/// so a reply missing one of them still loses the other.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut body = raw.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest.trim_end();
    }
    body
}
