//! Quiz generation via the Bedrock Converse API.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::{info, warn};

use quizsmith_core::models::quiz::Quiz;

use crate::error::BedrockError;
use crate::prompt;

/// Ask the model for a quiz over `sample` with `count` questions.
///
/// The caller bounds `count` to 1–10. The response must be JSON conforming
/// to the `Quiz` shape; a response that fails to parse is a
/// [`BedrockError::SchemaViolation`]. A parseable quiz whose question count
/// differs from the request passes through with a warning — option counts
/// and answer letters are likewise not enforced.
///
/// No retries: any invocation failure is fatal to the current request.
pub async fn generate_quiz(
    config: &aws_config::SdkConfig,
    model_id: &str,
    count: u8,
    sample: &str,
) -> Result<Quiz, BedrockError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let user_message = prompt::build_user_message(count, sample);

    info!(
        model_id,
        count,
        sample_len = sample.len(),
        "requesting quiz generation"
    );

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(
            prompt::QUIZ_SYSTEM_PROMPT.to_string(),
        ))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

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

    let quiz = parse_quiz(&text)?;

    if quiz.questions.len() != count as usize {
        warn!(
            requested = count,
            returned = quiz.questions.len(),
            "model returned a different question count"
        );
    }

    info!(questions = quiz.questions.len(), "quiz generation complete");

    Ok(quiz)
}

/// Parse the model's response text into a [`Quiz`].
///
/// Models occasionally wrap JSON in Markdown code fences despite the
/// JSON-only instruction; the fence is peeled off before parsing.
pub fn parse_quiz(text: &str) -> Result<Quiz, BedrockError> {
    let body = strip_code_fence(text.trim());
    serde_json::from_str(body).map_err(|e| {
        BedrockError::SchemaViolation(format!("failed to parse Quiz: {e}. Response: {body}"))
    })
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start_matches(['\r', '\n']);
    rest.strip_suffix("```").map(str::trim_end).unwrap_or(rest)
}
