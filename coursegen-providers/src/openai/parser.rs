//! Response parsing for OpenAI

use crate::constants::OPENAI_PROVIDER_NAME;
use crate::error;
use crate::traits::ResponseParser;
use coursegen_core::{Error, FinishReason, Response, ResponseMetadata, Usage};
use serde::Deserialize;

/// Parses chat-completions responses
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIParser;

impl ResponseParser for OpenAIParser {
    fn parse_response(&self, body: &str) -> Result<Response, Error> {
        let response: OpenAIResponse =
            serde_json::from_str(body).map_err(error::serialization_error)?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(Error::provider(
                OPENAI_PROVIDER_NAME,
                "No choices in response",
            ));
        };

        let metadata = ResponseMetadata {
            model: response.model,
            id: response.id,
            usage: response.usage.map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason.as_deref().map(parse_finish_reason),
        };

        Ok(Response {
            content: choice.message.content.unwrap_or_default(),
            metadata,
        })
    }
}

fn parse_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "length" => FinishReason::Length,
        "content_filter" => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

#[derive(Deserialize)]
struct OpenAIResponse {
    id: Option<String>,
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageResponse,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct MessageResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
