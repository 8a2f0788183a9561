//! Request conversion for OpenAI

use crate::traits::RequestConverter;
use coursegen_core::{Error, Message, Request};
use serde_json::{json, Value};

/// Converts generic requests to the chat-completions body
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIConverter;

impl RequestConverter for OpenAIConverter {
    fn convert_request(&self, request: &Request) -> Result<Value, Error> {
        let mut body = json!({
            "model": request.model.to_string(),
            "messages": request.messages.iter().map(convert_message).collect::<Vec<_>>(),
            "stream": false,
        });

        if let Some(max_tokens) = request.parameters.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = request.parameters.temperature {
            body["temperature"] = json!(temperature);
        }

        Ok(body)
    }
}

fn convert_message(message: &Message) -> Value {
    json!({
        "role": message.role.as_str(),
        "content": message.content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_request() {
        let request = Request::builder()
            .message(Message::system("be brief"))
            .message(Message::user("a python course"))
            .model("gpt-3.5-turbo")
            .max_tokens(1000)
            .temperature(1.0)
            .build();

        let body = OpenAIConverter.convert_request(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "a python course"},
                ],
                "stream": false,
                "max_tokens": 1000,
                "temperature": 1.0,
            })
        );
    }

    #[test]
    fn test_unset_parameters_are_omitted() {
        let request = Request::new(vec![Message::user("hi")]);
        let body = OpenAIConverter.convert_request(&request).unwrap();

        assert!(body.get("max_tokens").is_none());
        assert!(body.get("temperature").is_none());
    }
}
