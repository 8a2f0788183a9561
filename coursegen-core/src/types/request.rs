//! Request types for chat completions

use crate::types::message::Message;
use thiserror::Error;

/// Model used when a request does not name one
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// A model identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model(pub String);

impl Default for Model {
    fn default() -> Self {
        Self(DEFAULT_MODEL.to_string())
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters for controlling generation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature for randomness (0.0 to 2.0)
    pub temperature: Option<f32>,
}

impl Parameters {
    /// Create a new parameters builder
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::default()
    }
}

/// Builder for Parameters
#[derive(Default)]
pub struct ParametersBuilder {
    params: Parameters,
}

impl ParametersBuilder {
    /// Set maximum tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.params.max_tokens = Some(tokens);
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.params.temperature = Some(temp);
        self
    }

    /// Build the parameters
    pub fn build(self) -> Parameters {
        self.params
    }
}

/// A chat completion request
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// The messages, in order
    pub messages: Vec<Message>,
    /// The model to use
    pub model: Model,
    /// Generation parameters
    pub parameters: Parameters,
}

impl Request {
    /// Create a new request builder
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Create a request with the default model and no parameters
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            model: Model::default(),
            parameters: Parameters::default(),
        }
    }
}

/// Builder for Request
#[derive(Default)]
pub struct RequestBuilder {
    messages: Vec<Message>,
    model: Option<Model>,
    parameters: Parameters,
}

impl RequestBuilder {
    /// Add a message
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Add multiple messages
    pub fn messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set parameters
    pub fn parameters(mut self, params: Parameters) -> Self {
        self.parameters = params;
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.parameters.temperature = Some(temp);
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.parameters.max_tokens = Some(tokens);
        self
    }

    /// Build the request
    pub fn build(self) -> Request {
        Request {
            messages: self.messages,
            model: self.model.unwrap_or_default(),
            parameters: self.parameters,
        }
    }

    /// Try to build the request, returning an error if it has no messages
    pub fn try_build(self) -> Result<Request, BuildError> {
        if self.messages.is_empty() {
            return Err(BuildError::NoMessages);
        }
        Ok(self.build())
    }
}

/// Errors that can occur when building a request
#[derive(Debug, Error)]
pub enum BuildError {
    /// Request must contain at least one message
    #[error("Request must contain at least one message")]
    NoMessages,
}

impl From<BuildError> for crate::Error {
    fn from(err: BuildError) -> Self {
        crate::Error::Validation(err.to_string())
    }
}
