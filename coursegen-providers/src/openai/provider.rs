//! OpenAI provider implementation
//!
//! Sends one non-streaming chat-completions request per call and returns the
//! first choice. Nothing is retried.

use crate::constants::{OPENAI_ORGANIZATION_HEADER, OPENAI_PROVIDER_NAME};
use crate::error::check_status;
use crate::http::{create_headers, HttpClient, ReqwestClient};
use crate::openai::{config::OpenAIConfig, converter::OpenAIConverter, parser::OpenAIParser};
use crate::traits::{RequestConverter, ResponseParser};
use async_trait::async_trait;
use coursegen_core::{Error, Provider, Request, Response};
use reqwest::header::{HeaderMap, HeaderName};
use std::sync::Arc;
use tracing::{debug, trace};

/// OpenAI provider for chat completions
///
/// # Example
///
/// ```no_run
/// use coursegen_providers::OpenAI;
///
/// # fn example() -> Result<(), coursegen_core::Error> {
/// // Credential from API_KEY / OPENAI_API_KEY or a .env file
/// let provider = OpenAI::from_env()?;
///
/// // Or explicitly
/// let provider = OpenAI::with_api_key("your-api-key")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OpenAI {
    client: Arc<dyn HttpClient>,
    config: OpenAIConfig,
    converter: OpenAIConverter,
    parser: OpenAIParser,
}

impl OpenAI {
    /// Create a new OpenAI provider with the given configuration and client
    pub fn new(config: OpenAIConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            config,
            converter: OpenAIConverter,
            parser: OpenAIParser,
        }
    }

    /// Create a new OpenAI provider with just an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::new()?);
        Ok(Self::new(OpenAIConfig::new(api_key), client))
    }

    /// Create a provider configured from the environment
    pub fn from_env() -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::new()?);
        Ok(Self::new(OpenAIConfig::from_env()?, client))
    }

    /// Create a provider configured from an arbitrary variable lookup
    ///
    /// See [`OpenAIConfig::from_lookup`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::new()?);
        Ok(Self::new(OpenAIConfig::from_lookup(lookup)?, client))
    }

    /// The provider's configuration
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn headers(&self) -> Result<HeaderMap, Error> {
        let extra = self
            .config
            .organization_id
            .iter()
            .map(|org| (HeaderName::from_static(OPENAI_ORGANIZATION_HEADER), org.clone()))
            .collect();
        create_headers(&self.config.api_key, extra)
    }
}

#[async_trait]
impl Provider for OpenAI {
    async fn request(&self, request: Request) -> Result<Response, Error> {
        let body = self.converter.convert_request(&request)?;
        debug!(
            model = %request.model,
            max_tokens = ?request.parameters.max_tokens,
            messages = request.messages.len(),
            "sending chat completion request"
        );
        trace!(body = %body, "chat completion request body");

        let response = self
            .client
            .post(&self.config.chat_url(), self.headers()?, body)
            .await?;
        let status = response.status;
        let text = check_status(OPENAI_PROVIDER_NAME, response)?;

        let parsed = self.parser.parse_response(&text)?;
        debug!(
            status,
            finish_reason = ?parsed.metadata.finish_reason,
            usage = ?parsed.metadata.usage,
            "chat completion received"
        );
        Ok(parsed)
    }
}
