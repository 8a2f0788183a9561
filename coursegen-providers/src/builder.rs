//! Builder for provider construction
//!
//! Configuration methods return `self`; `build()` consumes the builder and
//! produces the provider.
//!
//! # Examples
//!
//! ```no_run
//! use coursegen_providers::builder::OpenAIBuilder;
//!
//! let provider = OpenAIBuilder::new("sk-...")
//!     .base_url("https://my-proxy.example.com/v1")
//!     .organization("org-123")
//!     .build()
//!     .expect("Failed to build provider");
//! ```

use crate::http::{HttpClient, ReqwestClient};
use crate::openai::{OpenAI, OpenAIConfig};
use coursegen_core::Error;
use std::sync::Arc;
use std::time::Duration;

/// Builder for constructing OpenAI providers
pub struct OpenAIBuilder {
    api_key: String,
    base_url: Option<String>,
    organization: Option<String>,
    timeout: Option<Duration>,
    client: Option<Arc<dyn HttpClient>>,
}

impl OpenAIBuilder {
    /// Create a new OpenAI builder with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            organization: None,
            timeout: None,
            client: None,
        }
    }

    /// Set the base URL (for proxies and compatible endpoints)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the organization ID
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Set the transport timeout; ignored when a custom client is given
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client
    pub fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the OpenAI provider
    pub fn build(self) -> Result<OpenAI, Error> {
        let mut config = OpenAIConfig::new(self.api_key);
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(org) = self.organization {
            config = config.with_organization(org);
        }

        let client: Arc<dyn HttpClient> = match (self.client, self.timeout) {
            (Some(client), _) => client,
            (None, Some(timeout)) => Arc::new(ReqwestClient::with_timeout(timeout)?),
            (None, None) => Arc::new(ReqwestClient::new()?),
        };

        Ok(OpenAI::new(config, client))
    }
}
