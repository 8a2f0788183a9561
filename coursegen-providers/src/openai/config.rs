//! OpenAI provider configuration

use crate::constants::OPENAI_DEFAULT_BASE_URL;
use crate::env;
use coursegen_core::Error;

/// Configuration for the OpenAI provider
#[derive(Clone)]
pub struct OpenAIConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Optional organization ID
    pub organization_id: Option<String>,
}

impl OpenAIConfig {
    /// Create a new configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENAI_DEFAULT_BASE_URL.to_string(),
            organization_id: None,
        }
    }

    /// Configuration from the process environment (and `.env`)
    ///
    /// Fails with [`Error::Authentication`] when no API key is set.
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Self::new(env::api_key()?);
        if let Some(url) = env::base_url() {
            config = config.with_base_url(url);
        }
        Ok(config)
    }

    /// Configuration from an arbitrary variable lookup
    ///
    /// Applies the same rules as [`OpenAIConfig::from_env`] without touching
    /// the process environment or the cached key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let api_key = env::resolve_api_key(&lookup).ok_or_else(env::missing_api_key)?;
        let mut config = Self::new(api_key);
        if let Some(url) = env::resolve_base_url(&lookup) {
            config = config.with_base_url(url);
        }
        Ok(config)
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the organization ID
    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization_id = Some(org.into());
        self
    }

    /// Get the URL for chat completions
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("organization_id", &self.organization_id)
            .finish()
    }
}
