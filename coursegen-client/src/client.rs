//! High-level client implementation

use coursegen_core::{Error, Message, Model, Parameters, Provider, Request, RequestBuilder, Response};
use tracing::debug;

/// Sampling temperature used unless the caller sets one
pub const DEFAULT_TEMPERATURE: f32 = 1.0;

/// High-level client for chat completions
///
/// Holds a provider plus the model and parameters applied to every request.
///
/// # Examples
///
/// ```no_run
/// use coursegen_client::Client;
/// use coursegen_providers::OpenAI;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(OpenAI::from_env()?);
///
/// let reply = client.chat("Hello, how are you?").await?;
/// println!("{reply}");
/// # Ok(())
/// # }
/// ```
pub struct Client<P: Provider> {
    pub(crate) provider: P,
    pub(crate) default_model: Model,
    pub(crate) default_parameters: Parameters,
}

impl<P: Provider> Client<P> {
    /// Create a new client with a provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            default_model: Model::default(),
            default_parameters: Parameters::builder()
                .temperature(DEFAULT_TEMPERATURE)
                .build(),
        }
    }

    /// Set the default model for requests
    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Send a single user message and return the reply text
    pub async fn chat(&self, text: impl Into<String>) -> Result<String, Error> {
        let response = self.request().user(text).send().await?;
        Ok(response.content)
    }

    /// Create a request builder pre-filled with the client defaults
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use coursegen_client::Client;
    /// # use coursegen_providers::OpenAI;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new(OpenAI::with_api_key("key")?);
    /// let response = client
    ///     .request()
    ///     .system("You are a helpful assistant")
    ///     .user("Suggest a course title")
    ///     .max_tokens(100)
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn request(&self) -> ConnectedRequestBuilder<'_, P> {
        ConnectedRequestBuilder {
            client: self,
            builder: Request::builder()
                .model(self.default_model.clone())
                .parameters(self.default_parameters.clone()),
        }
    }

    /// Get a reference to the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Execute a pre-built request
    pub async fn execute(&self, request: Request) -> Result<Response, Error> {
        self.provider.request(request).await
    }
}

/// Request builder connected to a client
pub struct ConnectedRequestBuilder<'a, P: Provider> {
    client: &'a Client<P>,
    builder: RequestBuilder,
}

impl<P: Provider> ConnectedRequestBuilder<'_, P> {
    /// Add a system message
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.builder = self.builder.message(Message::system(content));
        self
    }

    /// Add a user message
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.builder = self.builder.message(Message::user(content));
        self
    }

    /// Add several messages at once
    pub fn messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.builder = self.builder.messages(messages);
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.builder = self.builder.model(model);
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.builder = self.builder.temperature(temperature);
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.builder = self.builder.max_tokens(max_tokens);
        self
    }

    /// Send the request
    pub async fn send(self) -> Result<Response, Error> {
        let request = self.builder.try_build()?;
        debug!(model = %request.model, "dispatching request");
        self.client.execute(request).await
    }
}
