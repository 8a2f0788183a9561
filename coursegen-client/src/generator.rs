//! Course and marketing content generators

use crate::client::Client;
use crate::prompt::{Prompt, PromptComposer, Task};
use coursegen_core::{Error, Provider};
use coursegen_providers::{env, OpenAI};
use tracing::{debug, info, warn};

/// Generates titles, marketing copy, course outlines and coding exercises
///
/// Each operation makes exactly one provider call. Errors from the provider
/// are returned unchanged.
///
/// # Examples
///
/// ```no_run
/// use coursegen_client::{CourseGenerator, DEFAULT_MAX_TOKENS};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = CourseGenerator::from_env()?;
/// let description = "A course that teaches juniors how to code python";
///
/// let titles = generator.generate_titles(description, DEFAULT_MAX_TOKENS).await?;
/// let outline = generator
///     .generate_course_outline(description, Some("beginner"), DEFAULT_MAX_TOKENS)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct CourseGenerator<P: Provider> {
    client: Client<P>,
    composer: PromptComposer,
}

impl CourseGenerator<OpenAI> {
    /// OpenAI-backed generator configured from the environment
    ///
    /// Reads the API key (and optional base URL and model overrides) from
    /// the process environment or a `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::with_openai(OpenAI::from_env()?, env::model())
    }

    /// OpenAI-backed generator configured from an arbitrary variable lookup
    ///
    /// Reads the same variables as [`CourseGenerator::from_env`], through
    /// `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let provider = OpenAI::from_lookup(&lookup)?;
        Self::with_openai(provider, env::resolve_model(&lookup))
    }

    fn with_openai(provider: OpenAI, model: Option<String>) -> Result<Self, Error> {
        let mut client = Client::new(provider);
        if let Some(model) = model {
            client = client.with_model(model);
        }
        Self::with_client(client)
    }
}

impl<P: Provider> CourseGenerator<P> {
    /// Create a generator over a provider with the default client settings
    pub fn new(provider: P) -> Result<Self, Error> {
        Self::with_client(Client::new(provider))
    }

    /// Create a generator over a configured client
    pub fn with_client(client: Client<P>) -> Result<Self, Error> {
        Ok(Self {
            client,
            composer: PromptComposer::new()?,
        })
    }

    /// Send `user_text` under an arbitrary role template
    ///
    /// The template is wrapped in the standard preamble (length budget,
    /// sign-off, spelling tolerance). All other operations go through here.
    pub async fn generate_output(
        &self,
        system_template: &str,
        user_text: &str,
        max_tokens: u32,
    ) -> Result<String, Error> {
        let prompt = self.composer.compose(system_template, user_text, max_tokens)?;
        self.send(prompt).await
    }

    /// Generate creative, persuasive titles for a product
    pub async fn generate_titles(&self, description: &str, max_tokens: u32) -> Result<String, Error> {
        self.generate(Task::Titles, description, None, max_tokens).await
    }

    /// Generate persuasive marketing text about a product
    pub async fn generate_marketing_text(
        &self,
        description: &str,
        max_tokens: u32,
    ) -> Result<String, Error> {
        self.generate(Task::MarketingText, description, None, max_tokens)
            .await
    }

    /// Generate a course plan/outline
    ///
    /// `difficulty` defaults to `Intermediate`. Any label is accepted; the
    /// model is asked to interpret it.
    pub async fn generate_course_outline(
        &self,
        description: &str,
        difficulty: Option<&str>,
        max_tokens: u32,
    ) -> Result<String, Error> {
        self.generate(Task::CourseOutline, description, difficulty, max_tokens)
            .await
    }

    /// Generate Python coding exercises for a subject
    pub async fn generate_coding_exercises(
        &self,
        subject: &str,
        difficulty: Option<&str>,
        max_tokens: u32,
    ) -> Result<String, Error> {
        self.generate(Task::CodingExercises, subject, difficulty, max_tokens)
            .await
    }

    async fn generate(
        &self,
        task: Task,
        user_text: &str,
        difficulty: Option<&str>,
        max_tokens: u32,
    ) -> Result<String, Error> {
        info!(?task, ?difficulty, max_tokens, "generating content");
        let prompt = self
            .composer
            .compose_task(task, user_text, difficulty, max_tokens)?;
        self.send(prompt).await
    }

    async fn send(&self, prompt: Prompt) -> Result<String, Error> {
        debug!(
            system_len = prompt.system.len(),
            user_len = prompt.user.len(),
            "sending composed prompt"
        );
        let response = self
            .client
            .request()
            .messages(prompt.messages())
            .max_tokens(prompt.max_tokens)
            .send()
            .await?;

        if response.is_truncated() {
            warn!(max_tokens = prompt.max_tokens, "response stopped at the token budget");
        }
        Ok(response.content)
    }
}
