//! Prompt composition
//!
//! Every prompt is a pair: a system instruction built from a role template
//! wrapped in a fixed preamble, and the caller's text passed through as the
//! user message. Templates are rendered with handlebars with HTML escaping
//! turned off, so whatever the caller wrote reaches the model as written.
//!
//! Difficulty labels are not validated. The template asks the model to map
//! the label to a difficulty and to fall back to `Intermediate` when it
//! cannot.

use coursegen_core::{Error, Message};
use handlebars::Handlebars;
use serde::Serialize;

/// Token budget used when the caller has no preference
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Difficulty assumed for course outlines when none is given
pub const DEFAULT_COURSE_DIFFICULTY: &str = "Intermediate";

/// Phrase every generated text is asked to end with
pub const SIGN_OFF: &str = "- Your Friendly Generator.";

const PREAMBLE: &str = "preamble";
const DIFFICULTY_PARTIAL: &str = "difficulty";

const PREAMBLE_TEMPLATE: &str = "\
Before generating your text, understand the following steps:
1. This is the maximum limit of characters for you to write with: {{max_tokens}}
2. You should generate a complete text WITHOUT overstepping this limit.
3. Be prepared to write short, concise texts as your max limit can be lower than default.
4. End the generated text with: '{{sign_off}}'
5. To the best of your ability, take spelling errors into consideration in all prompts.
This is the template for you to generate a text of: {{system_template}}";

const DIFFICULTY_TEMPLATE: &str = "\
Follow the steps to choose a difficulty: \
1. Try to translate the given difficulty parameter into {{difficulty_kind}} difficulty. \
Difficulty parameter: {{difficulty}} \
2. If the difficulty parameter does not make sense or is not related to difficulty, \
default the difficulty to 'Intermediate'. \
3. Mention difficulty in your response.";

const TITLES_TEMPLATE: &str = "\
You are a marketing expert and will generate creative persuasive titles for a product. \
Come up with several options.";

const MARKETING_TEMPLATE: &str = "\
You are a marketing expert and will generate creative persuasive marketing about a product.";

const COURSE_OUTLINE_TEMPLATE: &str = "\
You are a teacher in the following subjects: IT, cloud solutions, system architecture, ML and AI. \
You will generate a course plan/outline, taking into account the difficulty level. \
Difficulty information: {{> difficulty}}";

const CODING_EXERCISES_TEMPLATE: &str = "\
You are a teacher in programming in Python. Generate a coding exercise for the given subject. \
If a difficulty is given, match that in the complexity of the problem. \
Difficulty information: {{> difficulty}}";

/// The kinds of content the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Persuasive product titles
    Titles,
    /// Persuasive marketing copy
    MarketingText,
    /// A course plan at a given difficulty
    CourseOutline,
    /// Python coding exercises for a subject
    CodingExercises,
}

impl Task {
    /// All tasks, in declaration order
    pub const ALL: [Task; 4] = [
        Task::Titles,
        Task::MarketingText,
        Task::CourseOutline,
        Task::CodingExercises,
    ];

    fn template_name(self) -> &'static str {
        match self {
            Task::Titles => "titles",
            Task::MarketingText => "marketing_text",
            Task::CourseOutline => "course_outline",
            Task::CodingExercises => "coding_exercises",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Task::Titles => TITLES_TEMPLATE,
            Task::MarketingText => MARKETING_TEMPLATE,
            Task::CourseOutline => COURSE_OUTLINE_TEMPLATE,
            Task::CodingExercises => CODING_EXERCISES_TEMPLATE,
        }
    }

    fn difficulty_kind(self) -> &'static str {
        match self {
            Task::CodingExercises => "an exercise",
            _ => "a course",
        }
    }
}

/// A composed prompt, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// System instruction: preamble plus role template
    pub system: String,
    /// The caller's text, unmodified
    pub user: String,
    /// Token budget, both in the instruction and as a request parameter
    pub max_tokens: u32,
}

impl Prompt {
    /// The system and user messages, in that order
    pub fn messages(&self) -> Vec<Message> {
        vec![Message::system(&self.system), Message::user(&self.user)]
    }
}

#[derive(Serialize)]
struct RoleData<'a> {
    difficulty: &'a str,
    difficulty_kind: &'a str,
}

#[derive(Serialize)]
struct PreambleData<'a> {
    max_tokens: u32,
    sign_off: &'a str,
    system_template: &'a str,
}

/// Renders the system instructions for each [`Task`]
pub struct PromptComposer {
    registry: Handlebars<'static>,
}

impl PromptComposer {
    /// Create a composer with all templates registered
    pub fn new() -> Result<Self, Error> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);

        registry
            .register_partial(DIFFICULTY_PARTIAL, DIFFICULTY_TEMPLATE)
            .map_err(template_error)?;
        registry
            .register_template_string(PREAMBLE, PREAMBLE_TEMPLATE)
            .map_err(template_error)?;
        for task in Task::ALL {
            registry
                .register_template_string(task.template_name(), task.template())
                .map_err(template_error)?;
        }

        Ok(Self { registry })
    }

    /// Render the role template for a task
    ///
    /// `difficulty` is inserted verbatim. When absent, course outlines use
    /// [`DEFAULT_COURSE_DIFFICULTY`] and coding exercises say `None`.
    pub fn role_template(&self, task: Task, difficulty: Option<&str>) -> Result<String, Error> {
        let difficulty = match (task, difficulty) {
            (_, Some(label)) => label,
            (Task::CourseOutline, None) => DEFAULT_COURSE_DIFFICULTY,
            (_, None) => "None",
        };
        let data = RoleData {
            difficulty,
            difficulty_kind: task.difficulty_kind(),
        };
        self.registry
            .render(task.template_name(), &data)
            .map_err(template_error)
    }

    /// Wrap a role template in the preamble and pair it with the user text
    pub fn compose(
        &self,
        system_template: &str,
        user_text: &str,
        max_tokens: u32,
    ) -> Result<Prompt, Error> {
        let data = PreambleData {
            max_tokens,
            sign_off: SIGN_OFF,
            system_template,
        };
        let system = self
            .registry
            .render(PREAMBLE, &data)
            .map_err(template_error)?;

        Ok(Prompt {
            system,
            user: user_text.to_string(),
            max_tokens,
        })
    }

    /// Compose the full prompt for a task
    pub fn compose_task(
        &self,
        task: Task,
        user_text: &str,
        difficulty: Option<&str>,
        max_tokens: u32,
    ) -> Result<Prompt, Error> {
        let role = self.role_template(task, difficulty)?;
        self.compose(&role, user_text, max_tokens)
    }
}

fn template_error(err: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::Template {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}
