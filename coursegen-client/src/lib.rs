//! High-level API for generating course and marketing content
//!
//! [`CourseGenerator`] is the entry point: each operation composes a prompt
//! with [`PromptComposer`] and sends it through a [`Client`] in one call.

#![warn(missing_docs)]

mod client;
mod generator;
mod prompt;

pub use client::{Client, ConnectedRequestBuilder, DEFAULT_TEMPERATURE};
pub use generator::CourseGenerator;
pub use prompt::{
    Prompt, PromptComposer, Task, DEFAULT_COURSE_DIFFICULTY, DEFAULT_MAX_TOKENS, SIGN_OFF,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{Client, CourseGenerator, DEFAULT_MAX_TOKENS};
    pub use coursegen_core::{Message, Role};
}
