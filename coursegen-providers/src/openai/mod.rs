//! OpenAI chat-completions provider

mod config;
mod converter;
mod parser;
mod provider;

pub use config::OpenAIConfig;
pub use converter::OpenAIConverter;
pub use parser::OpenAIParser;
pub use provider::OpenAI;
