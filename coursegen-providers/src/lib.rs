//! Provider implementations for chat-completion services

#![warn(missing_docs)]

pub mod builder;
pub mod constants;
pub mod env;
pub mod error;
pub mod http;
pub mod traits;

// Provider implementations
pub mod openai;

// Re-export provider types
pub use builder::OpenAIBuilder;
pub use openai::{OpenAI, OpenAIConfig};

// Re-export common traits
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use traits::{RequestConverter, ResponseParser};
