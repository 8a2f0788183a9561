//! Core provider trait for chat completions

use crate::error::Result;
use crate::types::request::Request;
use crate::types::response::Response;
use async_trait::async_trait;

/// The interface every chat-completion backend implements
///
/// One call is one round-trip to the backend. Implementations hand errors
/// back as they occur; callers decide what to do with them.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send a request and get the complete response
    async fn request(&self, request: Request) -> Result<Response>;
}

