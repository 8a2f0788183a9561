//! Core traits and types for the Coursegen library
//!
//! This crate provides the abstractions shared by the provider and client
//! crates: the error type, the [`Provider`] trait, and the request/response
//! types that flow through it.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use provider::Provider;
pub use types::{
    message::{Message, Role},
    request::{BuildError, Model, Parameters, ParametersBuilder, Request, RequestBuilder},
    response::{FinishReason, Response, ResponseMetadata, Usage},
};
