//! Coursegen: course and marketing content from a hosted chat model
//!
//! This facade re-exports the workspace crates behind cargo features.
//!
//! # Quick start
//!
//! ```no_run
//! # #[cfg(feature = "client")]
//! # async fn example() -> coursegen::Result<()> {
//! use coursegen::prelude::*;
//!
//! let generator = CourseGenerator::from_env()?;
//! let exercises = generator
//!     .generate_coding_exercises("Pandas module", None, DEFAULT_MAX_TOKENS)
//!     .await?;
//! println!("{exercises}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub use coursegen_core::*;

/// Provider implementations
#[cfg(feature = "providers")]
pub mod providers {
    pub use coursegen_providers::*;
}

/// Prompt composition and generators
#[cfg(feature = "client")]
pub mod client {
    pub use coursegen_client::*;
}

/// Common imports
pub mod prelude {
    pub use coursegen_core::{Error, Message, Provider, Request, Response, Result, Role};

    #[cfg(feature = "providers")]
    pub use coursegen_providers::{OpenAI, OpenAIBuilder};

    #[cfg(feature = "client")]
    pub use coursegen_client::{
        Client, CourseGenerator, PromptComposer, Task, DEFAULT_COURSE_DIFFICULTY,
        DEFAULT_MAX_TOKENS,
    };
}
