//! Generate titles, marketing copy, a course outline and coding exercises
//!
//! Needs `API_KEY` (or `OPENAI_API_KEY`) in the environment or in a `.env`
//! file. Run with:
//!
//! ```sh
//! RUST_LOG=coursegen_client=info cargo run --example course_generator -- "A course that teaches juniors how to code python"
//! ```

use anyhow::Context;
use coursegen::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let description = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "A course that teaches juniors how to code python".to_string());

    let generator = CourseGenerator::from_env().context("failed to set up the generator")?;

    println!("=== Titles ===");
    println!("{}\n", generator.generate_titles(&description, DEFAULT_MAX_TOKENS).await?);

    println!("=== Marketing text ===");
    println!(
        "{}\n",
        generator
            .generate_marketing_text(&description, DEFAULT_MAX_TOKENS)
            .await?
    );

    println!("=== Course outline ===");
    println!(
        "{}\n",
        generator
            .generate_course_outline(&description, Some("beginner"), DEFAULT_MAX_TOKENS)
            .await?
    );

    println!("=== Coding exercises ===");
    println!(
        "{}",
        generator
            .generate_coding_exercises("Pandas module", None, DEFAULT_MAX_TOKENS)
            .await?
    );

    Ok(())
}
