//! Credential and endpoint settings read from the process environment
//!
//! A local `.env` file is loaded first, so values there behave exactly like
//! exported variables. Variables already set in the process win.

use coursegen_core::Error;
use std::path::{Path, PathBuf};
use std::sync::{Once, OnceLock};
use tracing::{debug, warn};

/// Primary variable holding the API key
pub const API_KEY_VAR: &str = "API_KEY";

/// Fallback variable holding the API key
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Optional override for the provider base URL
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Optional override for the model
pub const OPENAI_MODEL_VAR: &str = "OPENAI_MODEL";

static DOTENV: Once = Once::new();
static API_KEY: OnceLock<Option<String>> = OnceLock::new();

/// Load variables from a `.env` file in the working directory, if present
pub fn load_dotenv() {
    report_dotenv(dotenvy::dotenv());
}

/// Load variables from a specific dotenv file, if present
///
/// Variables already set in the process are left alone. A missing file is
/// not an error.
pub fn load_dotenv_from(path: impl AsRef<Path>) {
    let path = path.as_ref();
    report_dotenv(dotenvy::from_path(path).map(|()| path.to_path_buf()));
}

fn report_dotenv(result: Result<PathBuf, dotenvy::Error>) {
    match result {
        Ok(path) => debug!(path = %path.display(), "loaded environment from dotenv file"),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(error = %e, "failed to load .env file"),
    }
}

/// Read a variable from the process environment
///
/// The working directory's `.env` file is loaded on the first call, so
/// every accessor in this module sees the same merged environment.
pub fn env_lookup(name: &str) -> Option<String> {
    DOTENV.call_once(load_dotenv);
    std::env::var(name).ok()
}

/// The API key for this process
///
/// Read once, on first use, and reused for the life of the process.
pub fn api_key() -> Result<String, Error> {
    API_KEY
        .get_or_init(|| resolve_api_key(env_lookup))
        .clone()
        .ok_or_else(missing_api_key)
}

/// Base URL override, if one is set
pub fn base_url() -> Option<String> {
    resolve_base_url(env_lookup)
}

/// Model override, if one is set
pub fn model() -> Option<String> {
    resolve_model(env_lookup)
}

/// Pick the API key out of a variable lookup, `API_KEY` first
///
/// Blank values count as unset.
pub fn resolve_api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    [API_KEY_VAR, OPENAI_API_KEY_VAR]
        .into_iter()
        .find_map(|name| non_empty(lookup(name)))
}

/// Pick the base URL override out of a variable lookup
pub fn resolve_base_url(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    non_empty(lookup(OPENAI_BASE_URL_VAR))
}

/// Pick the model override out of a variable lookup
pub fn resolve_model(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    non_empty(lookup(OPENAI_MODEL_VAR))
}

/// The error reported when neither key variable is set
pub fn missing_api_key() -> Error {
    Error::Authentication(format!(
        "no API key found; set {API_KEY_VAR} or {OPENAI_API_KEY_VAR}"
    ))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
