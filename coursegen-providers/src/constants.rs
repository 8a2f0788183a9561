//! Constants for provider implementations

use std::time::Duration;

/// Provider name reported in errors and logs
pub const OPENAI_PROVIDER_NAME: &str = "openai";

/// Default OpenAI base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Header carrying the optional OpenAI organization ID (lowercase, as sent)
pub const OPENAI_ORGANIZATION_HEADER: &str = "openai-organization";

/// Transport timeout for a single request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);
