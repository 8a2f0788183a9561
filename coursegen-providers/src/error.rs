//! Conversions from transport and provider failures to core errors

use crate::http::HttpResponse;
use coursegen_core::Error as CoreError;
use serde::Deserialize;

/// Convert reqwest errors to core errors
pub fn network_error(error: reqwest::Error) -> CoreError {
    if error.is_timeout() {
        return CoreError::Timeout;
    }
    CoreError::Network {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

/// Convert serialization errors to core errors
pub fn serialization_error(error: serde_json::Error) -> CoreError {
    CoreError::Serialization {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

/// Hand back the body of a successful response, or the matching error
///
/// 401/403 become [`CoreError::Authentication`]; everything else non-2xx
/// becomes [`CoreError::Provider`], with the server's `Retry-After` kept.
pub fn check_status(provider: &str, response: HttpResponse) -> Result<String, CoreError> {
    if response.is_success() {
        return Ok(response.body);
    }

    let message = error_message(&response);
    match response.status {
        401 | 403 => Err(CoreError::Authentication(message)),
        status => Err(CoreError::Provider {
            provider: provider.to_string(),
            message: format!("HTTP {status}: {message}"),
            retry_after: response.retry_after,
            source: None,
        }),
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn error_message(response: &HttpResponse) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&response.body) {
        return envelope.error.message;
    }
    let body = response.body.trim();
    if body.is_empty() {
        format!("HTTP {} error", response.status)
    } else {
        body.to_string()
    }
}
