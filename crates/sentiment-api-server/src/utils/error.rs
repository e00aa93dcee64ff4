use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Please wait {:.1} seconds", .wait.as_secs_f64())]
    RateLimited { wait: Duration },

    #[error("Hugging Face client not configured. Please add your API token.")]
    ProviderNotConfigured,

    #[error("Sentiment analysis failed: {0}")]
    ProviderResponse(String),

    #[error("Error processing text: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    /// Same text as `message`, under the key browser clients read
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    retry_after_seconds: Option<f64>,
}

/// Round a wait to one decimal, the precision reported to callers
pub fn round_wait(wait: Duration) -> f64 {
    (wait.as_secs_f64() * 10.0).round() / 10.0
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, error_type, retry_after) = match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", None)
            },
            ApiError::RateLimited { wait } => {
                tracing::warn!("Rate limited, wait {:?}", wait);
                (StatusCode::TOO_MANY_REQUESTS, "RateLimited", Some(*wait))
            },
            ApiError::ProviderNotConfigured => {
                tracing::error!("Provider not configured");
                (StatusCode::INTERNAL_SERVER_ERROR, "ProviderNotConfigured", None)
            },
            ApiError::ProviderResponse(msg) => {
                tracing::error!("Provider error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "ProviderError", None)
            },
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", None)
            },
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            detail: message.clone(),
            message,
            retry_after_seconds: retry_after.map(round_wait),
        });

        let mut response = (status, body).into_response();

        if let Some(wait) = retry_after {
            let secs = wait.as_secs_f64().ceil().max(1.0) as u64;
            if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}
