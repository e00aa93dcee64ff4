use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::models::{ProcessTextRequest, ProcessTextResponse, SentimentPayload};
use crate::services::{extract_keywords, SentimentService};
use crate::utils::error::ApiError;
use crate::utils::rate_limiter::RateLimiter;

pub async fn process_text_handler(
    State(rate_limiter): State<Arc<RateLimiter>>,
    State(sentiment_service): State<Arc<SentimentService>>,
    payload: Result<Json<ProcessTextRequest>, JsonRejection>,
) -> Result<Json<ProcessTextResponse>, ApiError> {
    // Gate stays locked until the request is either rejected or recorded
    let text = {
        let permit = rate_limiter.check()?;
        let text = validate_text(payload)?;
        permit.record();
        text
    };

    let outcome = sentiment_service.classify(&text).await?;
    let keywords = extract_keywords(&text);

    let data = SentimentPayload {
        sentiment: outcome.sentiment,
        sentiment_score: outcome.sentiment_score,
        keywords,
        emotions: outcome.emotions,
    };

    let result = serde_json::to_string_pretty(&data)
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    info!("Final result: {}", result);

    Ok(Json(ProcessTextResponse { result, data }))
}

fn validate_text(payload: Result<Json<ProcessTextRequest>, JsonRejection>) -> Result<String, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    match request.text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ApiError::BadRequest("Text cannot be empty".to_string())),
    }
}
