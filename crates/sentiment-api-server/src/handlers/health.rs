use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    message: String,
    status: String,
    model: String,
    info: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    api_key_configured: bool,
    ai_provider: String,
}

pub async fn root(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "AI-Powered Sentiment Analysis API".to_string(),
        status: "ok".to_string(),
        model: state.settings.provider.model_label.clone(),
        info: "100% AI-driven sentiment analysis".to_string(),
    })
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            api_key_configured: state.sentiment_service.is_configured(),
            ai_provider: state.settings.provider.name.clone(),
        }),
    )
}
