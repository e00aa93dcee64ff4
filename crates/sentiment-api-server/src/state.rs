use std::sync::Arc;
use axum::extract::FromRef;

use crate::config::Settings;
use crate::services::SentimentService;
use crate::utils::rate_limiter::RateLimiter;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub sentiment_service: Arc<SentimentService>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(settings: Settings, sentiment_service: SentimentService) -> Self {
        let rate_limiter = Arc::new(RateLimiter::new(settings.rate_limit.min_interval()));

        Self {
            settings,
            sentiment_service: Arc::new(sentiment_service),
            rate_limiter,
        }
    }
}

impl FromRef<AppState> for Arc<SentimentService> {
    fn from_ref(state: &AppState) -> Self {
        state.sentiment_service.clone()
    }
}

impl FromRef<AppState> for Arc<RateLimiter> {
    fn from_ref(state: &AppState) -> Self {
        state.rate_limiter.clone()
    }
}
