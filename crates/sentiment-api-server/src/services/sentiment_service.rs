use std::sync::Arc;
use tracing::{debug, error, info};

use crate::models::{ClassificationLabel, SentimentOutcome};
use crate::services::provider::SentimentProvider;
use crate::utils::error::ApiError;

/// Provider wiring, decided once at startup
#[derive(Clone)]
pub enum SentimentBackend {
    Configured(Arc<dyn SentimentProvider>),
    Unconfigured,
}

#[derive(Clone)]
pub struct SentimentService {
    backend: SentimentBackend,
}

impl SentimentService {
    pub fn new(backend: SentimentBackend) -> Self {
        Self { backend }
    }

    pub fn with_provider(provider: Arc<dyn SentimentProvider>) -> Self {
        Self::new(SentimentBackend::Configured(provider))
    }

    pub fn unconfigured() -> Self {
        Self::new(SentimentBackend::Unconfigured)
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.backend, SentimentBackend::Configured(_))
    }

    /// Classify text and reduce the winning label to the three-way taxonomy
    pub async fn classify(&self, text: &str) -> Result<SentimentOutcome, ApiError> {
        let provider = match &self.backend {
            SentimentBackend::Configured(provider) => provider,
            SentimentBackend::Unconfigured => return Err(ApiError::ProviderNotConfigured),
        };

        info!("Analyzing: {:?}", text);

        let labels = provider.classify(text).await.map_err(|e| {
            error!("Provider call failed: {:#}", e);
            ApiError::ProviderResponse(format!("{:#}", e))
        })?;

        for item in &labels {
            debug!("  {}: {:.3}", item.label.to_uppercase(), item.score);
        }

        let top = Self::top_label(&labels).ok_or_else(|| {
            ApiError::ProviderResponse(format!("Unexpected API response format: {:?}", labels))
        })?;

        let outcome = SentimentOutcome::from_top_label(top);
        info!(
            "Result: {} (score: {:.2})",
            outcome.sentiment, outcome.sentiment_score
        );

        Ok(outcome)
    }

    /// Providers return labels best-first; pick the max anyway so an
    /// unsorted answer still yields the right winner.
    fn top_label(labels: &[ClassificationLabel]) -> Option<&ClassificationLabel> {
        labels.iter().reduce(|best, item| if item.score > best.score { item } else { best })
    }
}
