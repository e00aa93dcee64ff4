use anyhow::Result;
use async_trait::async_trait;

use crate::models::ClassificationLabel;

/// Hosted text-classification backend.
///
/// Implementations return every label the model produced, sorted by score
/// (highest first). An empty vector is a valid but unusable answer; the
/// caller decides how to treat it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<ClassificationLabel>>;
}
