use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::models::ClassificationLabel;
use crate::services::provider::SentimentProvider;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Text-classification output. The inference API returns one list per input,
/// older deployments return the list unwrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<ClassificationLabel>>),
    Single(Vec<ClassificationLabel>),
}

impl InferenceResponse {
    fn into_labels(self) -> Vec<ClassificationLabel> {
        match self {
            Self::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Single(labels) => labels,
        }
    }
}

/// Hugging Face Inference API client for text classification
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    base_url: String,
    model: String,
    api_token: String,
}

impl HuggingFaceClient {
    pub fn new(config: &ProviderConfig, api_token: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.timeout())
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_token: api_token.into(),
        }
    }

    /// Client only when a usable token is configured
    pub fn from_config(config: &ProviderConfig) -> Option<Self> {
        config.token().map(|token| Self::new(config, token))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

#[async_trait]
impl SentimentProvider for HuggingFaceClient {
    async fn classify(&self, text: &str) -> Result<Vec<ClassificationLabel>> {
        debug!("Classifying {} chars with {}", text.len(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_token)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await
            .context("Failed to connect to Hugging Face inference API")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Hugging Face response body")?;

        if !status.is_success() {
            anyhow::bail!("Hugging Face API error ({}): {}", status, body);
        }

        let parsed: InferenceResponse = serde_json::from_str(&body)
            .map_err(|_| anyhow::anyhow!("Unexpected API response format: {}", body))?;

        let mut labels = parsed.into_labels();
        labels.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";

    fn client_for(server: &MockServer) -> HuggingFaceClient {
        let mut provider = Settings::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap()
            .provider;
        provider.base_url = server.uri();

        HuggingFaceClient::new(&provider, "hf_test")
    }

    #[tokio::test]
    async fn test_batched_response_sorted() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/models/{}", MODEL)))
            .and(header("authorization", "Bearer hf_test"))
            .and(body_json(serde_json::json!({ "inputs": "great day" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([[
                { "label": "neutral", "score": 0.04 },
                { "label": "positive", "score": 0.95 },
                { "label": "negative", "score": 0.01 }
            ]])))
            .expect(1)
            .mount(&server)
            .await;

        let labels = client_for(&server).classify("great day").await.unwrap();

        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].label, "positive");
        assert_eq!(labels[0].score, 0.95);
        assert_eq!(labels[2].label, "negative");
    }

    #[tokio::test]
    async fn test_flat_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "label": "LABEL_0", "score": 0.7 },
                { "label": "LABEL_1", "score": 0.3 }
            ])))
            .mount(&server)
            .await;

        let labels = client_for(&server).classify("meh").await.unwrap();
        assert_eq!(labels[0].label, "LABEL_0");
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
            .mount(&server)
            .await;

        let err = client_for(&server).classify("hi").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("401"), "{}", msg);
        assert!(msg.contains("Invalid credentials"), "{}", msg);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "error": "Model is loading" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).classify("hi").await.unwrap_err();
        assert!(err.to_string().starts_with("Unexpected API response format"));
    }

    #[test]
    fn test_from_config_requires_token() {
        let mut provider = Settings::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap()
            .provider;

        assert!(HuggingFaceClient::from_config(&provider).is_none());

        provider.api_token = Some("hf_x".to_string());
        let client = HuggingFaceClient::from_config(&provider).unwrap();
        assert_eq!(client.model(), MODEL);
    }
}
