pub mod huggingface;
pub mod keywords;
pub mod provider;
pub mod sentiment_service;

pub use huggingface::HuggingFaceClient;
pub use keywords::extract_keywords;
pub use provider::SentimentProvider;
pub use sentiment_service::{SentimentBackend, SentimentService};
