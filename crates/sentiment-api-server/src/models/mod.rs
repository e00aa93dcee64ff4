pub mod sentiment;

pub use sentiment::{
    ClassificationLabel, ProcessTextRequest, ProcessTextResponse, Sentiment, SentimentOutcome,
    SentimentPayload,
};
