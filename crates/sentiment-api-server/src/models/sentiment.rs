use serde::{Deserialize, Serialize};

// ===== SENTIMENT TAXONOMY =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Map a provider label to the three-way taxonomy.
    /// Covers both named labels and the bare `LABEL_n` ids of the RoBERTa model.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "POSITIVE" | "LABEL_2" => Self::Positive,
            "NEGATIVE" | "LABEL_0" => Self::Negative,
            "NEUTRAL" | "LABEL_1" => Self::Neutral,
            _ => Self::Neutral,
        }
    }

    pub fn emotions(self) -> &'static [&'static str] {
        match self {
            Self::Positive => &["happy", "joyful", "excited"],
            Self::Negative => &["angry", "sad", "frustrated"],
            Self::Neutral => &["calm", "neutral", "composed"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== PROVIDER MODELS =====

/// One label/score pair as returned by the classification model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationLabel {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentOutcome {
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub emotions: Vec<String>,
}

impl SentimentOutcome {
    pub fn from_top_label(top: &ClassificationLabel) -> Self {
        let sentiment = Sentiment::from_label(&top.label);

        Self {
            sentiment,
            sentiment_score: round_score(top.score),
            emotions: sentiment.emotions().iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Clamp to [0, 1] and round to two decimals
pub fn round_score(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

// ===== REQUEST / RESPONSE MODELS =====

#[derive(Debug, Deserialize)]
pub struct ProcessTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentPayload {
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub keywords: Vec<String>,
    pub emotions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessTextResponse {
    /// Pretty-printed JSON copy of `data`
    pub result: String,
    pub data: SentimentPayload,
}
