use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentiment category reported by the tally query.
///
/// Ordering follows the order the tally prompt lists the labels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Negativo")]
    Negative,
    #[serde(rename = "Neutro")]
    Neutral,
    #[serde(rename = "Positivo")]
    Positive,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] =
        [SentimentLabel::Negative, SentimentLabel::Neutral, SentimentLabel::Positive];

    /// Literal label the model is asked to emit.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Negative => "Negativo",
            SentimentLabel::Neutral => "Neutro",
            SentimentLabel::Positive => "Positivo",
        }
    }

    /// Case-insensitive match of a trimmed label.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|candidate| candidate.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
