//! Analytical questions asked of the corpus.

use std::fmt;

/// One of the three analytical questions issued per report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnalyticalQuery {
    Positive,
    Negative,
    SentimentTally,
}

impl AnalyticalQuery {
    pub const ALL: [AnalyticalQuery; 3] =
        [AnalyticalQuery::Positive, AnalyticalQuery::Negative, AnalyticalQuery::SentimentTally];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticalQuery::Positive => "positive",
            AnalyticalQuery::Negative => "negative",
            AnalyticalQuery::SentimentTally => "sentiment",
        }
    }

    /// Template file name of this query's prompt.
    pub fn template_name(&self) -> &'static str {
        match self {
            AnalyticalQuery::Positive => "positive.j2",
            AnalyticalQuery::Negative => "negative.j2",
            AnalyticalQuery::SentimentTally => "sentiment.j2",
        }
    }
}

impl fmt::Display for AnalyticalQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unparsed model output for one analytical query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawModelResponse {
    pub query: AnalyticalQuery,
    pub text: String,
}
