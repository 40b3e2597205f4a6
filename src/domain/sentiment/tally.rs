//! Parsing of the raw sentiment tally response.

use std::collections::BTreeMap;

use thiserror::Error;

use super::SentimentLabel;

/// Ways a tally response can violate its `<Label>:<count>` contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TallyError {
    #[error("line '{line}' has no ':' separator")]
    MissingSeparator { line: String },

    #[error("line '{line}' has an empty label or count")]
    IncompleteLine { line: String },

    #[error("unknown category label '{label}'")]
    UnknownLabel { label: String },

    #[error("count '{value}' for {label} is not a non-negative number")]
    InvalidCount { label: SentimentLabel, value: String },

    #[error("category {label} is reported more than once")]
    DuplicateLabel { label: SentimentLabel },

    #[error("missing categories: {}", .missing.iter().map(|l| l.as_str()).collect::<Vec<_>>().join(", "))]
    MissingLabels { missing: Vec<SentimentLabel> },

    #[error("counts sum to zero")]
    ZeroTotal,
}

/// Validated per-category counts reported by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentTally {
    counts: BTreeMap<SentimentLabel, f64>,
}

impl SentimentTally {
    /// Parse a tally response. Any malformed line fails the whole tally.
    pub fn parse(raw: &str) -> Result<Self, TallyError> {
        let mut counts = BTreeMap::new();

        for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let (label, count) = parse_line(line)?;
            if counts.insert(label, count).is_some() {
                return Err(TallyError::DuplicateLabel { label });
            }
        }

        let missing: Vec<SentimentLabel> = SentimentLabel::ALL
            .into_iter()
            .filter(|label| !counts.contains_key(label))
            .collect();
        if !missing.is_empty() {
            return Err(TallyError::MissingLabels { missing });
        }

        let tally = Self { counts };
        if tally.total() <= 0.0 {
            return Err(TallyError::ZeroTotal);
        }
        Ok(tally)
    }

    pub fn count(&self, label: SentimentLabel) -> f64 {
        self.counts.get(&label).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.counts.values().sum()
    }

    pub fn counts(&self) -> &BTreeMap<SentimentLabel, f64> {
        &self.counts
    }
}

fn parse_line(line: &str) -> Result<(SentimentLabel, f64), TallyError> {
    let stripped = line.trim_start_matches(['-', '*']).trim_start();
    let (label, value) = stripped
        .split_once(':')
        .ok_or_else(|| TallyError::MissingSeparator { line: line.to_string() })?;

    let (label, value) = (label.trim(), value.trim());
    if label.is_empty() || value.is_empty() {
        return Err(TallyError::IncompleteLine { line: line.to_string() });
    }

    let label = SentimentLabel::parse(label)
        .ok_or_else(|| TallyError::UnknownLabel { label: label.to_string() })?;

    let count = value
        .parse::<f64>()
        .ok()
        .filter(|count| count.is_finite() && *count >= 0.0)
        .ok_or_else(|| TallyError::InvalidCount { label, value: value.to_string() })?;

    Ok((label, count))
}
