use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{SentimentLabel, SentimentTally, TallyError};

/// Tolerance for the fractions of a distribution summing to one.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Per-category sentiment fractions in `[0, 1]` that sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentDistribution(BTreeMap<SentimentLabel, f64>);

impl SentimentDistribution {
    /// Divide each count by the tally total.
    pub fn from_tally(tally: &SentimentTally) -> Result<Self, TallyError> {
        let total = tally.total();
        if total <= 0.0 {
            return Err(TallyError::ZeroTotal);
        }
        let fractions = SentimentLabel::ALL
            .into_iter()
            .map(|label| (label, tally.count(label) / total))
            .collect();
        Ok(Self(fractions))
    }

    pub fn fraction(&self, label: SentimentLabel) -> f64 {
        self.0.get(&label).copied().unwrap_or(0.0)
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, f64)> + '_ {
        self.0.iter().map(|(label, fraction)| (*label, *fraction))
    }
}
