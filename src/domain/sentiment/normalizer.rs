//! Response normalizer for the sentiment tally query.
//!
//! Raw model text goes in, a validated distribution comes out. All knowledge of
//! the tally's text format stays behind [`normalize_tally`].

use serde::{Deserialize, Serialize};

use super::{SentimentDistribution, SentimentTally};
use crate::domain::AppError;

/// Policy for a reported total that differs from the observation count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalCheck {
    /// Fail with [`AppError::TallyTotalMismatch`].
    Strict,
    /// Log a warning and normalize anyway.
    #[default]
    Warn,
}

/// Parse, validate and normalize a tally response.
pub fn normalize_tally(
    raw: &str,
    observation_count: usize,
    check: TotalCheck,
) -> Result<SentimentDistribution, AppError> {
    let tally = SentimentTally::parse(raw)?;

    let reported = tally.total();
    if (reported - observation_count as f64).abs() > f64::EPSILON {
        match check {
            TotalCheck::Strict => {
                return Err(AppError::TallyTotalMismatch {
                    reported,
                    expected: observation_count,
                });
            }
            TotalCheck::Warn => tracing::warn!(
                reported,
                expected = observation_count,
                "Sentiment tally total differs from observation count"
            ),
        }
    }

    Ok(SentimentDistribution::from_tally(&tally)?)
}
