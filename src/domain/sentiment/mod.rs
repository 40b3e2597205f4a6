mod distribution;
mod label;
mod normalizer;
mod tally;

pub use distribution::{SUM_TOLERANCE, SentimentDistribution};
pub use label::SentimentLabel;
pub use normalizer::{TotalCheck, normalize_tally};
pub use tally::{SentimentTally, TallyError};
