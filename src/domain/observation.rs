//! Report request and observation models.

use serde::{Deserialize, Serialize};

/// Incoming report request: one course/year and its free-text observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportRequest {
    pub course: String,
    pub year: i32,
    #[serde(default)]
    pub observations: Vec<String>,
}

impl ReportRequest {
    pub fn new(course: impl Into<String>, year: i32, observations: Vec<String>) -> Self {
        Self { course: course.into(), year, observations }
    }

    /// Number of observations the model is asked to tally.
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations in submission order, each tagged with the request metadata.
    pub fn observations(&self) -> impl Iterator<Item = Observation<'_>> {
        self.observations.iter().enumerate().map(move |(index, text)| Observation {
            index,
            course: &self.course,
            year: self.year,
            text,
        })
    }
}

/// A single observation borrowed from its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation<'a> {
    /// Position in the request's observation list.
    pub index: usize,
    pub course: &'a str,
    pub year: i32,
    pub text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_from_json() {
        let json = r#"{"course": "Cálculo 1", "year": 2025, "observations": ["a", "b"]}"#;
        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.course, "Cálculo 1");
        assert_eq!(request.year, 2025);
        assert_eq!(request.observation_count(), 2);
    }

    #[test]
    fn missing_observations_defaults_to_empty() {
        let request: ReportRequest =
            serde_json::from_str(r#"{"course": "Física", "year": 2024}"#).unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<ReportRequest, _> =
            serde_json::from_str(r#"{"course": "x", "year": 1, "extra": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn observations_carry_index_and_metadata() {
        let request = ReportRequest::new("Álgebra", 2023, vec!["um".into(), "dois".into()]);
        let observations: Vec<_> = request.observations().collect();
        assert_eq!(observations[1].index, 1);
        assert_eq!(observations[1].course, "Álgebra");
        assert_eq!(observations[1].year, 2023);
        assert_eq!(observations[1].text, "dois");
    }
}
