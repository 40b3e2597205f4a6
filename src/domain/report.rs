//! Report assembly and rendering.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{SentimentDistribution, SentimentLabel};

/// Text returned in both qualitative fields when there is nothing to analyse.
pub const NO_DATA_MESSAGE: &str = "Sem observações para analisar.";

/// The terminal artifact of one report request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub positive: String,
    pub negative: String,
    /// Absent in the qualitative-only variant and in the no-data report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentDistribution>,
}

impl Report {
    /// Merge the query results. The texts are kept exactly as the model returned them.
    pub fn assemble(
        positive: String,
        negative: String,
        sentiment: Option<SentimentDistribution>,
    ) -> Self {
        Self { positive, negative, sentiment }
    }

    /// Fixed report for a request without observations.
    pub fn no_data() -> Self {
        Self {
            positive: NO_DATA_MESSAGE.to_string(),
            negative: NO_DATA_MESSAGE.to_string(),
            sentiment: None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        *self == Self::no_data()
    }

    /// Executive summary in Markdown.
    pub fn to_markdown(&self, course: &str, year: i32, generated_on: NaiveDate) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "## Sumário Executivo - Avaliação da Disciplina de {} ({})\n",
            course, year
        );
        let _ = writeln!(out, "### Objetivo");
        let _ = writeln!(
            out,
            "Este relatório resume os principais pontos positivos e negativos identificados nas \
             respostas dos alunos à disciplina de {}, com base numa análise de conteúdo textual e \
             sentimentos.\n",
            course
        );
        let _ = writeln!(out, "### Pontos positivos\n{}\n", self.positive.trim());
        let _ = writeln!(out, "### Pontos a melhorar\n{}\n", self.negative.trim());

        if let Some(sentiment) = &self.sentiment {
            let _ = writeln!(out, "### Distribuição dos sentimentos\n");
            let _ = writeln!(out, "| Sentimento | Frequência |");
            let _ = writeln!(out, "|---|---|");
            for label in SentimentLabel::ALL {
                let _ =
                    writeln!(out, "| {} | {:.1}% |", label.as_str(), sentiment.fraction(label) * 100.0);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "_Gerado em {}_", generated_on.format("%Y-%m-%d"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SentimentTally;

    fn distribution() -> SentimentDistribution {
        let tally = SentimentTally::parse("Negativo:1\nNeutro:1\nPositivo:2").unwrap();
        SentimentDistribution::from_tally(&tally).unwrap()
    }

    #[test]
    fn no_data_report_is_recognised() {
        let report = Report::no_data();
        assert!(report.is_no_data());
        assert_eq!(report.positive, NO_DATA_MESSAGE);
        assert!(report.sentiment.is_none());
    }

    #[test]
    fn assemble_keeps_texts_unchanged() {
        let report = Report::assemble("  a : \"b\"\n".into(), "c : \"d\"".into(), None);
        assert_eq!(report.positive, "  a : \"b\"\n");
        assert!(!report.is_no_data());
    }

    #[test]
    fn serialization_omits_missing_sentiment() {
        let json = serde_json::to_value(Report::assemble("p".into(), "n".into(), None)).unwrap();
        assert!(json.get("sentiment").is_none());

        let json =
            serde_json::to_value(Report::assemble("p".into(), "n".into(), Some(distribution())))
                .unwrap();
        assert_eq!(json["sentiment"]["Positivo"], 0.5);
    }

    #[test]
    fn markdown_contains_sections_and_percentages() {
        let report = Report::assemble(
            "- Aulas práticas : \"Gostei das aulas práticas.\"".into(),
            "- Teoria : \"As aulas teóricas foram confusas.\"".into(),
            Some(distribution()),
        );
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let markdown = report.to_markdown("Cálculo 1", 2025, date);

        assert!(markdown.starts_with("## Sumário Executivo - Avaliação da Disciplina de Cálculo 1 (2025)"));
        assert!(markdown.contains("### Pontos positivos\n- Aulas práticas"));
        assert!(markdown.contains("### Pontos a melhorar\n- Teoria"));
        assert!(markdown.contains("| Positivo | 50.0% |"));
        assert!(markdown.contains("_Gerado em 2025-07-01_"));
    }

    #[test]
    fn markdown_skips_distribution_when_absent() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let markdown = Report::no_data().to_markdown("Física", 2024, date);
        assert!(!markdown.contains("Distribuição dos sentimentos"));
    }
}
