//! Shared testing utilities for sgq CLI and library tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CALCULO_REQUEST: &str = r#"{
  "course": "Cálculo 1",
  "year": 2025,
  "observations": [
    "O professor explica muito bem a matéria.",
    "As aulas práticas são demasiado rápidas.",
    "Nada a apontar."
  ]
}"#;

pub const POSITIVE_ANSWER: &str = "- Clareza : \"O professor explica muito bem a matéria.\"";
pub const NEGATIVE_ANSWER: &str = "- Ritmo : \"As aulas práticas são demasiado rápidas.\"";

/// Testing harness providing an isolated working directory for CLI exercises.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `sgq` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sgq").expect("Failed to locate sgq binary");
        cmd.current_dir(self.work_dir()).env("RUST_LOG", "off");
        cmd
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `sgq.toml` pointing both endpoints at `base_url`.
    pub fn write_config(&self, base_url: &str, extra: &str) -> PathBuf {
        self.write_file("sgq.toml", &service_config_toml(base_url, extra))
    }
}

pub fn service_config_toml(base_url: &str, extra: &str) -> String {
    format!(
        r#"[model]
base_url = "{base_url}"
model = "llama3.2:3b"
timeout_secs = 5

[embedding]
base_url = "{base_url}"
model = "nomic-embed-text"
timeout_secs = 5

{extra}
"#
    )
}

/// Register Ollama mocks answering the three analytical queries.
pub fn mock_ollama(server: &mut mockito::ServerGuard, tally: &str) -> Vec<mockito::Mock> {
    use mockito::Matcher;

    vec![
        server
            .mock("POST", "/api/embed")
            .match_body(Matcher::Regex("Disciplina:".into()))
            .with_status(200)
            .with_body(r#"{"embeddings": [[1.0, 0.0], [0.0, 1.0], [0.5, 0.5]]}"#)
            .create(),
        server
            .mock("POST", "/api/embed")
            .match_body(Matcher::Regex("documentos da disciplina".into()))
            .with_status(200)
            .with_body(r#"{"embeddings": [[0.9, 0.1]]}"#)
            .create(),
        server
            .mock("POST", "/api/generate")
            .match_body(Matcher::Regex("pontos positivos".into()))
            .with_status(200)
            .with_body(generate_body(POSITIVE_ANSWER))
            .create(),
        server
            .mock("POST", "/api/generate")
            .match_body(Matcher::Regex("pontos negativos".into()))
            .with_status(200)
            .with_body(generate_body(NEGATIVE_ANSWER))
            .create(),
        server
            .mock("POST", "/api/generate")
            .match_body(Matcher::Regex("Conta quantos".into()))
            .with_status(200)
            .with_body(generate_body(tally))
            .create(),
    ]
}

fn generate_body(answer: &str) -> String {
    serde_json::json!({ "model": "llama3.2:3b", "response": answer, "done": true }).to_string()
}
