mod common;

use common::TestContext;
use predicates::prelude::*;

const README: &str = "# sgq\n\nRelatórios de disciplinas.\n\n## Uso\n\n- report\n- describe\n";

#[test]
fn describe_prints_heading_outline() {
    let ctx = TestContext::new();
    ctx.write_file("README.md", README);

    let output = ctx.cli().arg("describe").output().unwrap();
    assert!(output.status.success());

    let outline: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        outline,
        serde_json::json!({
            "sgq": { "content": "Relatórios de disciplinas.", "Uso": ["report", "describe"] }
        })
    );
}

#[test]
fn describe_accepts_explicit_path() {
    let ctx = TestContext::new();
    ctx.write_file("NOTES.md", "# Notas\ntexto\n");

    ctx.cli()
        .args(["describe", "--path", "NOTES.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Notas\": \"texto\""));
}

#[test]
fn describe_missing_file_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("d")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("README.md"));
}
