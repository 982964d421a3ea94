use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("ner-workbench").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn models_subcommand_lists_identifiers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = Command::cargo_bin("ner-workbench").expect("binary exists");
    let output = cmd
        .env("MODELS_DIR", dir.path())
        .arg("models")
        .output()
        .expect("command runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("en_core_web_sm"));
    assert!(stdout.contains("en_core_web_lg"));
}
