use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const HOME: &str = r#"
Home:
  greeting: hello
  components:
    - type: label
      text: ..greeting
      style:
        color: .Theme.accent
    - type: image
      path: ~/logo.png
"#;

const THEME: &str = r#"
Theme:
  accent: "0x112233ff"
"#;

const BROKEN: &str = r#"
Broken:
  components:
    - type: label
      text: .Theme.missing
"#;

fn write_documents(dir: &tempfile::TempDir) -> Vec<PathBuf> {
    [("Home.yaml", HOME), ("Theme.yaml", THEME), ("Broken.yaml", BROKEN)]
        .into_iter()
        .map(|(name, contents)| {
            let path = dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path
        })
        .collect()
}

fn pagedoc(args: &[&str], documents: &[PathBuf]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagedoc"))
        .args(documents)
        .args(args)
        .arg("--no-colors")
        .output()
        .expect("failed to run pagedoc")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_single_page_prints_components() {
    let dir = tempfile::tempdir().unwrap();
    let documents = write_documents(&dir);
    let output = pagedoc(&["--page", "Home", "--base-url", "https://cdn.test/"], &documents);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let tree = stdout_json(&output);
    assert_eq!(tree[0]["text"], json!("hello"));
    assert_eq!(tree[0]["style"]["color"], json!("#112233ff"));
    assert_eq!(tree[1]["path"], json!("https://cdn.test/logo.png"));
}

#[test]
fn test_several_pages_print_a_map() {
    let dir = tempfile::tempdir().unwrap();
    let documents = write_documents(&dir);
    let output = pagedoc(&["-p", "Home", "-p", "Broken", "--base-url", "https://cdn.test"], &documents);
    assert!(output.status.success());

    let tree = stdout_json(&output);
    assert!(tree["Home"].is_array());
    assert!(tree["Broken"][0].get("text").is_none());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error[UnresolvedReference]"));
}

#[test]
fn test_fail_on_error_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let documents = write_documents(&dir);
    let output = pagedoc(&["--page", "Broken", "--fail-on-error"], &documents);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unknown_page_fails() {
    let dir = tempfile::tempdir().unwrap();
    let documents = write_documents(&dir);
    let output = pagedoc(&["--page", "Nowhere"], &documents);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Nowhere"));
}

#[test]
fn test_yaml_output_and_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let documents = write_documents(&dir);
    let config = dir.path().join("pagedoc.yaml");
    fs::write(&config, "baseUrl: https://files.test\n").unwrap();

    let output = pagedoc(
        &["--page", "Home", "--config", config.to_str().unwrap(), "--output", "yaml"],
        &documents,
    );
    assert!(output.status.success());
    let tree: Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(tree[1]["path"], json!("https://files.test/logo.png"));
}
