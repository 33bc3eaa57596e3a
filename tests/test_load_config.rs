use content_loader::load_config::{load_config, PROGRAM_ENV_VAR};
use content_loader_core::config::{IndexRange, LoadConfig};
use serial_test::serial;
use std::env;
use std::fs::write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn config_file(yaml: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), yaml).unwrap();
    file
}

/// Without a file the loader returns the historical defaults.
#[test]
#[serial]
fn test_load_config_defaults_without_file() {
    env::remove_var(PROGRAM_ENV_VAR);

    let config = load_config(None).expect("Defaults should load");

    assert_eq!(config, LoadConfig::default());
    assert_eq!(config.range, IndexRange::new(32, 100));
    assert_eq!(config.texts_dir, PathBuf::from("./texts"));
    assert_eq!(config.command.program, "bun");
    assert_eq!(config.command.args, vec!["run", "pull-content.ts"]);
}

/// Keys missing from the file keep their defaults.
#[test]
#[serial]
fn test_load_config_partial_file_overrides_only_given_keys() {
    env::remove_var(PROGRAM_ENV_VAR);
    let file = config_file(
        r#"
range:
  start: 5
texts_dir: ./corpus
"#,
    );

    let config = load_config(Some(file.path())).expect("Config should load");

    assert_eq!(config.range, IndexRange::new(5, 100));
    assert_eq!(config.texts_dir, PathBuf::from("./corpus"));
    assert_eq!(config.file_template, "text_{index}.txt");
    assert_eq!(config.command.program, "bun");
}

#[test]
#[serial]
fn test_load_config_full_file() {
    env::remove_var(PROGRAM_ENV_VAR);
    let file = config_file(
        r#"
range:
  start: 1
  end: 3
texts_dir: ./texts
file_template: "passage_{index}.md"
command:
  program: node
  args: ["pull-content.js"]
"#,
    );

    let config = load_config(Some(file.path())).expect("Config should load");

    assert_eq!(config.range, IndexRange::new(1, 3));
    assert_eq!(config.file_name_for(2), "passage_2.md");
    assert_eq!(config.command.program, "node");
    assert_eq!(config.command.args, vec!["pull-content.js"]);
}

#[test]
#[serial]
fn test_load_config_empty_file_means_defaults() {
    env::remove_var(PROGRAM_ENV_VAR);
    let file = config_file("");

    let config = load_config(Some(file.path())).expect("Empty config should load");
    assert_eq!(config, LoadConfig::default());
}

#[test]
#[serial]
fn test_load_config_env_overrides_program() {
    env::set_var(PROGRAM_ENV_VAR, "bunx");
    let file = config_file("command:\n  program: node\n");

    let config = load_config(Some(file.path()));
    env::remove_var(PROGRAM_ENV_VAR);

    assert_eq!(config.expect("Config should load").command.program, "bunx");
}

#[test]
#[serial]
fn test_load_config_errors_for_invalid_file() {
    env::remove_var(PROGRAM_ENV_VAR);
    let file = config_file("not-yaml: [:::");

    let msg = load_config(Some(file.path())).unwrap_err().to_string();
    assert!(
        msg.contains("parse") || msg.contains("YAML"),
        "Parse error expected, got: {msg}"
    );
}

#[test]
#[serial]
fn test_load_config_rejects_unknown_keys() {
    env::remove_var(PROGRAM_ENV_VAR);
    let file = config_file("texts_directory: ./texts\n");

    let msg = load_config(Some(file.path())).unwrap_err().to_string();
    assert!(msg.contains("YAML"), "Parse error expected, got: {msg}");
}

#[test]
#[serial]
fn test_load_config_rejects_inverted_range() {
    env::remove_var(PROGRAM_ENV_VAR);
    let file = config_file("range: { start: 100, end: 32 }\n");

    let msg = load_config(Some(file.path())).unwrap_err().to_string();
    assert!(msg.contains("Invalid configuration"), "got: {msg}");
    assert!(msg.contains("100"), "got: {msg}");
}

#[test]
#[serial]
fn test_load_config_errors_for_missing_file() {
    env::remove_var(PROGRAM_ENV_VAR);

    let msg = load_config(Some(std::path::Path::new("does-not-exist.yaml")))
        .unwrap_err()
        .to_string();
    assert!(msg.contains("Failed to read config file"), "got: {msg}");
}
