//! Startup configuration file handling

use std::fs;

use pythia::config::{PythiaConfig, expand_env_vars};

#[test]
fn load_from_reads_api_section() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
key = "sk-ant-on-disk"
model = "claude-haiku-4-5-20251001"
"#,
    )
    .expect("write config");

    let config = PythiaConfig::load_from(&path).expect("parsed config");
    let api = config.api.expect("api section");
    assert_eq!(api.key.as_deref(), Some("sk-ant-on-disk"));
    assert_eq!(api.model.as_deref(), Some("claude-haiku-4-5-20251001"));
}

#[test]
fn load_from_missing_file_is_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(PythiaConfig::load_from(&dir.path().join("absent.toml")).is_none());
}

#[test]
fn load_from_malformed_file_is_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api\nkey=").expect("write config");

    assert!(PythiaConfig::load_from(&path).is_none());
}

#[test]
fn env_references_expand_in_key_values() {
    // Expansion itself; resolution order is covered by unit tests.
    assert_eq!(expand_env_vars("no references"), "no references");
    assert_eq!(expand_env_vars("${PYTHIA_SUITE_ABSENT_VAR}"), "");
}
