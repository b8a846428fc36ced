use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;
use toolenv_fs::{ConfigStore, Error, NormalizedPath};

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    debug: bool,
    tools: Vec<String>,
}

fn write(temp: &TempDir, name: &str, content: &str) -> NormalizedPath {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    NormalizedPath::new(path)
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "settings.toml", "debug = true\ntools = [\"go\"]\n");

    let loaded: Sample = ConfigStore::new().load(&path).unwrap();
    assert_eq!(
        loaded,
        Sample {
            debug: true,
            tools: vec!["go".into()]
        }
    );
}

#[test]
fn test_load_json_and_yaml_agree() {
    let temp = TempDir::new().unwrap();
    let json = write(&temp, "s.json", r#"{"debug": false, "tools": ["node"]}"#);
    let yaml = write(&temp, "s.yml", "debug: false\ntools:\n  - node\n");

    let store = ConfigStore::new();
    let a: Sample = store.load(&json).unwrap();
    let b: Sample = store.load(&yaml).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "settings.ini", "debug=1");

    let result: Result<Sample, _> = ConfigStore::new().load(&path);
    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini"));
}

#[test]
fn test_parse_error_names_format() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "settings.toml", "debug = [");

    let err = ConfigStore::new().load::<Sample>(&path).unwrap_err();
    match err {
        Error::ConfigParse { format, .. } => assert_eq!(format, "TOML"),
        other => panic!("unexpected error: {other}"),
    }
}
