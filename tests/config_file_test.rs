//! Config file loading behavior.

use std::fs;

use capstan::config::CapstanConfig;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = CapstanConfig::load(&dir.path().join("capstan.kdl")).unwrap();
    assert_eq!(config, CapstanConfig::default());
    assert_eq!(config.tag_prefix(), "feature");
}

#[test]
fn test_load_reads_and_validates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("capstan.kdl");
    fs::write(
        &path,
        "tag-prefix \"topic\"\nchange-annotation-min 5\ncommit-annotation-min 9\n",
    )
    .unwrap();

    let config = CapstanConfig::load(&path).unwrap();
    assert_eq!(config.tag_prefix(), "topic");
    assert_eq!(config.change_annotation_min(), 5);
    assert_eq!(config.commit_annotation_min(), 9);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("capstan.kdl");
    fs::write(&path, "commit-annotation-min 0\n").unwrap();

    assert!(CapstanConfig::load(&path).is_err());
}

#[test]
fn test_written_config_roundtrips_through_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("capstan.kdl");

    let config = CapstanConfig {
        tag_prefix: Some("feature".to_string()),
        change_annotation_min: Some(4),
        commit_annotation_min: Some(8),
    };
    fs::write(&path, config.to_kdl().to_string()).unwrap();

    assert_eq!(CapstanConfig::load(&path).unwrap(), config);
}
