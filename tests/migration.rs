//! End-to-end migration over a temporary directory tree.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use ttyvid_tools::config::MigrationConfig;
use ttyvid_tools::error::MigrateError;
use ttyvid_tools::migrate::{self, Outcome};
use ttyvid_tools::theme::{Scalar, ThemeDocument};

const SAMPLE: &str = "\
title
    text Hello
palette
    colors 2
    0 0 0
    255 255 255
";

fn config_for(root: &TempDir) -> MigrationConfig {
    MigrationConfig {
        source_dir: root.path().join("legacy"),
        dest_dir: root.path().join("themes"),
        extension: "theme".to_string(),
    }
}

fn write(dir: &Path, name: &str, contents: &[u8]) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_single_theme_migrates() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(&root);
    write(&config.source_dir, "sample.theme", SAMPLE.as_bytes());

    let report = migrate::migrate_all(&config).unwrap();
    assert_eq!(report.processed(), 1);
    assert_eq!(report.succeeded(), 1);
    assert!(report.is_clean());

    let output = config.dest_dir.join("sample.yaml");
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("# Theme\n# Migrated from: sample.theme\n\n"));

    let doc = ThemeDocument::from_yaml_str(&text).unwrap();
    assert_eq!(
        doc.title().unwrap().get("text"),
        Some(&Scalar::text("Hello"))
    );
    let palette = doc.palette().unwrap();
    assert_eq!(palette.colors, Some(2));
    assert_eq!(palette.rgb, vec![[0, 0, 0], [255, 255, 255]]);
}

#[test]
fn test_failure_does_not_stop_batch() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(&root);
    write(&config.source_dir, "a.theme", &[0xff, 0xfe, 0x00, 0x80]);
    write(&config.source_dir, "b.theme", b"name Bee\n");

    let report = migrate::migrate_all(&config).unwrap();
    assert_eq!(report.processed(), 2);
    assert_eq!(report.succeeded(), 1);

    match &report.outcomes[0] {
        Outcome::Failed(failed) => assert!(failed.input.ends_with("a.theme")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(report.outcomes[0]
        .line()
        .starts_with("✗ Failed to migrate a.theme: "));
    assert_eq!(report.outcomes[1].line(), "✓ Migrated: b.theme -> b.yaml");
    assert!(!config.dest_dir.join("a.yaml").exists());
}

#[test]
fn test_blocked_output_is_reported() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(&root);
    write(&config.source_dir, "x.theme", b"name X\n");
    fs::create_dir_all(config.dest_dir.join("x.yaml")).unwrap();

    let report = migrate::migrate_all(&config).unwrap();
    assert_eq!(report.succeeded(), 0);
    assert_eq!(report.failed().count(), 1);
}

#[test]
fn test_missing_source_dir() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(&root);

    let err = migrate::migrate_all(&config).unwrap_err();
    assert!(matches!(err, MigrateError::SourceMissing(_)));
    assert!(!config.dest_dir.exists());
}

#[test]
fn test_no_matching_files() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(&root);
    write(&config.source_dir, "readme.txt", b"not a theme");

    let err = migrate::migrate_all(&config).unwrap_err();
    assert!(matches!(err, MigrateError::NoInputs { .. }));
}

#[test]
fn test_existing_output_is_overwritten() {
    let root = tempfile::tempdir().unwrap();
    let config = config_for(&root);
    write(&config.source_dir, "dark.theme", b"name Dark\n");
    write(&config.dest_dir, "dark.yaml", b"stale: true\n");

    migrate::migrate_all(&config).unwrap();
    let text = fs::read_to_string(config.dest_dir.join("dark.yaml")).unwrap();
    assert!(text.contains("name: Dark"));
    assert!(!text.contains("stale"));
}
