//! Batch migration of `.theme` files to YAML
//!
//! Files are discovered in the source directory, sorted by name, and each one is parsed and
//! rendered on its own. A file that cannot be read or written is recorded in the
//! [`MigrationReport`] and the batch moves on; only a missing source directory or an empty
//! file set stops the run.

use crate::config::MigrationConfig;
use crate::error::MigrateError;
use crate::theme::{parse_theme, serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Extension of the generated files.
pub const OUTPUT_EXTENSION: &str = "yaml";

/// One file that migrated successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migrated {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// One file that failed, with the reason rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failed {
    pub input: PathBuf,
    pub reason: String,
}

/// Result for one file, in processing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Migrated(Migrated),
    Failed(Failed),
}

impl Outcome {
    /// The progress line printed for this file.
    pub fn line(&self) -> String {
        match self {
            Outcome::Migrated(migrated) => success_line(migrated),
            Outcome::Failed(failed) => failure_line(failed),
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub outcomes: Vec<Outcome>,
}

impl MigrationReport {
    /// Number of files attempted.
    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn migrated(&self) -> impl Iterator<Item = &Migrated> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            Outcome::Migrated(migrated) => Some(migrated),
            Outcome::Failed(_) => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = &Failed> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            Outcome::Failed(failed) => Some(failed),
            Outcome::Migrated(_) => None,
        })
    }

    pub fn succeeded(&self) -> usize {
        self.migrated().count()
    }

    pub fn is_clean(&self) -> bool {
        self.failed().next().is_none()
    }
}

/// List the files in `dir` with the given extension, sorted by file name.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, MigrateError> {
    let entries = fs::read_dir(dir).map_err(|e| MigrateError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| MigrateError::io(dir, e))?.path();
        let matches = path.extension().is_some_and(|ext| ext == extension);
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// `<dest_dir>/<input stem>.yaml`
pub fn output_path(input: &Path, dest_dir: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    dest_dir.join(name)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Parse one theme file and write its YAML rendering.
///
/// The whole output is rendered before the file is touched, so a failure never leaves a
/// partially written document behind.
pub fn migrate_file(input: &Path, output: &Path) -> Result<(), MigrateError> {
    let source = fs::read_to_string(input).map_err(|e| MigrateError::io(input, e))?;
    let doc = parse_theme(&source);
    let rendered = serializer::render(&doc, &display_name(input))?;
    fs::write(output, rendered).map_err(|e| MigrateError::io(output, e))?;
    Ok(())
}

/// Migrate every matching file of `config.source_dir` into `config.dest_dir`.
pub fn migrate_all(config: &MigrationConfig) -> Result<MigrationReport, MigrateError> {
    if !config.source_dir.is_dir() {
        return Err(MigrateError::SourceMissing(config.source_dir.clone()));
    }

    let inputs = discover(&config.source_dir, &config.extension)?;
    if inputs.is_empty() {
        return Err(MigrateError::NoInputs {
            dir: config.source_dir.clone(),
            extension: config.extension.clone(),
        });
    }

    fs::create_dir_all(&config.dest_dir).map_err(|e| MigrateError::io(&config.dest_dir, e))?;
    info!(count = inputs.len(), source = %config.source_dir.display(), "migrating themes");

    let mut report = MigrationReport::default();
    for input in inputs {
        let output = output_path(&input, &config.dest_dir);
        match migrate_file(&input, &output) {
            Ok(()) => {
                info!(input = %input.display(), output = %output.display(), "migrated");
                report
                    .outcomes
                    .push(Outcome::Migrated(Migrated { input, output }));
            }
            Err(err) => {
                warn!(input = %input.display(), error = %err, "migration failed");
                report.outcomes.push(Outcome::Failed(Failed {
                    input,
                    reason: err.to_string(),
                }));
            }
        }
    }
    Ok(report)
}

/// `✓ Migrated: a.theme -> a.yaml`
pub fn success_line(migrated: &Migrated) -> String {
    format!(
        "✓ Migrated: {} -> {}",
        display_name(&migrated.input),
        display_name(&migrated.output)
    )
}

/// `✗ Failed to migrate a.theme: <reason>`
pub fn failure_line(failed: &Failed) -> String {
    format!(
        "✗ Failed to migrate {}: {}",
        display_name(&failed.input),
        failed.reason
    )
}
