//! Error types
//!
//! Parsing theme source never fails; these cover reading YAML back, the migration driver and
//! the GIF transparency filter.

use std::path::PathBuf;

/// Failure loading a migrated YAML theme back into a document
#[derive(thiserror::Error, Debug)]
pub enum ThemeError {
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unexpected value for '{key}': expected {expected}")]
    Shape { key: String, expected: &'static str },
}

impl ThemeError {
    pub fn shape(key: impl Into<String>, expected: &'static str) -> Self {
        Self::Shape {
            key: key.into(),
            expected,
        }
    }
}

/// Failure of the batch migration driver or of a single file within it
#[derive(thiserror::Error, Debug)]
pub enum MigrateError {
    #[error("source directory not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("no .{extension} files found in {}", .dir.display())]
    NoInputs { dir: PathBuf, extension: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl MigrateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure of the GIF transparency filter
#[derive(thiserror::Error, Debug)]
pub enum TransparencyError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no frames found in {}", .0.display())]
    NoFrames(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(ThemeError::shape("palette", "a mapping")
            .to_string()
            .contains("unexpected value for 'palette'"));
        assert!(MigrateError::SourceMissing(PathBuf::from("themes"))
            .to_string()
            .contains("source directory not found: themes"));
        assert_eq!(
            MigrateError::NoInputs {
                dir: PathBuf::from("src"),
                extension: "theme".to_string()
            }
            .to_string(),
            "no .theme files found in src"
        );
        assert!(TransparencyError::NoFrames(PathBuf::from("a.gif"))
            .to_string()
            .contains("no frames found in a.gif"));
    }

    #[test]
    fn io_preserves_source() {
        let err = MigrateError::io("a.theme", std::io::Error::other("boom"));
        assert_eq!(err.to_string(), "a.theme: boom");
    }
}
