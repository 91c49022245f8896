//! YAML serializer
//!
//! Output layout:
//!
//!     # <name>
//!     # Migrated from: <source file>
//!
//!     <yaml document>
//!
//! Key order follows the document, which follows the source file. Nested sections become
//! indented blocks and sequences become block lists; `serde_yaml` writes non-ASCII text as is.

use super::document::ThemeDocument;

/// Header label used when the document has no usable `name`.
pub const DEFAULT_LABEL: &str = "Theme";

/// The two header comment lines, each newline-terminated.
pub fn header(doc: &ThemeDocument, source_name: &str) -> String {
    let label = doc
        .name()
        .map(ToString::to_string)
        .unwrap_or_else(|| DEFAULT_LABEL.to_string());
    format!("# {}\n# Migrated from: {}\n", label, source_name)
}

/// The bare YAML document, without header.
pub fn to_yaml(doc: &ThemeDocument) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(doc)
}

/// Header, blank line, then the YAML document.
pub fn render(doc: &ThemeDocument, source_name: &str) -> Result<String, serde_yaml::Error> {
    let body = to_yaml(doc)?;
    Ok(format!("{}\n{}", header(doc, source_name), body))
}
