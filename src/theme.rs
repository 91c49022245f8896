//! Theme files: parsing the line-oriented source syntax and writing it out as YAML
//!
//! The pipeline is two stages run once per file:
//!
//!     source text ──parse_theme──▶ ThemeDocument ──render──▶ YAML (with header)
//!
//! A theme file is a list of `key value` lines, split into sections by bare keyword lines:
//!
//!     name Dark
//!     title
//!         x 10
//!     layer
//!         file frame.png
//!         outer-left 3
//!     palette
//!         colors 2
//!         0 0 0
//!         255 255 255
//!
//! See [`parser`] for the scan itself and [`sections`] for the per-section rules.

pub mod cursor;
pub mod document;
pub mod parser;
pub mod reader;
pub mod scalar;
pub mod sections;
pub mod serializer;

pub use cursor::{Line, LineCursor};
pub use document::{Entry, Fields, LayerSpec, Palette, ThemeDocument};
pub use parser::{parse_lines, parse_theme};
pub use scalar::Scalar;
pub use sections::SectionKind;
pub use serializer::render;
