//! Theme document parser
//!
//! Single forward scan over the source lines. Section keywords dispatch to the section
//! parsers in [`super::sections`]; every other significant line is a top-level `key value`.
//!
//! The parser is lenient: it never fails, and malformed lines are
//! dropped (and logged at `debug` level).

use super::cursor::LineCursor;
use super::document::{Entry, ThemeDocument};
use super::scalar::Scalar;
use super::sections::{self, SectionKind};
use tracing::debug;

/// Parse theme source text.
pub fn parse_theme(source: &str) -> ThemeDocument {
    parse_cursor(&mut LineCursor::new(source))
}

/// Parse an already split sequence of lines.
pub fn parse_lines<'a, I>(lines: I) -> ThemeDocument
where
    I: IntoIterator<Item = &'a str>,
{
    parse_cursor(&mut LineCursor::from_lines(lines))
}

/// Parse from the cursor's current position to the end of input.
pub fn parse_cursor(cursor: &mut LineCursor<'_>) -> ThemeDocument {
    let mut doc = ThemeDocument::new();

    while let Some(line) = cursor.next_line() {
        if let Some(kind) = SectionKind::from_keyword(line.text) {
            parse_section(cursor, kind, &mut doc);
            continue;
        }

        match line.entry() {
            Some((key, value)) => doc.insert_scalar(key, Scalar::coerce(value)),
            None => debug!(line = line.number, text = line.text, "skipping bare word"),
        }
    }

    doc
}

fn parse_section(cursor: &mut LineCursor<'_>, kind: SectionKind, doc: &mut ThemeDocument) {
    match kind {
        SectionKind::Title => {
            let title = sections::parse_title(cursor);
            doc.insert(kind.keyword(), Entry::Section(title));
        }
        SectionKind::Padding => {
            let padding = sections::parse_padding(cursor);
            doc.insert(kind.keyword(), Entry::Section(padding));
        }
        SectionKind::Layer => {
            let layer = sections::parse_layer(cursor);
            doc.push_layer(layer);
        }
        SectionKind::Palette => {
            let palette = sections::parse_palette(cursor);
            doc.insert(kind.keyword(), Entry::Palette(palette));
        }
    }
}
