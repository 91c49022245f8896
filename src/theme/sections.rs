//! Section parsers
//!
//! Each parser is entered right after its keyword line has been consumed and reads until the
//! next line that terminates it (left unconsumed) or the end of input. Lines that do not fit
//! the section's shape are dropped; the parse never fails.

use super::cursor::{Line, LineCursor};
use super::document::{Fields, LayerSpec, Palette};
use super::scalar::Scalar;
use tracing::debug;

/// Prefix every layer `file` path is normalized to.
pub const LAYER_DIR: &str = "layers/";

/// The reserved words that open a section when they stand alone on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Title,
    Padding,
    Layer,
    Palette,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Title,
        SectionKind::Padding,
        SectionKind::Layer,
        SectionKind::Palette,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            SectionKind::Title => "title",
            SectionKind::Padding => "padding",
            SectionKind::Layer => "layer",
            SectionKind::Palette => "palette",
        }
    }

    pub fn from_keyword(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == text)
    }

    /// Whether a line opening `next` ends a section of this kind.
    ///
    /// Only `layer` stops on its own keyword; inside the other sections a repeat of the
    /// keyword is a single-token line and gets dropped.
    pub fn is_terminated_by(self, next: SectionKind) -> bool {
        next != self || self == SectionKind::Layer
    }
}

/// Peek the next line unless it starts a section that ends `kind`.
fn next_in_section<'a>(cursor: &mut LineCursor<'a>, kind: SectionKind) -> Option<Line<'a>> {
    let line = cursor.peek()?;
    match SectionKind::from_keyword(line.text) {
        Some(next) if kind.is_terminated_by(next) => None,
        _ => Some(line),
    }
}

fn skipped(kind: SectionKind, line: &Line<'_>) {
    debug!(
        section = kind.keyword(),
        line = line.number,
        text = line.text,
        "skipping malformed line"
    );
}

/// Flat `key value` mapping, used by `title` and `padding`.
pub fn parse_fields(cursor: &mut LineCursor<'_>, kind: SectionKind) -> Fields {
    let mut fields = Fields::new();
    while let Some(line) = next_in_section(cursor, kind) {
        match line.entry() {
            Some((key, value)) => {
                fields.insert(key.to_string(), Scalar::coerce(value));
            }
            None => skipped(kind, &line),
        }
        cursor.advance();
    }
    fields
}

pub fn parse_title(cursor: &mut LineCursor<'_>) -> Fields {
    parse_fields(cursor, SectionKind::Title)
}

pub fn parse_padding(cursor: &mut LineCursor<'_>) -> Fields {
    parse_fields(cursor, SectionKind::Padding)
}

/// One layer: plain fields plus the nine-slice, bounds and destination-bounds groups.
pub fn parse_layer(cursor: &mut LineCursor<'_>) -> LayerSpec {
    let mut layer = LayerSpec::default();
    while let Some(line) = next_in_section(cursor, SectionKind::Layer) {
        match line.entry() {
            Some((key, value)) => route_layer_key(&mut layer, key, value),
            None => skipped(SectionKind::Layer, &line),
        }
        cursor.advance();
    }
    for name in layer.drop_shadowed_fields() {
        debug!(field = name, "group replaces plain layer field");
    }
    layer
}

fn route_layer_key(layer: &mut LayerSpec, key: &str, value: &str) {
    if key.starts_with("outer-") || key.starts_with("inner-") {
        layer
            .nineslice
            .insert(key.replace('-', "_"), Scalar::coerce(value));
    } else if matches!(key, "left" | "top" | "right" | "bottom") {
        layer.bounds.insert(key.to_string(), Scalar::coerce(value));
    } else if let Some(edge) = key.strip_prefix("dst-") {
        layer
            .dst_bounds
            .insert(edge.to_string(), Scalar::coerce(value));
    } else if key == "copy-mode" {
        layer
            .fields
            .insert("copy_mode".to_string(), Scalar::text(value));
    } else if key == "file" {
        layer
            .fields
            .insert("file".to_string(), Scalar::text(normalize_layer_file(value)));
    } else {
        layer.fields.insert(key.to_string(), Scalar::coerce(value));
    }
}

/// Prefix a layer image path with [`LAYER_DIR`] unless it already carries it.
pub fn normalize_layer_file(value: &str) -> String {
    let value = value.trim();
    if value.starts_with(LAYER_DIR) {
        value.to_string()
    } else {
        format!("{}{}", LAYER_DIR, value)
    }
}

/// Colour table: `colors N` plus `R G B` rows.
pub fn parse_palette(cursor: &mut LineCursor<'_>) -> Palette {
    let mut palette = Palette::default();
    while let Some(line) = next_in_section(cursor, SectionKind::Palette) {
        match line.tokens().as_slice() {
            ["colors", count] => match count.parse::<i64>() {
                Ok(count) => palette.colors = Some(count),
                Err(_) => skipped(SectionKind::Palette, &line),
            },
            [r, g, b] => match parse_rgb(r, g, b) {
                Some(rgb) => palette.rgb.push(rgb),
                None => skipped(SectionKind::Palette, &line),
            },
            _ => skipped(SectionKind::Palette, &line),
        }
        cursor.advance();
    }
    palette
}

fn parse_rgb(r: &str, g: &str, b: &str) -> Option<[i64; 3]> {
    Some([r.parse().ok()?, g.parse().ok()?, b.parse().ok()?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(SectionKind::from_keyword("layers"), None);
        assert_eq!(SectionKind::from_keyword("Title"), None);
    }

    #[test]
    fn test_terminators() {
        assert!(!SectionKind::Title.is_terminated_by(SectionKind::Title));
        assert!(SectionKind::Title.is_terminated_by(SectionKind::Layer));
        assert!(SectionKind::Layer.is_terminated_by(SectionKind::Layer));
        assert!(!SectionKind::Palette.is_terminated_by(SectionKind::Palette));
        assert!(SectionKind::Padding.is_terminated_by(SectionKind::Title));
    }

    #[test]
    fn test_fields_stop_before_next_section() {
        let mut cursor = LineCursor::new("x 10\ny 2.5\nlayer\nfile a.gif");
        let title = parse_title(&mut cursor);
        assert_eq!(title.get("x"), Some(&Scalar::Int(10)));
        assert_eq!(title.get("y"), Some(&Scalar::Float(2.5)));
        assert_eq!(cursor.peek().unwrap().text, "layer");
    }

    #[test]
    fn test_title_ignores_repeated_title_keyword() {
        let mut cursor = LineCursor::new("x 1\ntitle\ny 2");
        let title = parse_title(&mut cursor);
        assert_eq!(title.len(), 2);
        assert!(cursor.peek().is_none());
    }

    #[test]
    fn test_layer_routing() {
        let source = "\
depth -1
mode 9slice
outer-left 3
inner-top 4
left 0
bottom 12
dst-right 100
copy-mode copy
file frame.png
";
        let mut cursor = LineCursor::new(source);
        let layer = parse_layer(&mut cursor);

        assert_eq!(layer.get("depth"), Some(&Scalar::Int(-1)));
        assert_eq!(layer.get("mode"), Some(&Scalar::text("9slice")));
        assert_eq!(layer.nineslice.get("outer_left"), Some(&Scalar::Int(3)));
        assert_eq!(layer.nineslice.get("inner_top"), Some(&Scalar::Int(4)));
        assert_eq!(layer.bounds.get("left"), Some(&Scalar::Int(0)));
        assert_eq!(layer.bounds.get("bottom"), Some(&Scalar::Int(12)));
        assert_eq!(layer.dst_bounds.get("right"), Some(&Scalar::Int(100)));
        assert_eq!(layer.get("copy_mode"), Some(&Scalar::text("copy")));
        assert_eq!(layer.file(), Some("layers/frame.png"));
    }

    #[test]
    fn test_layer_stops_at_next_layer() {
        let mut cursor = LineCursor::new("file a.gif\nlayer\nfile b.gif");
        let first = parse_layer(&mut cursor);
        assert_eq!(first.file(), Some("layers/a.gif"));
        assert_eq!(cursor.peek().unwrap().text, "layer");
    }

    #[test]
    fn test_copy_mode_is_raw() {
        let mut cursor = LineCursor::new("copy-mode 10");
        let layer = parse_layer(&mut cursor);
        assert_eq!(layer.get("copy_mode"), Some(&Scalar::text("10")));
    }

    #[test]
    fn test_normalize_layer_file() {
        assert_eq!(normalize_layer_file("x.gif"), "layers/x.gif");
        assert_eq!(normalize_layer_file("layers/x.gif"), "layers/x.gif");
        assert_eq!(normalize_layer_file("  x.gif "), "layers/x.gif");
    }

    #[test]
    fn test_palette_skips_malformed_rows() {
        let mut cursor = LineCursor::new("colors 16\n10 20 30\nbad row\n1 2 x\n40 50 60\n7");
        let palette = parse_palette(&mut cursor);
        assert_eq!(palette.colors, Some(16));
        assert_eq!(palette.rgb, vec![[10, 20, 30], [40, 50, 60]]);
    }

    #[test]
    fn test_palette_bad_count_is_skipped() {
        let mut cursor = LineCursor::new("colors many\n1 2 3");
        let palette = parse_palette(&mut cursor);
        assert_eq!(palette.colors, None);
        assert_eq!(palette.rgb, vec![[1, 2, 3]]);
    }
}
