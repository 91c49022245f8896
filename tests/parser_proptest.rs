//! Property-based tests for coercion and parsing
//!
//! The parser must accept any input without panicking, and a parsed document must survive a
//! trip through the YAML serializer and reader unchanged.

use proptest::prelude::*;
use ttyvid_tools::theme::{parse_theme, serializer, Scalar, ThemeDocument};

/// Theme-shaped lines: section keywords, key/value pairs, RGB rows and noise.
fn theme_line() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["title", "padding", "layer", "palette", "", "# comment"])
            .prop_map(String::from),
        (
            "[a-z][a-z_-]{0,10}",
            prop_oneof![
                any::<i32>().prop_map(|v| v.to_string()),
                (-1000.0f64..1000.0).prop_map(|v| v.to_string()),
                Just("auto".to_string()),
                Just("AUTO".to_string()),
                prop::sample::select(vec!["nan", "NaN", "inf", "-inf"]).prop_map(String::from),
                "[a-zA-Z][a-zA-Z0-9 ./]{2,12}[a-zA-Z0-9]",
            ]
        )
            .prop_map(|(k, v)| format!("{} {}", k, v)),
        (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| format!("{} {} {}", r, g, b)),
        (0i64..512).prop_map(|n| format!("colors {}", n)),
        "[a-z]{1,6}",
    ]
}

proptest! {
    #[test]
    fn parser_never_panics(source in "\\PC{0,200}") {
        let _ = parse_theme(&source);
    }

    #[test]
    fn integers_coerce_to_int(value in any::<i64>()) {
        prop_assert_eq!(Scalar::coerce(&value.to_string()), Scalar::Int(value));
    }

    #[test]
    fn finite_floats_coerce_to_float(value in -1.0e9f64..1.0e9) {
        // Debug output always carries a fraction or exponent, so it never reads as an integer
        let text = format!("{:?}", value);
        prop_assert_eq!(Scalar::coerce(&text), Scalar::Float(value));
    }

    #[test]
    fn yaml_round_trip_is_stable(lines in prop::collection::vec(theme_line(), 0..40)) {
        let source = lines.join("\n");
        let doc = parse_theme(&source);

        let rendered = serializer::render(&doc, "prop.theme").unwrap();
        let reread = ThemeDocument::from_yaml_str(&rendered).unwrap();
        prop_assert_eq!(reread, doc);
    }
}
