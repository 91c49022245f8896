//! Scalar values and the coercion applied to textual theme values
//!
//! Every value in a theme file starts out as text. Before it lands in the document it is
//! coerced into the narrowest type that fits, in this order:
//!
//!   1. `auto` (any case)  → [`Scalar::Auto`]
//!   2. integer            → [`Scalar::Int`]
//!   3. floating point     → [`Scalar::Float`]
//!   4. anything else      → [`Scalar::Text`] (trimmed)
//!
//! An integer literal too large for `i64` stays text so that no digits are lost.
//!
//! Raw layer fields (`copy_mode`, `file`) skip coercion and are stored with [`Scalar::text`].

use serde::{Serialize, Serializer};
use std::fmt;
use std::num::IntErrorKind;

/// The literal emitted for [`Scalar::Auto`].
pub const AUTO: &str = "auto";

/// A typed leaf value of a theme document
///
/// Equality treats two NaN floats as equal, so a document holding `nan` compares equal to
/// itself after a YAML round trip.
#[derive(Debug, Clone)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Auto,
    Text(String),
}

impl Scalar {
    /// Infer the type of a textual value.
    pub fn coerce(raw: &str) -> Self {
        let value = raw.trim();

        if value.eq_ignore_ascii_case(AUTO) {
            return Scalar::Auto;
        }
        match value.parse::<i64>() {
            Ok(int) => return Scalar::Int(int),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Scalar::Text(value.to_string());
            }
            Err(_) => {}
        }
        if let Ok(float) = value.parse::<f64>() {
            return Scalar::Float(float);
        }
        Scalar::Text(value.to_string())
    }

    /// Store a value verbatim, without coercion.
    pub fn text(raw: impl Into<String>) -> Self {
        Scalar::Text(raw.into())
    }

    /// Text content, with [`Scalar::Auto`] reported as `"auto"`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Auto => Some(AUTO),
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::Auto, Scalar::Auto) => true,
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            // Debug keeps the fractional part: 1.0 stays "1.0"
            Scalar::Float(v) => write!(f, "{:?}", v),
            Scalar::Auto => f.write_str(AUTO),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Int(v) => serializer.serialize_i64(*v),
            Scalar::Float(v) => serializer.serialize_f64(*v),
            Scalar::Auto => serializer.serialize_str(AUTO),
            Scalar::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_order() {
        assert_eq!(Scalar::coerce("10"), Scalar::Int(10));
        assert_eq!(Scalar::coerce("-3"), Scalar::Int(-3));
        assert_eq!(Scalar::coerce("10.5"), Scalar::Float(10.5));
        assert_eq!(Scalar::coerce("AUTO"), Scalar::Auto);
        assert_eq!(Scalar::coerce("  abc  "), Scalar::Text("abc".to_string()));
    }

    #[test]
    fn test_oversized_integer_stays_text() {
        let big = "99999999999999999999";
        assert_eq!(Scalar::coerce(big), Scalar::text(big));
        assert_eq!(Scalar::coerce("-99999999999999999999"), Scalar::text("-99999999999999999999"));
        assert_eq!(Scalar::coerce("9223372036854775807"), Scalar::Int(i64::MAX));
    }

    #[test]
    fn test_nan_equals_nan() {
        assert_eq!(Scalar::coerce("nan"), Scalar::Float(f64::NAN));
        assert_ne!(Scalar::Float(f64::NAN), Scalar::Float(0.0));
        assert_ne!(Scalar::Float(1.0), Scalar::Int(1));
    }

    #[test]
    fn test_text_skips_coercion() {
        assert_eq!(Scalar::text("10"), Scalar::Text("10".to_string()));
        assert_eq!(Scalar::text("auto"), Scalar::Text("auto".to_string()));
    }

    #[test]
    fn test_display_keeps_float_fraction() {
        assert_eq!(Scalar::Float(1.0).to_string(), "1.0");
        assert_eq!(Scalar::Float(10.5).to_string(), "10.5");
        assert_eq!(Scalar::Int(7).to_string(), "7");
        assert_eq!(Scalar::Auto.to_string(), "auto");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Scalar::Auto.as_str(), Some("auto"));
        assert_eq!(Scalar::Int(4).as_str(), None);
    }
}
