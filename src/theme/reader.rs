//! Reading migrated YAML back into a [`ThemeDocument`]
//!
//! Mirrors the serializer: integers and floats map to the numeric scalars, the string `auto`
//! to [`Scalar::Auto`] and any other string to text. The raw layer fields `copy_mode` and
//! `file` keep whatever string they hold.

use super::document::{Entry, Fields, LayerSpec, Palette, ThemeDocument, LAYERS_KEY};
use super::scalar::{Scalar, AUTO};
use crate::error::ThemeError;
use serde::de::{self, Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

const RAW_LAYER_FIELDS: [&str; 2] = ["copy_mode", "file"];

impl ThemeDocument {
    /// Load a document from YAML text (header comments are ignored by YAML itself).
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ThemeError> {
        let mapping = match value {
            Value::Null => return Ok(ThemeDocument::new()),
            Value::Mapping(mapping) => mapping,
            _ => return Err(ThemeError::shape("<document>", "a mapping")),
        };

        let mut doc = ThemeDocument::new();
        for (key, value) in mapping {
            let key = key_string(key, "<document>")?;
            let entry = match (key.as_str(), value) {
                (LAYERS_KEY, Value::Sequence(items)) => Entry::Layers(
                    items
                        .into_iter()
                        .map(|item| read_layer(item, &key))
                        .collect::<Result<_, _>>()?,
                ),
                ("palette", Value::Mapping(mapping)) => Entry::Palette(read_palette(mapping)?),
                (_, Value::Mapping(mapping)) => Entry::Section(read_fields(mapping, &key)?),
                (_, value) => Entry::Scalar(read_scalar(value, &key)?),
            };
            doc.insert(key, entry);
        }
        Ok(doc)
    }
}

impl<'de> Deserialize<'de> for ThemeDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ThemeDocument::from_value(value).map_err(de::Error::custom)
    }
}

fn key_string(key: Value, parent: &str) -> Result<String, ThemeError> {
    match key {
        Value::String(s) => Ok(s),
        _ => Err(ThemeError::shape(parent, "string keys")),
    }
}

fn read_scalar(value: Value, key: &str) -> Result<Scalar, ThemeError> {
    match value {
        Value::Number(n) => {
            if let Some(int) = n.as_i64() {
                Ok(Scalar::Int(int))
            } else if let Some(float) = n.as_f64() {
                Ok(Scalar::Float(float))
            } else {
                Err(ThemeError::shape(key, "a number"))
            }
        }
        Value::String(s) if s == AUTO => Ok(Scalar::Auto),
        Value::String(s) => Ok(Scalar::Text(s)),
        _ => Err(ThemeError::shape(key, "a scalar")),
    }
}

fn read_raw(value: Value, key: &str) -> Result<Scalar, ThemeError> {
    match value {
        Value::String(s) => Ok(Scalar::Text(s)),
        other => read_scalar(other, key),
    }
}

fn read_fields(mapping: Mapping, parent: &str) -> Result<Fields, ThemeError> {
    let mut fields = Fields::new();
    for (key, value) in mapping {
        let key = key_string(key, parent)?;
        let scalar = read_scalar(value, &key)?;
        fields.insert(key, scalar);
    }
    Ok(fields)
}

fn read_layer(value: Value, parent: &str) -> Result<LayerSpec, ThemeError> {
    let Value::Mapping(mapping) = value else {
        return Err(ThemeError::shape(parent, "a sequence of mappings"));
    };

    let mut layer = LayerSpec::default();
    for (key, value) in mapping {
        let key = key_string(key, parent)?;
        let value = match (key.as_str(), value) {
            ("nineslice", Value::Mapping(m)) => {
                layer.nineslice = read_fields(m, &key)?;
                continue;
            }
            ("bounds", Value::Mapping(m)) => {
                layer.bounds = read_fields(m, &key)?;
                continue;
            }
            ("dst_bounds", Value::Mapping(m)) => {
                layer.dst_bounds = read_fields(m, &key)?;
                continue;
            }
            (_, value) => value,
        };
        let scalar = if RAW_LAYER_FIELDS.contains(&key.as_str()) {
            read_raw(value, &key)?
        } else {
            read_scalar(value, &key)?
        };
        layer.fields.insert(key, scalar);
    }
    Ok(layer)
}

fn read_palette(mapping: Mapping) -> Result<Palette, ThemeError> {
    let mut palette = Palette::default();
    for (key, value) in mapping {
        let key = key_string(key, "palette")?;
        match (key.as_str(), value) {
            ("colors", Value::Number(n)) => {
                let colors = n
                    .as_i64()
                    .ok_or_else(|| ThemeError::shape("colors", "an integer"))?;
                palette.colors = Some(colors);
            }
            ("rgb", Value::Sequence(rows)) => {
                palette.rgb = rows.into_iter().map(read_rgb).collect::<Result<_, _>>()?;
            }
            (other, _) => {
                return Err(ThemeError::shape(other, "'rgb' rows or a 'colors' count"));
            }
        }
    }
    Ok(palette)
}

fn read_rgb(value: Value) -> Result<[i64; 3], ThemeError> {
    let invalid = || ThemeError::shape("rgb", "rows of three integers");
    let Value::Sequence(row) = value else {
        return Err(invalid());
    };
    match row.as_slice() {
        [r, g, b] => Ok([
            r.as_i64().ok_or_else(invalid)?,
            g.as_i64().ok_or_else(invalid)?,
            b.as_i64().ok_or_else(invalid)?,
        ]),
        _ => Err(invalid()),
    }
}
