//! In-memory theme document
//!
//! A [`ThemeDocument`] is an insertion-ordered mapping. Top-level keys hold either a plain
//! [`Scalar`] or one of the structured sections:
//!
//!     title    -> Entry::Section   (flat mapping)
//!     padding  -> Entry::Section   (flat mapping)
//!     layers   -> Entry::Layers    (one LayerSpec per `layer` keyword)
//!     palette  -> Entry::Palette   (colour count + RGB rows)
//!
//! Order is preserved everywhere so that the serialized output follows the source file.
//! Re-inserting an existing key replaces the value in place (last wins, first position).

use super::scalar::Scalar;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Ordered flat mapping of scalar fields
pub type Fields = IndexMap<String, Scalar>;

/// Top-level key under which layers accumulate.
pub const LAYERS_KEY: &str = "layers";

/// A top-level value of a theme document
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Scalar(Scalar),
    Section(Fields),
    Layers(Vec<LayerSpec>),
    Palette(Palette),
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Scalar(scalar) => scalar.serialize(serializer),
            Entry::Section(fields) => fields.serialize(serializer),
            Entry::Layers(layers) => layers.serialize(serializer),
            Entry::Palette(palette) => palette.serialize(serializer),
        }
    }
}

/// A single image layer
///
/// Plain keys (including the raw `copy_mode` and `file`) live in `fields`. The coordinate
/// groups are kept apart and only emitted when they hold something. A non-empty group
/// shadows a plain field of the same name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerSpec {
    pub fields: Fields,
    pub nineslice: Fields,
    pub bounds: Fields,
    pub dst_bounds: Fields,
}

impl LayerSpec {
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.fields.get(key)
    }

    pub fn file(&self) -> Option<&str> {
        self.fields.get("file").and_then(Scalar::as_str)
    }

    /// Remove plain fields hidden by a non-empty group of the same name, returning their names.
    pub fn drop_shadowed_fields(&mut self) -> Vec<&'static str> {
        let shadowed: Vec<_> = self
            .groups()
            .map(|(name, _)| name)
            .filter(|name| self.fields.contains_key(*name))
            .collect();
        for name in &shadowed {
            self.fields.shift_remove(*name);
        }
        shadowed
    }

    fn is_shadowed(&self, key: &str) -> bool {
        self.groups().any(|(name, _)| name == key)
    }

    fn groups(&self) -> impl Iterator<Item = (&'static str, &Fields)> {
        [
            ("nineslice", &self.nineslice),
            ("bounds", &self.bounds),
            ("dst_bounds", &self.dst_bounds),
        ]
        .into_iter()
        .filter(|(_, fields)| !fields.is_empty())
    }
}

impl Serialize for LayerSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let groups: Vec<_> = self.groups().collect();
        let plain: Vec<_> = self
            .fields
            .iter()
            .filter(|(key, _)| !self.is_shadowed(key))
            .collect();
        let mut map = serializer.serialize_map(Some(plain.len() + groups.len()))?;
        for (key, value) in plain {
            map.serialize_entry(key, value)?;
        }
        for (key, fields) in groups {
            map.serialize_entry(key, fields)?;
        }
        map.end()
    }
}

/// Colour table: an optional declared count plus the RGB rows in encounter order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    pub colors: Option<i64>,
    pub rgb: Vec<[i64; 3]>,
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // `rgb` is always present and comes first; `colors` only when declared
        let len = 1 + usize::from(self.colors.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("rgb", &self.rgb)?;
        if let Some(colors) = self.colors {
            map.serialize_entry("colors", &colors)?;
        }
        map.end()
    }
}

/// The parsed form of one theme file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeDocument {
    entries: IndexMap<String, Entry>,
}

impl ThemeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn scalar(&self, key: &str) -> Option<&Scalar> {
        match self.entries.get(key) {
            Some(Entry::Scalar(scalar)) => Some(scalar),
            _ => None,
        }
    }

    pub fn section(&self, key: &str) -> Option<&Fields> {
        match self.entries.get(key) {
            Some(Entry::Section(fields)) => Some(fields),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&Fields> {
        self.section("title")
    }

    pub fn padding(&self) -> Option<&Fields> {
        self.section("padding")
    }

    pub fn layers(&self) -> &[LayerSpec] {
        match self.entries.get(LAYERS_KEY) {
            Some(Entry::Layers(layers)) => layers,
            _ => &[],
        }
    }

    pub fn palette(&self) -> Option<&Palette> {
        match self.entries.get("palette") {
            Some(Entry::Palette(palette)) => Some(palette),
            _ => None,
        }
    }

    /// The `name` field, when it is a plain scalar.
    pub fn name(&self) -> Option<&Scalar> {
        self.scalar("name")
    }

    /// Insert or replace a top-level entry.
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn insert_scalar(&mut self, key: impl Into<String>, value: Scalar) {
        self.insert(key, Entry::Scalar(value));
    }

    /// Append a layer, starting the `layers` sequence if this is the first one.
    ///
    /// A scalar that happens to be stored under `layers` is replaced by the sequence.
    pub fn push_layer(&mut self, layer: LayerSpec) {
        match self.entries.get_mut(LAYERS_KEY) {
            Some(Entry::Layers(layers)) => layers.push(layer),
            _ => self.insert(LAYERS_KEY, Entry::Layers(vec![layer])),
        }
    }
}

impl Serialize for ThemeDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
