//! Ordered inline style declarations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Inline style declarations keyed by CSS property name.
///
/// Property names are kept as written (`background-color`, `--ring`), one
/// entry per property, in first-insertion order.
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing any existing value in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Builder form of [`StyleMap::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Applies every entry of `overrides` on top of this map.
    pub fn merge(&mut self, overrides: &StyleMap) {
        for (property, value) in &overrides.entries {
            self.set(property.clone(), value.clone());
        }
    }

    /// Value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no declarations are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the map as a `style` attribute value.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (property, value) in iter {
            map.set(property, value);
        }
        map
    }
}
