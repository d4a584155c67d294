//! Ordered, de-duplicated class token lists.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Ordered class tokens, rendered space-joined.
///
/// Fragments are split on whitespace. When a token is pushed again it moves
/// to the end, so a later fragment always wins its cascade position.
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every token of `fragment`.
    pub fn push(&mut self, fragment: &str) {
        for token in fragment.split_whitespace() {
            self.tokens.retain(|existing| existing != token);
            self.tokens.push(token.to_string());
        }
    }

    /// Appends `fragment` only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, fragment: &str) {
        if condition {
            self.push(fragment);
        }
    }

    /// Builder form of [`ClassList::push`].
    pub fn with(mut self, fragment: &str) -> Self {
        self.push(fragment);
        self
    }

    /// The tokens in cascade order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether `token` is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|existing| existing == token)
    }

    /// Whether every token of `fragment` is present.
    pub fn contains_all(&self, fragment: &str) -> bool {
        fragment.split_whitespace().all(|token| self.contains(token))
    }

    /// Position of `token`, if present.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|existing| existing == token)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the list has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for fragment in iter {
            list.push(fragment);
        }
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_string()
    }
}

/// Joins class fragments into one class attribute value.
pub fn class_names<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments.into_iter().collect::<ClassList>().to_string()
}
