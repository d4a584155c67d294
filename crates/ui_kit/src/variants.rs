//! Typed axes for the button variant system.
//!
//! Every axis value has a stable kebab-case token. The same token is used for
//! `FromStr`, serde, and the `data-ui-*` DOM hooks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Variant axis a token failed to parse for.
pub enum Axis {
    /// `variant` axis.
    Variant,
    /// `size` axis.
    Size,
    /// `color` axis.
    Color,
}

impl Axis {
    /// Prop name of the axis.
    pub fn name(self) -> &'static str {
        match self {
            Self::Variant => "variant",
            Self::Size => "size",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A token that is not a member of its axis.
#[error("unknown {axis} token `{token}`")]
pub struct ParseTokenError {
    /// Axis the token was parsed for.
    pub axis: Axis,
    /// The rejected token, as supplied.
    pub token: String,
}

impl ParseTokenError {
    fn new(axis: Axis, token: &str) -> Self {
        Self {
            axis,
            token: token.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Visual style family of a button.
pub enum ButtonVariant {
    /// Filled button.
    #[default]
    Default,
    /// White bordered button.
    Secondary,
    /// Bordered button that takes the color on text and border.
    Outline,
    /// Borderless button with a tinted hover.
    Ghost,
    /// Underlined link-style button.
    Link,
    /// Bare text button.
    Text,
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Link,
        Self::Text,
    ];

    /// Stable kebab-case token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
            Self::Text => "text",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == raw)
            .ok_or_else(|| ParseTokenError::new(Axis::Variant, raw))
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Standard height.
    #[default]
    Default,
    /// Small.
    Sm,
    /// Extra small.
    Xs,
    /// Large.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    /// Every size, in declaration order.
    pub const ALL: [Self; 5] = [Self::Default, Self::Sm, Self::Xs, Self::Lg, Self::Icon];

    /// Stable kebab-case token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Xs => "xs",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == raw)
            .ok_or_else(|| ParseTokenError::new(Axis::Size, raw))
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Design-system color roles.
pub enum SemanticColor {
    /// Brand color.
    #[default]
    Primary,
    /// Neutral color.
    Secondary,
    /// Destructive action color.
    Destructive,
    /// Warning color.
    Warning,
    /// Success color.
    Success,
}

impl SemanticColor {
    /// Every semantic color, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Destructive,
        Self::Warning,
        Self::Success,
    ];

    /// Stable kebab-case token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

impl FromStr for SemanticColor {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.token() == raw)
            .ok_or_else(|| ParseTokenError::new(Axis::Color, raw))
    }
}

impl fmt::Display for SemanticColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_back_to_their_values() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.token().parse::<ButtonVariant>(), Ok(variant));
        }
        for size in ButtonSize::ALL {
            assert_eq!(size.token().parse::<ButtonSize>(), Ok(size));
        }
        for color in SemanticColor::ALL {
            assert_eq!(color.token().parse::<SemanticColor>(), Ok(color));
        }
    }

    #[test]
    fn parsing_is_case_sensitive_and_reports_the_axis() {
        let err = "Outline".parse::<ButtonVariant>().expect_err("case mismatch");
        assert_eq!(err.axis, Axis::Variant);
        assert_eq!(err.token, "Outline");
        assert_eq!(err.to_string(), "unknown variant token `Outline`");

        let err = "md".parse::<ButtonSize>().expect_err("not a size");
        assert_eq!(err.to_string(), "unknown size token `md`");

        let err = "#ff00ff".parse::<SemanticColor>().expect_err("custom color");
        assert_eq!(err.axis, Axis::Color);
    }

    #[test]
    fn defaults_match_library_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
        assert_eq!(SemanticColor::default(), SemanticColor::Primary);
    }

    #[test]
    fn serde_uses_the_dom_tokens() {
        assert_eq!(
            serde_json::to_string(&SemanticColor::Destructive).expect("serialize"),
            "\"destructive\""
        );
        assert_eq!(
            serde_json::from_str::<ButtonSize>("\"xs\"").expect("deserialize"),
            ButtonSize::Xs
        );
        assert!(serde_json::from_str::<ButtonVariant>("\"raised\"").is_err());
    }
}
