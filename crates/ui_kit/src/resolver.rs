//! Resolution of button props into a class list and inline style.
//!
//! Semantic colors are expressed entirely through precomputed compound class
//! fragments. Any other color string is treated as a raw CSS color and applied
//! through inline style declarations chosen by the variant.

use leptos::logging;
use serde::{Deserialize, Deserializer, Serialize};

use crate::button_classes::{compound_fragment, size_fragment, variant_fragment, BUTTON_BASE};
use crate::{ButtonSize, ButtonVariant, ClassList, SemanticColor, StyleMap};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// A button color, either a design-system role or a raw CSS color.
pub enum ColorInput {
    /// One of the semantic color roles.
    Predefined(SemanticColor),
    /// Raw CSS color token such as `#ff00ff` or `var(--brand)`.
    Custom(String),
}

impl ColorInput {
    /// Classifies a raw color prop.
    ///
    /// Absent and empty values resolve to the default semantic color. Anything
    /// else is matched exactly against the semantic tokens and otherwise kept
    /// verbatim as a custom color.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Predefined(SemanticColor::default()),
            Some(token) => match token.parse::<SemanticColor>() {
                Ok(color) => Self::Predefined(color),
                Err(_) => Self::Custom(token.to_string()),
            },
        }
    }

    /// The semantic color, if this is one.
    pub fn semantic(&self) -> Option<SemanticColor> {
        match self {
            Self::Predefined(color) => Some(*color),
            Self::Custom(_) => None,
        }
    }

    /// Token written to the `data-ui-color` hook.
    pub fn token(&self) -> &str {
        match self {
            Self::Predefined(color) => color.token(),
            Self::Custom(_) => "custom",
        }
    }
}

impl Default for ColorInput {
    fn default() -> Self {
        Self::Predefined(SemanticColor::default())
    }
}

impl From<SemanticColor> for ColorInput {
    fn from(color: SemanticColor) -> Self {
        Self::Predefined(color)
    }
}

impl From<&str> for ColorInput {
    fn from(raw: &str) -> Self {
        Self::classify(Some(raw))
    }
}

impl From<String> for ColorInput {
    fn from(raw: String) -> Self {
        Self::classify(Some(&raw))
    }
}

impl From<ColorInput> for String {
    fn from(color: ColorInput) -> Self {
        match color {
            ColorInput::Predefined(color) => color.token().to_string(),
            ColorInput::Custom(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Class list and inline style produced for one render.
pub struct ResolvedStyle {
    /// Classes in cascade order.
    pub class: ClassList,
    /// Inline style declarations.
    pub style: StyleMap,
}

impl ResolvedStyle {
    /// Value for the `class` attribute.
    pub fn class_name(&self) -> String {
        self.class.to_string()
    }

    /// Value for the `style` attribute, or `None` when nothing is set.
    pub fn inline_style(&self) -> Option<String> {
        (!self.style.is_empty()).then(|| self.style.to_css())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Declarative button style props.
///
/// `variant` and `size` are `None` when a raw token did not name a known
/// value; the axis then contributes no classes.
pub struct ButtonStyle {
    /// Visual style family.
    #[serde(deserialize_with = "deserialize_axis")]
    pub variant: Option<ButtonVariant>,
    /// Sizing token.
    #[serde(deserialize_with = "deserialize_axis")]
    pub size: Option<ButtonSize>,
    /// Semantic or custom color.
    pub color: ColorInput,
    /// Caller classes appended after every computed class.
    pub class: String,
    /// Caller inline style merged over computed declarations.
    pub style: StyleMap,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            variant: Some(ButtonVariant::default()),
            size: Some(ButtonSize::default()),
            color: ColorInput::default(),
            class: String::new(),
            style: StyleMap::new(),
        }
    }
}

impl ButtonStyle {
    /// Props with every axis at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds props from raw attribute tokens.
    ///
    /// Absent tokens take the defaults. Unknown variant and size tokens are
    /// logged and leave their axis unset.
    pub fn from_tokens(variant: Option<&str>, size: Option<&str>, color: Option<&str>) -> Self {
        Self {
            variant: parse_axis(variant),
            size: parse_axis(size),
            color: ColorInput::classify(color),
            ..Self::default()
        }
    }

    /// Sets the variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the color from a semantic role or a raw string.
    pub fn color(mut self, color: impl Into<ColorInput>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the caller classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Sets the caller inline style.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    /// Resolves the props into classes and inline style.
    pub fn resolve(&self) -> ResolvedStyle {
        let mut class = ClassList::new().with(BUTTON_BASE);
        if let Some(variant) = self.variant {
            class.push(variant_fragment(variant));
        }
        if let Some(size) = self.size {
            class.push(size_fragment(size));
        }

        let mut style = StyleMap::new();
        match (&self.color, self.variant) {
            (ColorInput::Predefined(color), Some(variant)) => {
                class.push(compound_fragment(variant, *color));
            }
            (ColorInput::Predefined(_), None) => {}
            (ColorInput::Custom(color), variant) => {
                style = custom_color_style(variant, color);
            }
        }

        class.push(&self.class);
        style.merge(&self.style);

        ResolvedStyle { class, style }
    }
}

/// Resolves raw attribute tokens; see [`ButtonStyle::from_tokens`].
pub fn resolve(
    variant: Option<&str>,
    size: Option<&str>,
    color: Option<&str>,
    extra_class: Option<&str>,
) -> ResolvedStyle {
    ButtonStyle::from_tokens(variant, size, color)
        .class(extra_class.unwrap_or_default())
        .resolve()
}

fn parse_axis<T>(raw: Option<&str>) -> Option<T>
where
    T: std::str::FromStr<Err = crate::ParseTokenError> + Default,
{
    match raw {
        None => Some(T::default()),
        Some(token) => match token.parse::<T>() {
            Ok(value) => Some(value),
            Err(err) => {
                logging::warn!("button style: {err}; no classes applied for this axis");
                None
            }
        },
    }
}

fn deserialize_axis<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr<Err = crate::ParseTokenError> + Default,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(parse_axis(raw.as_deref()))
}

/// Inline declarations a custom color produces for each variant.
///
/// An empty `color` produces no declarations.
pub fn custom_color_style(variant: Option<ButtonVariant>, color: &str) -> StyleMap {
    if color.is_empty() {
        return StyleMap::new();
    }

    match variant {
        Some(ButtonVariant::Default | ButtonVariant::Secondary) => StyleMap::new()
            .with("background-color", color)
            .with("color", format!("{color}/80")),
        Some(ButtonVariant::Outline) => StyleMap::new()
            .with("color", color)
            .with("border-color", color),
        Some(ButtonVariant::Ghost | ButtonVariant::Link | ButtonVariant::Text) => {
            StyleMap::new().with("color", color)
        }
        None => StyleMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classify_recognizes_semantic_tokens_only() {
        assert_eq!(
            ColorInput::classify(Some("warning")),
            ColorInput::Predefined(SemanticColor::Warning)
        );
        assert_eq!(
            ColorInput::classify(Some("Warning")),
            ColorInput::Custom("Warning".to_string())
        );
        assert_eq!(
            ColorInput::classify(Some("var(--brand)")),
            ColorInput::Custom("var(--brand)".to_string())
        );
    }

    #[test]
    fn absent_and_empty_colors_are_primary() {
        assert_eq!(ColorInput::classify(None), ColorInput::Predefined(SemanticColor::Primary));
        assert_eq!(ColorInput::classify(Some("")), ColorInput::Predefined(SemanticColor::Primary));
    }

    #[test]
    fn padded_colors_are_custom_and_kept_verbatim() {
        assert_eq!(
            ColorInput::classify(Some(" destructive ")),
            ColorInput::Custom(" destructive ".to_string())
        );
        assert_eq!(ColorInput::classify(Some("  ")), ColorInput::Custom("  ".to_string()));

        let padded_semantic = resolve(Some("ghost"), None, Some(" destructive "), None);
        assert!(!padded_semantic.class.contains("text-destructive"));
        assert_eq!(padded_semantic.style.get("color"), Some(" destructive "));

        let padded_hex = resolve(Some("default"), None, Some(" #ff00ff"), None);
        assert_eq!(
            padded_hex.style.iter().collect::<Vec<_>>(),
            vec![("background-color", " #ff00ff"), ("color", " #ff00ff/80")]
        );
    }

    #[test]
    fn defaults_resolve_to_filled_primary() {
        let resolved = resolve(None, None, None, None);
        assert!(resolved.class.contains_all(BUTTON_BASE));
        assert!(resolved.class.contains_all("shadow-xs h-8 px-4 py-2"));
        assert!(resolved.class.contains_all("bg-primary text-primary-foreground"));
        assert_eq!(resolved.inline_style(), None);
    }

    #[test]
    fn unknown_variant_contributes_nothing() {
        let resolved = resolve(Some("raised"), Some("sm"), Some("destructive"), None);
        assert_eq!(
            resolved.class,
            ClassList::new().with(BUTTON_BASE).with(size_fragment(ButtonSize::Sm))
        );

        let custom = resolve(Some("raised"), None, Some("#123456"), None);
        assert!(custom.style.is_empty());
    }

    #[test]
    fn unknown_size_keeps_variant_and_compound() {
        let resolved = resolve(Some("ghost"), Some("huge"), Some("success"), None);
        assert!(resolved.class.contains_all("text-success hover:bg-success/10"));
        assert!(!resolved.class.contains("h-8"));
    }

    #[test]
    fn custom_color_on_outline_sets_text_and_border() {
        let resolved = ButtonStyle::new()
            .variant(ButtonVariant::Outline)
            .color("var(--brand)")
            .resolve();
        assert_eq!(
            resolved.inline_style().as_deref(),
            Some("color: var(--brand); border-color: var(--brand);")
        );
        assert!(!resolved.class.contains("text-primary"));
        assert!(resolved.class.contains_all("border shadow-xs"));
    }

    #[test]
    fn caller_style_wins_over_custom_color() {
        let resolved = ButtonStyle::new()
            .color("#00ff00")
            .style(StyleMap::new().with("color", "black"))
            .resolve();
        assert_eq!(resolved.style.get("background-color"), Some("#00ff00"));
        assert_eq!(resolved.style.get("color"), Some("black"));
    }

    #[test]
    fn caller_style_applies_with_semantic_colors_too() {
        let resolved = ButtonStyle::new()
            .color(SemanticColor::Success)
            .style(StyleMap::new().with("min-width", "6rem"))
            .resolve();
        assert_eq!(resolved.inline_style().as_deref(), Some("min-width: 6rem;"));
    }

    #[test]
    fn button_style_deserializes_from_stored_props() {
        let stored = r##"{"variant":"link","size":"xs","color":"#abcdef"}"##;
        let style: ButtonStyle = serde_json::from_str(stored).expect("deserialize props");
        assert_eq!(style.variant, Some(ButtonVariant::Link));
        assert_eq!(style.size, Some(ButtonSize::Xs));
        assert_eq!(style.color, ColorInput::Custom("#abcdef".to_string()));
        assert_eq!(style.resolve().style.get("color"), Some("#abcdef"));

        let semantic: ButtonStyle =
            serde_json::from_str(r#"{"variant":"ghost","size":"lg","color":"warning"}"#)
                .expect("deserialize semantic props");
        assert_eq!(semantic.color, ColorInput::Predefined(SemanticColor::Warning));

        let sparse: ButtonStyle = serde_json::from_str(r#"{"color":"success"}"#).expect("sparse");
        assert_eq!(sparse, ButtonStyle::new().color(SemanticColor::Success));
    }

    #[test]
    fn stored_props_with_unknown_axis_tokens_deserialize_permissively() {
        let stored = r#"{"variant":"raised","size":"sm","color":"destructive"}"#;
        let style: ButtonStyle = serde_json::from_str(stored).expect("tolerated");
        assert_eq!(style.variant, None);
        assert_eq!(style.size, Some(ButtonSize::Sm));
        assert_eq!(
            style.resolve(),
            resolve(Some("raised"), Some("sm"), Some("destructive"), None)
        );

        let nulls: ButtonStyle =
            serde_json::from_str(r#"{"variant":null,"size":"huge"}"#).expect("null variant");
        assert_eq!(nulls.variant, Some(ButtonVariant::Default));
        assert_eq!(nulls.size, None);
    }
}
