//! Stylesheet entrypoints shipped with the crate.

use leptos::*;

/// Color tokens referenced by the utility classes.
pub const TOKENS_CSS: &str = include_str!("../styles/tokens.css");

/// Base layer applied beneath component classes.
pub const BASE_CSS: &str = include_str!("../styles/base.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Stylesheets a host bundle copies next to its compiled assets.
pub enum Stylesheet {
    /// Color tokens.
    Tokens,
    /// Base layer.
    Base,
}

impl Stylesheet {
    /// Every stylesheet, tokens first.
    pub const ALL: [Self; 2] = [Self::Tokens, Self::Base];

    /// Distribution path relative to the bundle root.
    pub fn path(self) -> &'static str {
        match self {
            Self::Tokens => "styles/tokens.css",
            Self::Base => "styles/base.css",
        }
    }

    /// Stylesheet text.
    pub fn contents(self) -> &'static str {
        match self {
            Self::Tokens => TOKENS_CSS,
            Self::Base => BASE_CSS,
        }
    }
}

#[component]
/// Inlines the token and base stylesheets for hosts without a CSS pipeline.
pub fn UiKitStyles() -> impl IntoView {
    Stylesheet::ALL
        .into_iter()
        .map(|sheet| view! { <style data-ui-stylesheet=sheet.path()>{sheet.contents()}</style> })
        .collect_view()
}
