//! Design-system button and input primitives for Leptos.
//!
//! Components are styled with Tailwind utility classes. The variant resolver
//! maps a button's `variant`, `size`, and `color` props to an ordered class
//! list plus inline style: semantic colors select precomputed compound class
//! fragments, while any other color string is applied verbatim through inline
//! style declarations. The resolver is pure and host independent, so it can be
//! used without rendering.
//!
//! Hosts load the color tokens either through their Tailwind pipeline from
//! [`styles::TOKENS_CSS`] / [`styles::BASE_CSS`] or by rendering
//! [`styles::UiKitStyles`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod button_classes;
mod class_list;
pub mod input_classes;
mod primitives;
mod resolver;
mod style_map;
pub mod styles;
mod variants;

pub use class_list::{class_names, ClassList};
pub use primitives::{Button, Input};
pub use resolver::{custom_color_style, resolve, ButtonStyle, ColorInput, ResolvedStyle};
pub use style_map::StyleMap;
pub use variants::{Axis, ButtonSize, ButtonVariant, ParseTokenError, SemanticColor};

/// Convenience imports for applications composing the primitives.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonStyle, ButtonVariant, ColorInput, Input, SemanticColor, StyleMap,
    };
}
