//! Leptos button and input primitives.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{ButtonSize, ButtonStyle, ButtonVariant, ColorInput, ResolvedStyle, StyleMap};

mod button;
mod input;

pub use button::Button;
pub use input::Input;

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
