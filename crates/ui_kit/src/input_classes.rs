//! Class assembly and behavior rules for the text input wrapper.

use crate::{ClassList, SemanticColor};

const CONTAINER_BASE: &str = "group relative flex w-full items-center";

const ADDON_BEFORE: &str = "absolute top-0 left-0 flex h-full min-w-8 items-center justify-center rounded rounded-r-none border bg-gray-100 px-2 text-sm text-gray-500 group-focus-within:border-ring group-focus-within:border-r-border";

const FIELD_BASE: &str = "file:text-foreground placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input flex h-8 w-full min-w-0 rounded border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none file:inline-flex file:h-7 file:border-0 file:bg-transparent file:text-sm file:font-medium disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-xs";
const FIELD_FOCUS: &str = "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]";
const FIELD_INVALID: &str = "aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";
const FIELD_NUMBER_RESET: &str = "[appearance:textfield] [&::-webkit-inner-spin-button]:appearance-none [&::-webkit-outer-spin-button]:appearance-none";

const CLEAR_CONTROL: &str = "absolute text-gray-400 hover:text-gray-600 focus:outline-none";

/// Classes the search submit button adds over its `text`/`icon` button styling.
pub const SEARCH_CONTROL: &str = "absolute right-0.5 h-full rounded-none border-l focus:outline-none";

/// Semantic color of the search submit button; its compound supplies the muted foreground.
pub const SEARCH_CONTROL_COLOR: SemanticColor = SemanticColor::Secondary;

/// Key that submits the field value to the search handler.
pub const SUBMIT_KEY: &str = "Enter";

const SEARCH_TYPE: &str = "search";
const NUMBER_TYPE: &str = "number";

/// Whether `input_type` requests the search affordance.
pub fn is_search(input_type: &str) -> bool {
    input_type == SEARCH_TYPE
}

/// `type` attribute actually rendered; search fields render as plain text.
pub fn rendered_input_type(input_type: &str) -> &str {
    if is_search(input_type) {
        "text"
    } else {
        input_type
    }
}

/// Class for the positioning wrapper around the field.
pub fn container_class(extra: &str) -> String {
    ClassList::new().with(CONTAINER_BASE).with(extra).to_string()
}

/// Class for the leading addon box.
pub fn addon_before_class() -> &'static str {
    ADDON_BEFORE
}

/// Class for the `<input>` element.
pub fn field_class(clearable: bool, has_addon_before: bool, input_type: &str) -> String {
    let mut class = ClassList::new()
        .with(FIELD_BASE)
        .with(FIELD_FOCUS)
        .with(FIELD_INVALID);
    class.push_if(clearable, "pr-8");
    class.push_if(has_addon_before, "pl-10");
    class.push_if(input_type == NUMBER_TYPE, FIELD_NUMBER_RESET);
    class.to_string()
}

/// Class for the clear control; it sits left of the search button when one is shown.
pub fn clear_control_class(input_type: &str) -> String {
    let offset = if is_search(input_type) { "right-9" } else { "right-3" };
    ClassList::new().with(CLEAR_CONTROL).with(offset).to_string()
}

/// Whether the clear control is visible for the last observed value.
pub fn clear_control_visible(clearable: bool, value: &str) -> bool {
    clearable && !value.is_empty()
}

/// Whether a keydown `key` submits the search.
pub fn is_submit_key(key: &str) -> bool {
    key == SUBMIT_KEY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ButtonSize, ButtonStyle, ButtonVariant};

    #[test]
    fn search_renders_as_text_and_others_pass_through() {
        assert_eq!(rendered_input_type("search"), "text");
        assert_eq!(rendered_input_type("password"), "password");
        assert_eq!(rendered_input_type("number"), "number");
    }

    #[test]
    fn field_class_adds_padding_for_affordances() {
        let plain = field_class(false, false, "text");
        assert!(!plain.contains("pr-8"));
        assert!(!plain.contains("pl-10"));

        let decorated = field_class(true, true, "text");
        let tokens: Vec<&str> = decorated.split(' ').collect();
        assert!(tokens.contains(&"pr-8"));
        assert!(tokens.contains(&"pl-10"));
    }

    #[test]
    fn number_fields_hide_spin_buttons() {
        assert!(field_class(false, false, "number").contains("[appearance:textfield]"));
        assert!(!field_class(false, false, "text").contains("[appearance:textfield]"));
    }

    #[test]
    fn clear_control_moves_aside_for_search_button() {
        assert!(clear_control_class("search").ends_with("right-9"));
        assert!(clear_control_class("text").ends_with("right-3"));
    }

    #[test]
    fn clear_control_needs_clearable_and_a_value() {
        assert!(clear_control_visible(true, "abc"));
        assert!(!clear_control_visible(true, ""));
        assert!(!clear_control_visible(false, "abc"));
    }

    #[test]
    fn only_enter_submits() {
        assert!(is_submit_key("Enter"));
        assert!(!is_submit_key("enter"));
        assert!(!is_submit_key("Tab"));
    }

    #[test]
    fn search_control_color_comes_from_a_single_compound() {
        let resolved = ButtonStyle::new()
            .variant(ButtonVariant::Text)
            .size(ButtonSize::Icon)
            .color(SEARCH_CONTROL_COLOR)
            .class(SEARCH_CONTROL)
            .resolve();

        assert!(resolved.class.contains("text-secondary-foreground"));
        let foreign_text_color = resolved.class.tokens().iter().find(|token| {
            token.starts_with("text-primary")
                || token.starts_with("text-gray")
                || token.starts_with("hover:text-primary")
                || token.starts_with("hover:text-gray")
        });
        assert_eq!(foreign_text_color, None);
        assert!(resolved.style.is_empty());
    }

    #[test]
    fn container_keeps_caller_classes_last() {
        assert_eq!(
            container_class("max-w-sm relative"),
            "group flex w-full items-center max-w-sm relative"
        );
    }
}
