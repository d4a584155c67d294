//! Constant class fragment tables for the button variant system.

use crate::{ButtonSize, ButtonVariant, SemanticColor};

/// Classes applied to every button regardless of variant.
pub const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap cursor-pointer rounded text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";

/// Class fragment selected by the variant axis.
pub fn variant_fragment(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Default => "shadow-xs",
        ButtonVariant::Secondary => {
            "border border-solid bg-white border-gray-300 hover:bg-gray-200"
        }
        ButtonVariant::Outline => "border shadow-xs",
        ButtonVariant::Ghost => "",
        ButtonVariant::Link => "underline-offset-4 underline hover:underline",
        ButtonVariant::Text => "",
    }
}

/// Class fragment selected by the size axis.
pub fn size_fragment(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Default => "h-8 px-4 py-2 has-[>svg]:px-3",
        ButtonSize::Sm => "h-7 rounded gap-1.5 px-3 has-[>svg]:px-2.5 text-sm",
        ButtonSize::Xs => "h-6 rounded gap-1.5 px-2 has-[>svg]:px-1.5 text-xs",
        ButtonSize::Lg => "h-10 rounded px-6 has-[>svg]:px-4 text-lg",
        ButtonSize::Icon => "size-7 [&>svg]:size-3.5",
    }
}

/// Class fragment for one `(variant, color)` pair.
///
/// The secondary variant carries its own neutral palette, so none of its pairs
/// add color classes.
pub fn compound_fragment(variant: ButtonVariant, color: SemanticColor) -> &'static str {
    use ButtonVariant as V;
    use SemanticColor as C;

    match (variant, color) {
        (V::Default, C::Primary) => "bg-primary text-primary-foreground hover:bg-primary/90",
        (V::Default, C::Secondary) => {
            "bg-secondary text-secondary-foreground hover:bg-secondary/90"
        }
        (V::Default, C::Destructive) => {
            "bg-destructive text-destructive-foreground hover:bg-destructive/90"
        }
        (V::Default, C::Warning) => "bg-warning text-warning-foreground hover:bg-warning/90",
        (V::Default, C::Success) => "bg-success text-success-foreground hover:bg-success/90",

        (V::Secondary, _) => "",

        (V::Outline, C::Primary) => {
            "bg-background text-primary border-primary hover:bg-primary/10 hover:text-primary dark:bg-input/30 dark:border-input dark:hover:bg-input/50"
        }
        (V::Outline, C::Secondary) => {
            "bg-background text-secondary-foreground hover:border-primary hover:text-primary"
        }
        (V::Outline, C::Destructive) => {
            "bg-background text-destructive border-destructive hover:bg-destructive/10 hover:text-destructive"
        }
        (V::Outline, C::Warning) => {
            "bg-background text-warning border-warning hover:bg-warning/10 hover:text-warning"
        }
        (V::Outline, C::Success) => {
            "bg-background text-success border-success hover:bg-success/10 hover:text-success"
        }

        (V::Ghost, C::Primary) => "text-primary hover:bg-primary/10 hover:text-primary",
        (V::Ghost, C::Secondary) => {
            "text-secondary-foreground hover:bg-secondary-foreground/10 hover:text-secondary-foreground"
        }
        (V::Ghost, C::Destructive) => {
            "text-destructive hover:bg-destructive/10 hover:text-destructive"
        }
        (V::Ghost, C::Warning) => "text-warning hover:bg-warning/10 hover:text-warning",
        (V::Ghost, C::Success) => "text-success hover:bg-success/10 hover:text-success",

        (V::Link | V::Text, C::Primary) => "text-primary hover:text-primary/80",
        (V::Link | V::Text, C::Secondary) => {
            "text-secondary-foreground hover:text-secondary-foreground/80"
        }
        (V::Link | V::Text, C::Destructive) => "text-destructive hover:text-destructive/80",
        (V::Link | V::Text, C::Warning) => "text-warning hover:text-warning/80",
        (V::Link | V::Text, C::Success) => "text-success hover:text-success/80",
    }
}
