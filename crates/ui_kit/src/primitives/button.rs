use super::*;

#[component]
/// Shared button primitive driven by the variant resolver.
///
/// `color` accepts a semantic color token (`"destructive"`) or any raw CSS
/// color (`"#ff00ff"`, `"var(--brand)"`). Raw colors are applied as inline
/// style; semantic colors only through classes.
pub fn Button(
    #[prop(optional, into)] variant: MaybeSignal<ButtonVariant>,
    #[prop(optional, into)] size: MaybeSignal<ButtonSize>,
    #[prop(optional, into)] color: MaybeSignal<String>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] style: MaybeSignal<StyleMap>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let color = Signal::derive(move || ColorInput::from(color.get()));
    let resolved = Signal::derive(move || {
        ButtonStyle::new()
            .variant(variant.get())
            .size(size.get())
            .color(color.get())
            .class(class.get())
            .style(style.get())
            .resolve()
    });

    view! {
        <button
            {..attrs}
            type=button_type.unwrap_or("button")
            class=move || resolved.with(ResolvedStyle::class_name)
            style=move || resolved.with(ResolvedStyle::inline_style)
            id=id
            aria-label=aria_label
            title=move || title.get()
            disabled=move || disabled.get()
            node_ref=node_ref
            data-slot="button"
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=move || variant.get().token()
            data-ui-size=move || size.get().token()
            data-ui-color=move || color.with(|color| color.token().to_string())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {children.map(|children| children())}
        </button>
    }
}
