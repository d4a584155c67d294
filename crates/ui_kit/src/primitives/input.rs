use super::*;
use crate::input_classes::{
    addon_before_class, clear_control_class, clear_control_visible, container_class, field_class,
    is_search, is_submit_key, rendered_input_type, SEARCH_CONTROL, SEARCH_CONTROL_COLOR,
};

#[component]
/// Shared text input with optional leading addon, clear control, and search submit.
///
/// `on_change` receives the field value after every input event and an empty
/// string when the clear control is used. `on_search` receives the current
/// element value on `Enter` and from the search button of `input_type="search"`.
pub fn Input(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] addon_before: Option<ViewFn>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_search: Option<Callback<String>>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let show_clear = create_rw_signal(false);

    if let Some(value) = value {
        create_effect(move |_| {
            let next = value.get();
            show_clear.set(clear_control_visible(clearable, &next));
            if let Some(input) = node_ref.get() {
                if input.value() != next {
                    input.set_value(&next);
                }
            }
        });
    }

    let submit_search = move || {
        if let (Some(on_search), Some(input)) = (on_search, node_ref.get_untracked()) {
            on_search.call(input.value());
        }
    };

    let clear = move || {
        if let Some(input) = node_ref.get_untracked() {
            input.set_value("");
        }
        show_clear.set(false);
        if let Some(on_change) = on_change {
            on_change.call(String::new());
        }
        if let Some(on_clear) = on_clear {
            on_clear.call(());
        }
    };

    let has_addon_before = addon_before.is_some();
    let clear_class = clear_control_class(input_type);

    view! {
        <div
            class=move || container_class(&class.get())
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-state=move || if loading.get() { "loading" } else { "idle" }
        >
            {addon_before
                .map(|addon| view! { <div class=addon_before_class()>{addon.run()}</div> })}
            <input
                {..attrs}
                type=rendered_input_type(input_type)
                class=field_class(clearable, has_addon_before, input_type)
                id=id
                name=name
                placeholder=placeholder
                aria-label=aria_label
                aria-busy=move || loading.get().then_some("true")
                autocomplete=autocomplete
                disabled=move || disabled.get()
                node_ref=node_ref
                data-slot="input"
                on:input=move |ev| {
                    let next = event_target_value(&ev);
                    show_clear.set(clear_control_visible(clearable, &next));
                    if let Some(on_change) = on_change {
                        on_change.call(next);
                    }
                }
                on:keydown=move |ev: KeyboardEvent| {
                    if is_submit_key(&ev.key()) {
                        submit_search();
                    }
                    if let Some(on_keydown) = on_keydown {
                        on_keydown.call(ev);
                    }
                }
                on:focus=move |ev| {
                    if let Some(on_focus) = on_focus {
                        on_focus.call(ev);
                    }
                }
                on:blur=move |ev| {
                    if let Some(on_blur) = on_blur {
                        on_blur.call(ev);
                    }
                }
            />
            <Show when=move || show_clear.get() fallback=|| ()>
                <button
                    type="button"
                    class=clear_class.clone()
                    aria-label="Clear"
                    data-ui-slot="clear"
                    on:click=move |_| clear()
                >
                    <ClearGlyph />
                </button>
            </Show>
            {is_search(input_type)
                .then(|| {
                    view! {
                        <Button
                            variant=ButtonVariant::Text
                            size=ButtonSize::Icon
                            color=SEARCH_CONTROL_COLOR.token()
                            class=SEARCH_CONTROL
                            aria_label="Search"
                            on_click=Callback::new(move |_| submit_search())
                        >
                            <SearchGlyph />
                        </Button>
                    }
                })}
        </div>
    }
}

#[component]
fn ClearGlyph() -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 16 16"
            width="14"
            height="14"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            aria-hidden="true"
        >
            <path d="M4 4l8 8M12 4l-8 8" />
        </svg>
    }
}

#[component]
fn SearchGlyph() -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 16 16"
            width="14"
            height="14"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            aria-hidden="true"
        >
            <circle cx="7" cy="7" r="4.5" />
            <path d="M10.5 10.5L14 14" />
        </svg>
    }
}
