//! Showcase app for the `ui_kit` design system.
//!
//! Renders every variant, size, and semantic color combination through the
//! shared primitives, plus a custom-color playground and the input affordances,
//! so visual changes can be reviewed in one page.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use ui_kit::prelude::*;
use ui_kit::styles::UiKitStyles;

const DEFAULT_CUSTOM_COLOR: &str = "#7c3aed";

/// One row of the variant matrix: a variant and every color it is shown with.
fn variant_matrix() -> Vec<(ButtonVariant, [SemanticColor; 5])> {
    ButtonVariant::ALL
        .into_iter()
        .map(|variant| (variant, SemanticColor::ALL))
        .collect()
}

fn button_label(variant: ButtonVariant, color: &ColorInput) -> String {
    match color {
        ColorInput::Predefined(color) => format!("{variant} / {color}"),
        ColorInput::Custom(raw) => format!("{variant} / {raw}"),
    }
}

#[component]
/// Showcase page contents.
pub fn ShowcaseApp() -> impl IntoView {
    let custom_color = create_rw_signal(DEFAULT_CUSTOM_COLOR.to_string());
    let search_log = create_rw_signal(Vec::<String>::new());
    let text_value = create_rw_signal("Clear me".to_string());
    let cleared = create_rw_signal(0_u32);

    view! {
        <UiKitStyles />
        <main class="flex flex-col gap-8 p-8">
            <section class="flex flex-col gap-3">
                <h2 class="text-lg font-medium">"Variants and colors"</h2>
                {variant_matrix()
                    .into_iter()
                    .map(|(variant, colors)| {
                        view! {
                            <div class="flex flex-wrap gap-2" data-showcase-variant=variant.token()>
                                {colors
                                    .into_iter()
                                    .map(|color| {
                                        view! {
                                            <Button variant=variant color=color.token()>
                                                {button_label(variant, &ColorInput::from(color))}
                                            </Button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="flex flex-col gap-3">
                <h2 class="text-lg font-medium">"Sizes"</h2>
                <div class="flex flex-wrap items-center gap-2">
                    {ButtonSize::ALL
                        .into_iter()
                        .map(|size| view! { <Button size=size>{size.token()}</Button> })
                        .collect_view()}
                </div>
            </section>

            <section class="flex flex-col gap-3">
                <h2 class="text-lg font-medium">"Custom color"</h2>
                <Input
                    aria_label="Custom color"
                    placeholder="#hex, rgb(), or var(--token)"
                    clearable=true
                    value=Signal::derive(move || custom_color.get())
                    on_change=Callback::new(move |next: String| custom_color.set(next))
                />
                <div class="flex flex-wrap gap-2">
                    {ButtonVariant::ALL
                        .into_iter()
                        .map(|variant| {
                            view! {
                                <Button variant=variant color=Signal::derive(move || custom_color.get())>
                                    {move || button_label(variant, &ColorInput::from(custom_color.get()))}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="flex flex-col gap-3">
                <h2 class="text-lg font-medium">"Inputs"</h2>
                <Input
                    input_type="search"
                    placeholder="Search and press Enter"
                    clearable=true
                    on_search=Callback::new(move |query: String| {
                        logging::log!("showcase search: {query}");
                        search_log.update(|log| log.push(query));
                    })
                />
                <ul class="text-xs text-gray-500">
                    {move || {
                        search_log
                            .get()
                            .into_iter()
                            .map(|query| view! { <li>{query}</li> })
                            .collect_view()
                    }}
                </ul>
                <Input
                    clearable=true
                    value=Signal::derive(move || text_value.get())
                    on_change=Callback::new(move |next: String| text_value.set(next))
                    on_clear=Callback::new(move |_| cleared.update(|count| *count += 1))
                />
                <p class="text-xs text-gray-500">
                    {move || format!("Cleared {} times", cleared.get())}
                </p>
                <Input
                    input_type="number"
                    placeholder="Amount"
                    addon_before=|| "$"
                />
                <Input placeholder="Loading" loading=true disabled=true />
            </section>
        </main>
    }
}

/// Mounts the showcase into the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    logging::log!("mounting ui_kit showcase");
    leptos::mount_to_body(|| view! { <ShowcaseApp /> })
}
