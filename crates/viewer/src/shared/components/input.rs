use leptos::prelude::*;

/// Text-like input emitting its value on change
#[component]
pub fn Input(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(into)]
    on_change: Callback<String>,
    /// Input type: "text" (default) or "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let kind = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <input
            class="rv-param__input"
            type=kind
            prop:value=value
            placeholder=move || placeholder.get().unwrap_or_default()
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        />
    }
}
