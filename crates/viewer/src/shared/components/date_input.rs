use leptos::prelude::*;

/// Native date picker emitting yyyy-mm-dd values
/// The browser displays the date in locale format
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler (receives yyyy-mm-dd format)
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            class="rv-param__date"
            type="date"
            prop:value=value
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        />
    }
}
