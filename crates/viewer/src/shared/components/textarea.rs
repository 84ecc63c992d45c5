use leptos::prelude::*;

/// Multi-line text input, used for sql parameters
#[component]
pub fn Textarea(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(into)]
    on_change: Callback<String>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <textarea
            class="rv-param__textarea"
            rows=textarea_rows
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        >
            {move || value.get()}
        </textarea>
    }
}
