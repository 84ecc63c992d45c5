use leptos::prelude::*;

/// Checkbox emitting its checked state on change
#[component]
pub fn Checkbox(
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(into)]
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <input
            class="rv-param__checkbox"
            type="checkbox"
            prop:checked=move || checked.get()
            on:change=move |ev| {
                on_change.run(event_target_checked(&ev));
            }
        />
    }
}
