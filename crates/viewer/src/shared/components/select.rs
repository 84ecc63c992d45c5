use leptos::prelude::*;

/// Select with a flat option list
#[component]
pub fn Select(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(into)]
    on_change: Callback<String>,
    /// Option values, rendered as both value and label
    options: Vec<String>,
    /// Allow selecting several options
    #[prop(optional)]
    multiple: bool,
) -> impl IntoView {
    view! {
        <select
            class="rv-param__select"
            multiple=multiple
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        >
            <For
                each=move || options.clone()
                key=|option| option.clone()
                children=move |option| {
                    let option_value = option.clone();
                    let is_selected = move || value.get() == option_value;
                    view! {
                        <option value=option.clone() selected=is_selected>
                            {option.clone()}
                        </option>
                    }
                }
            />
        </select>
    }
}
