//! One input control per declared report parameter.
//!
//! A control is a pure value-change boundary: it never talks to the network,
//! it only emits `(parameter name, new value)` once per user interaction.
//! The transient value is seeded from the declared default once at mount;
//! later re-renders never reset a user's edit.

use chrono::Utc;
use contracts::{ParameterDef, ParameterType};
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::components::{Checkbox, DateInput, Input, Select, Textarea};

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text the control starts out showing. Date controls without a declared
/// default start on today's date.
fn initial_text(param: &ParameterDef) -> String {
    match param.default_value.as_ref() {
        Some(value) => value_text(value),
        None if param.param_type == ParameterType::Date => {
            Utc::now().date_naive().format("%Y-%m-%d").to_string()
        }
        None => String::new(),
    }
}

/// Comma-split option list for select/multiselect controls.
fn select_options(param: &ParameterDef) -> Vec<String> {
    param
        .select_values
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|option| option.trim().to_string())
        .filter(|option| !option.is_empty())
        .collect()
}

/// Number inputs emit JSON numbers; anything unparseable passes through as
/// the raw string.
fn parse_number(raw: &str) -> Value {
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

#[component]
pub fn ParamControl(
    /// Parameter descriptor from the report definition
    param: ParameterDef,
    /// Emits `(parameter name, new value)` on every user interaction
    #[prop(into)]
    on_change: Callback<(String, Value)>,
) -> impl IntoView {
    let value = RwSignal::new(initial_text(&param));
    let name = StoredValue::new(param.name.clone());

    let emit_text = Callback::new(move |raw: String| {
        value.set(raw.clone());
        on_change.run((name.get_value(), Value::String(raw)));
    });
    let emit_number = Callback::new(move |raw: String| {
        value.set(raw.clone());
        on_change.run((name.get_value(), parse_number(&raw)));
    });
    let emit_bool = Callback::new(move |flag: bool| {
        value.set(flag.to_string());
        on_change.run((name.get_value(), Value::Bool(flag)));
    });

    let options = select_options(&param);
    let checked = Signal::derive(move || value.get() == "true");

    let control = match param.param_type {
        ParameterType::Date => view! {
            <DateInput value=value on_change=emit_text />
        }
        .into_any(),
        ParameterType::Select => view! {
            <Select value=value on_change=emit_text options=options />
        }
        .into_any(),
        ParameterType::Multiselect => view! {
            <Select value=value on_change=emit_text options=options multiple=true />
        }
        .into_any(),
        ParameterType::Sql => view! {
            <Textarea value=value on_change=emit_text />
        }
        .into_any(),
        ParameterType::Number => view! {
            <Input value=value on_change=emit_number input_type="number" />
        }
        .into_any(),
        ParameterType::Boolean => view! {
            <Checkbox checked=checked on_change=emit_bool />
        }
        .into_any(),
        // string and unknown types fall back to plain text
        ParameterType::String | ParameterType::Other(_) => view! {
            <Input value=value on_change=emit_text placeholder=param.name.clone() />
        }
        .into_any(),
    };

    view! { <div class="rv-param">{control}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn param(param_type: &str) -> ParameterDef {
        ParameterDef {
            name: "region".to_string(),
            param_type: ParameterType::from(param_type.to_string()),
            default_value: None,
            select_values: None,
        }
    }

    #[test]
    fn default_value_seeds_the_control() {
        let mut with_default = param("string");
        with_default.default_value = Some(json!("west"));
        assert_eq!(initial_text(&with_default), "west");

        let mut numeric = param("number");
        numeric.default_value = Some(json!(25));
        assert_eq!(initial_text(&numeric), "25");

        assert_eq!(initial_text(&param("string")), "");
    }

    #[test]
    fn date_without_default_starts_today() {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(initial_text(&param("date")), today);
    }

    #[test]
    fn select_values_are_comma_split() {
        let mut select = param("select");
        select.select_values = Some("east, west ,north,,south".to_string());
        assert_eq!(select_options(&select), vec!["east", "west", "north", "south"]);
        assert!(select_options(&param("select")).is_empty());
    }

    #[test]
    fn numbers_parse_or_pass_through() {
        assert_eq!(parse_number("12.5"), json!(12.5));
        assert_eq!(parse_number("-3"), json!(-3.0));
        assert_eq!(parse_number("abc"), json!("abc"));
    }
}
