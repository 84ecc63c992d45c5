//! Accumulated parameter values for a report run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mapping from parameter name to its current value.
///
/// Values accumulate across parameter-control change events: a new value for
/// one parameter never discards values already captured for the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamValues(pub HashMap<String, serde_json::Value>);

impl ParamValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one changed parameter into the accumulated set.
    pub fn merge(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_non_destructive() {
        let mut values = ParamValues::new();
        values.merge("from", serde_json::json!("2024-01-01"));
        values.merge("region", serde_json::json!("west"));
        assert_eq!(values.get("from"), Some(&serde_json::json!("2024-01-01")));
        assert_eq!(values.get("region"), Some(&serde_json::json!("west")));
    }

    #[test]
    fn merge_overwrites_same_key() {
        let mut values = ParamValues::new();
        values.merge("region", serde_json::json!("east"));
        values.merge("region", serde_json::json!("west"));
        assert_eq!(values.get("region"), Some(&serde_json::json!("west")));
        assert_eq!(values.0.len(), 1);
    }

    #[test]
    fn serializes_transparently() {
        let mut values = ParamValues::new();
        values.merge("limit", serde_json::json!(10));
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json, serde_json::json!({"limit": 10}));
    }
}
