//! Column projection out of resolved data sources.

use contracts::{FieldRef, ReportDefinition};
use serde_json::Value;

/// Project one column out of the data source a field reference points at.
///
/// Total: a missing reference, a reference without a data-source id, and a
/// data source that is absent or unresolved all yield an empty column. Values
/// pass through untouched; cells missing from individual rows come back as
/// `Null` so row order and length are preserved.
pub fn extract_column(report: &ReportDefinition, field: Option<&FieldRef>) -> Vec<Value> {
    let Some(field) = field else {
        return Vec::new();
    };
    let Some(data_source_id) = field.data_source_id.as_deref() else {
        return Vec::new();
    };
    let Some(data) = report.data.as_ref() else {
        return Vec::new();
    };
    let Some(rows) = data.get(data_source_id) else {
        return Vec::new();
    };
    rows.iter()
        .map(|row| row.get(&field.field).cloned().unwrap_or(Value::Null))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report_with_data() -> ReportDefinition {
        serde_json::from_value(json!({
            "reportType": "bar",
            "dataSources": [{"id": "ds1"}],
            "data": {
                "ds1": [
                    {"month": "Jan", "sales": 10},
                    {"month": "Feb", "sales": 20}
                ]
            }
        }))
        .unwrap()
    }

    fn field(ds: &str, name: &str) -> FieldRef {
        FieldRef {
            data_source_id: Some(ds.to_string()),
            field: name.to_string(),
        }
    }

    #[test]
    fn projects_in_row_order() {
        let report = report_with_data();
        assert_eq!(
            extract_column(&report, Some(&field("ds1", "month"))),
            vec![json!("Jan"), json!("Feb")]
        );
        assert_eq!(
            extract_column(&report, Some(&field("ds1", "sales"))),
            vec![json!(10), json!(20)]
        );
    }

    #[test]
    fn missing_reference_yields_empty() {
        let report = report_with_data();
        assert!(extract_column(&report, None).is_empty());

        let no_source = FieldRef {
            data_source_id: None,
            field: "month".to_string(),
        };
        assert!(extract_column(&report, Some(&no_source)).is_empty());
    }

    #[test]
    fn unresolved_data_yields_empty() {
        let mut report = report_with_data();
        report.data = None;
        assert!(extract_column(&report, Some(&field("ds1", "month"))).is_empty());
    }

    #[test]
    fn unknown_data_source_yields_empty() {
        let report = report_with_data();
        assert!(extract_column(&report, Some(&field("ds9", "month"))).is_empty());
    }

    #[test]
    fn absent_cells_become_null() {
        let report: ReportDefinition = serde_json::from_value(json!({
            "data": {"ds1": [{"a": 1}, {"b": 2}]}
        }))
        .unwrap();
        assert_eq!(
            extract_column(&report, Some(&field("ds1", "a"))),
            vec![json!(1), Value::Null]
        );
    }
}
