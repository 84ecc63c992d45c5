//! Schema normalization: flattening backend report records into a typed
//! `ReportDefinition`.
//!
//! A report record arrives as `{ schema: {...inner}, ...siblings }`. The
//! normalized definition starts from the nested schema and is overwritten by
//! every sibling field except `schema` itself, so siblings win on key
//! collision. Validation happens here, at the boundary; downstream code works
//! with typed fields only.

use contracts::{ReportDefinition, ViewerError};
use serde_json::Value;

/// Flatten a report record into a single JSON object.
pub fn flatten_record(record: &Value) -> Result<Value, ViewerError> {
    let object = record
        .as_object()
        .ok_or_else(|| ViewerError::SchemaInvalid("report record is not an object".to_string()))?;

    let mut merged = match object.get("schema") {
        Some(Value::Object(inner)) => inner.clone(),
        _ => serde_json::Map::new(),
    };
    for (key, value) in object {
        if key == "schema" {
            continue;
        }
        merged.insert(key.clone(), value.clone());
    }
    Ok(Value::Object(merged))
}

/// Flatten and deserialize a report record.
pub fn normalize_report(record: &Value) -> Result<ReportDefinition, ViewerError> {
    let flat = flatten_record(record)?;
    serde_json::from_value(flat).map_err(|e| ViewerError::SchemaInvalid(e.to_string()))
}

/// Pull the report record out of a `GET /reports/{id}` response.
///
/// The backend wraps the record under `schema` for reports and `report` for
/// dashboards.
pub fn record_from_report_response(response: &Value) -> Result<&Value, ViewerError> {
    response
        .get("schema")
        .or_else(|| response.get("report"))
        .ok_or_else(|| ViewerError::SchemaInvalid("response carries no report record".to_string()))
}

/// `GET /reports/published` envelope: the report record plus the viewer type
/// (`"report"` or `"dashboard"`).
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedEnvelope {
    pub report: ReportDefinition,
    pub viewer_type: Option<String>,
}

pub fn normalize_published(response: &Value) -> Result<PublishedEnvelope, ViewerError> {
    let record = response.get("report").ok_or_else(|| {
        ViewerError::SchemaInvalid("published response carries no report record".to_string())
    })?;
    Ok(PublishedEnvelope {
        report: normalize_report(record)?,
        viewer_type: response
            .get("type")
            .and_then(|v| v.as_str())
            .map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn siblings_win_on_collision() {
        let record = json!({
            "schema": {"name": "inner", "reportType": "bar"},
            "name": "outer",
            "id": "r1"
        });
        let flat = flatten_record(&record).unwrap();
        assert_eq!(flat["name"], json!("outer"));
        assert_eq!(flat["reportType"], json!("bar"));
        assert_eq!(flat["id"], json!("r1"));
        assert!(flat.get("schema").is_none());
    }

    #[test]
    fn missing_nested_schema_keeps_siblings() {
        let record = json!({"name": "standalone", "reportType": "pie"});
        let report = normalize_report(&record).unwrap();
        assert_eq!(report.name.as_deref(), Some("standalone"));
    }

    #[test]
    fn non_object_record_is_invalid() {
        assert!(matches!(
            normalize_report(&json!("nope")),
            Err(ViewerError::SchemaInvalid(_))
        ));
        assert!(matches!(
            normalize_report(&json!(null)),
            Err(ViewerError::SchemaInvalid(_))
        ));
    }

    #[test]
    fn normalizes_into_typed_definition() {
        let record = json!({
            "schema": {
                "reportType": "area",
                "dataSources": [{"id": "ds1"}],
                "yAxis": [{"field": {"dataSourceId": "ds1", "field": "total"}}]
            },
            "name": "Revenue"
        });
        let report = normalize_report(&record).unwrap();
        assert_eq!(report.report_type.chart_kind(), Some("line"));
        assert_eq!(report.name.as_deref(), Some("Revenue"));
        assert_eq!(report.primary_data_source_id(), Some("ds1"));
    }

    #[test]
    fn published_envelope_carries_type() {
        let response = json!({
            "type": "dashboard",
            "report": {"schema": {"widgets": [{"reportId": "r2"}]}, "id": "d1"}
        });
        let envelope = normalize_published(&response).unwrap();
        assert_eq!(envelope.viewer_type.as_deref(), Some("dashboard"));
        assert_eq!(envelope.report.widgets.len(), 1);
        assert_eq!(envelope.report.id.as_deref(), Some("d1"));
    }

    #[test]
    fn report_response_unwraps_either_key() {
        let report = json!({"schema": {"schema": {}, "id": "r1"}});
        let dashboard = json!({"report": {"schema": {}, "id": "d1"}});
        assert_eq!(
            record_from_report_response(&report).unwrap()["id"],
            json!("r1")
        );
        assert_eq!(
            record_from_report_response(&dashboard).unwrap()["id"],
            json!("d1")
        );
        assert!(record_from_report_response(&json!({})).is_err());
    }
}
