//! Normalized report and dashboard schema definitions.
//!
//! The wire format is the camelCase JSON produced by the reporting backend.
//! Every field that a report may legitimately omit is optional or defaulted;
//! downstream projections treat "absent" as "render nothing", never as an
//! error.

use serde::{Deserialize, Serialize};

use crate::exec::DataSet;

/// Discriminator for how a report is projected.
///
/// Anything that is not one of the known tags is kept verbatim and handed to
/// the charting library as-is (`bar`, `pie`, `doughnut`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportType {
    Table,
    Template,
    Area,
    MultiAxisLine,
    /// Passed through to the charting library unchanged
    Chart(String),
}

impl Default for ReportType {
    fn default() -> Self {
        ReportType::Chart(String::new())
    }
}

impl From<String> for ReportType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "table" => ReportType::Table,
            "template" => ReportType::Template,
            "area" => ReportType::Area,
            "multi-axis-line" => ReportType::MultiAxisLine,
            _ => ReportType::Chart(tag),
        }
    }
}

impl From<ReportType> for String {
    fn from(value: ReportType) -> Self {
        match value {
            ReportType::Table => "table".to_string(),
            ReportType::Template => "template".to_string(),
            ReportType::Area => "area".to_string(),
            ReportType::MultiAxisLine => "multi-axis-line".to_string(),
            ReportType::Chart(tag) => tag,
        }
    }
}

impl ReportType {
    /// Chart kind understood by the charting library, or `None` for report
    /// types that are not drawn on a canvas at all.
    ///
    /// `area` and `multi-axis-line` are both drawn as `line` charts.
    pub fn chart_kind(&self) -> Option<&str> {
        match self {
            ReportType::Table | ReportType::Template => None,
            ReportType::Area | ReportType::MultiAxisLine => Some("line"),
            ReportType::Chart(tag) => Some(tag.as_str()),
        }
    }
}

/// Pointer selecting one column of one resolved data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldRef {
    /// Data source to read from
    #[serde(default)]
    pub data_source_id: Option<String>,
    /// Column name within that data source's rows
    #[serde(default)]
    pub field: String,
}

/// X-axis binding of a chart report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(default)]
    pub field: Option<FieldRef>,
}

/// One plotted series (one y-axis entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default)]
    pub field: Option<FieldRef>,
    /// Legend label
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub border_width: Option<f64>,
    #[serde(default)]
    pub background_color: Option<String>,
}

/// Column of a table report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    #[serde(default)]
    pub title: Option<String>,
    /// Display width in pixels
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub field: Option<FieldRef>,
}

/// Declaration of a backend data source the report depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceRef {
    pub id: String,
}

/// A dashboard's reference to an embedded report plus display dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(default)]
    pub report_id: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

/// Kind of input rendered for a report parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterType {
    Date,
    Multiselect,
    Select,
    Sql,
    Number,
    String,
    Boolean,
    /// Unknown types fall back to a plain text input
    Other(String),
}

impl Default for ParameterType {
    fn default() -> Self {
        ParameterType::Other(String::new())
    }
}

impl From<String> for ParameterType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "date" => ParameterType::Date,
            "multiselect" => ParameterType::Multiselect,
            "select" => ParameterType::Select,
            "sql" => ParameterType::Sql,
            "number" => ParameterType::Number,
            "string" => ParameterType::String,
            "boolean" => ParameterType::Boolean,
            _ => ParameterType::Other(tag),
        }
    }
}

impl From<ParameterType> for String {
    fn from(value: ParameterType) -> Self {
        match value {
            ParameterType::Date => "date".to_string(),
            ParameterType::Multiselect => "multiselect".to_string(),
            ParameterType::Select => "select".to_string(),
            ParameterType::Sql => "sql".to_string(),
            ParameterType::Number => "number".to_string(),
            ParameterType::String => "string".to_string(),
            ParameterType::Boolean => "boolean".to_string(),
            ParameterType::Other(tag) => tag,
        }
    }
}

/// A user-adjustable report parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDef {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: ParameterType,
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
    /// Comma-separated option list for select/multiselect parameters
    #[serde(default)]
    pub select_values: Option<String>,
}

/// The normalized, flattened report or dashboard definition.
///
/// Produced by merging the nested `schema` sub-object of a backend report
/// record with its sibling top-level fields (siblings win on collision).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportDefinition {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub report_type: ReportType,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub responsive: bool,
    /// `"y"` flips the chart to horizontal orientation
    #[serde(default)]
    pub index_axis: Option<String>,
    #[serde(default)]
    pub x_axis: Option<Axis>,
    #[serde(default)]
    pub y_axis: Vec<Series>,
    /// Table mode only
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub data_sources: Vec<DataSourceRef>,
    /// Resolved rows per data source; absent before resolution
    #[serde(default)]
    pub data: Option<DataSet>,
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
    /// Dashboard mode only
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl ReportDefinition {
    /// Id of the primary data source, the one tables and chart axes read
    /// from by default.
    pub fn primary_data_source_id(&self) -> Option<&str> {
        self.data_sources.first().map(|ds| ds.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_type_round_trip() {
        for tag in ["table", "template", "area", "multi-axis-line", "bar", "pie"] {
            let parsed = ReportType::from(tag.to_string());
            assert_eq!(String::from(parsed), tag);
        }
    }

    #[test]
    fn chart_kind_mapping() {
        assert_eq!(ReportType::Area.chart_kind(), Some("line"));
        assert_eq!(ReportType::MultiAxisLine.chart_kind(), Some("line"));
        assert_eq!(ReportType::Table.chart_kind(), None);
        assert_eq!(ReportType::Template.chart_kind(), None);
        assert_eq!(
            ReportType::Chart("bar".to_string()).chart_kind(),
            Some("bar")
        );
    }

    #[test]
    fn report_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "reportType": "bar",
            "name": "Sales",
            "indexAxis": "y",
            "xAxis": {"field": {"dataSourceId": "ds1", "field": "month"}},
            "yAxis": [{"field": {"dataSourceId": "ds1", "field": "sales"}, "label": "Sales"}],
            "dataSources": [{"id": "ds1"}],
            "parameters": [{"name": "region", "type": "select", "selectValues": "east,west"}]
        });
        let report: ReportDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(report.report_type, ReportType::Chart("bar".to_string()));
        assert_eq!(report.index_axis.as_deref(), Some("y"));
        assert_eq!(report.primary_data_source_id(), Some("ds1"));
        assert_eq!(report.y_axis.len(), 1);
        assert_eq!(report.parameters[0].param_type, ParameterType::Select);
        assert!(report.data.is_none());
    }

    #[test]
    fn empty_object_is_a_valid_report() {
        let report: ReportDefinition = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(report.primary_data_source_id(), None);
        assert!(report.y_axis.is_empty());
        assert!(report.columns.is_empty());
    }
}
