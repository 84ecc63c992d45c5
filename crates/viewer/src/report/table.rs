//! Table projection: report definition to a header plus row/column grid.

use contracts::{ReportDefinition, ReportType};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub title: String,
    pub width: Option<f64>,
}

/// Display grid for a table report: one header cell per column and one body
/// row per data row, each with exactly one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableGrid {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<Vec<Value>>,
}

/// Project a resolved table report into a display grid.
///
/// Only `table` reports produce a grid; missing data or an unresolvable
/// primary data source renders nothing.
pub fn build_table_grid(report: &ReportDefinition) -> Option<TableGrid> {
    if report.report_type != ReportType::Table {
        return None;
    }
    let data = report.data.as_ref()?;
    if data.is_empty() {
        return None;
    }
    let primary_id = report.primary_data_source_id()?;
    let rows = data.get(primary_id).map(Vec::as_slice).unwrap_or(&[]);

    let header = report
        .columns
        .iter()
        .map(|column| HeaderCell {
            title: column.title.clone().unwrap_or_default(),
            width: column.width,
        })
        .collect();

    let body = rows
        .iter()
        .map(|row| {
            report
                .columns
                .iter()
                .map(|column| {
                    column
                        .field
                        .as_ref()
                        .and_then(|field| row.get(&field.field).cloned())
                        .unwrap_or(Value::Null)
                })
                .collect()
        })
        .collect();

    Some(TableGrid {
        header,
        rows: body,
    })
}

/// Cell display text: scalars verbatim, null as empty, structured values as
/// compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn orders_table() -> ReportDefinition {
        serde_json::from_value(json!({
            "reportType": "table",
            "columns": [
                {"title": "Month", "width": 120, "field": {"dataSourceId": "ds1", "field": "month"}},
                {"title": "Sales", "width": 80, "field": {"dataSourceId": "ds1", "field": "sales"}}
            ],
            "dataSources": [{"id": "ds1"}],
            "data": {"ds1": [
                {"month": "Jan", "sales": 10},
                {"month": "Feb", "sales": 20},
                {"month": "Mar", "sales": 30}
            ]}
        }))
        .unwrap()
    }

    #[test]
    fn grid_is_rows_by_columns() {
        let grid = build_table_grid(&orders_table()).unwrap();
        assert_eq!(grid.header.len(), 2);
        assert_eq!(grid.header[0].title, "Month");
        assert_eq!(grid.header[0].width, Some(120.0));
        assert_eq!(grid.rows.len(), 3);
        for row in &grid.rows {
            assert_eq!(row.len(), 2);
        }
        assert_eq!(grid.rows[1], vec![json!("Feb"), json!(20)]);
    }

    #[test]
    fn only_table_reports_build_grids() {
        let mut chart = orders_table();
        chart.report_type = ReportType::Chart("bar".to_string());
        assert!(build_table_grid(&chart).is_none());
    }

    #[test]
    fn missing_data_renders_nothing() {
        let mut unresolved = orders_table();
        unresolved.data = None;
        assert!(build_table_grid(&unresolved).is_none());

        let mut empty = orders_table();
        empty.data = Some(Default::default());
        assert!(build_table_grid(&empty).is_none());

        let mut no_source = orders_table();
        no_source.data_sources.clear();
        assert!(build_table_grid(&no_source).is_none());
    }

    #[test]
    fn absent_primary_rows_give_empty_body() {
        let mut report = orders_table();
        report.data_sources[0].id = "other".to_string();
        let grid = build_table_grid(&report).unwrap();
        assert_eq!(grid.header.len(), 2);
        assert!(grid.rows.is_empty());
    }

    #[test]
    fn cell_text_formats_scalars() {
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(12.5)), "12.5");
        assert_eq!(cell_text(&json!("Jan")), "Jan");
        assert_eq!(cell_text(&json!({"a": 1})), "{\"a\":1}");
    }
}
