//! Chart projection: report definition to Chart.js configuration, plus the
//! canvas-bound Chart.js handle.
//!
//! `build_chart_config` is pure and host-testable; `ChartHandle` owns the JS
//! chart instance and enforces destroy-then-rebuild on the single canvas a
//! viewer instance renders into.

use contracts::ReportDefinition;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::extract::extract_column;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<Value>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub data: Vec<Value>,
    /// Area fill baseline, always "origin"
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<ChartTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTitle {
    pub display: bool,
    pub text: String,
}

/// Project a resolved report definition into a Chart.js configuration.
///
/// Returns `None`, rendering nothing, for table/template reports and for any
/// report missing the pieces a chart needs: resolved data, a primary data
/// source, an x-axis, or at least one y-axis series. Those are valid
/// configurations, not errors.
pub fn build_chart_config(report: &ReportDefinition) -> Option<ChartConfig> {
    let kind = report.report_type.chart_kind()?;

    let data = report.data.as_ref()?;
    if data.is_empty() {
        return None;
    }
    report.primary_data_source_id()?;

    let x_axis = report.x_axis.as_ref()?;
    if report.y_axis.is_empty() {
        return None;
    }

    let labels = extract_column(report, x_axis.field.as_ref());
    let datasets = report
        .y_axis
        .iter()
        .map(|series| ChartDataset {
            data: extract_column(report, series.field.as_ref()),
            fill: "origin".to_string(),
            label: series.label.clone(),
            border_color: series.border_color.clone(),
            border_width: series.border_width,
            background_color: series.background_color.clone(),
        })
        .collect();

    Some(ChartConfig {
        kind: kind.to_string(),
        data: ChartData { labels, datasets },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            title: report.title.clone().map(|text| ChartTitle {
                display: true,
                text,
            }),
            index_axis: report
                .index_axis
                .as_deref()
                .filter(|axis| *axis == "y")
                .map(str::to_string),
        },
    })
}

#[wasm_bindgen]
extern "C" {
    /// The global `Chart` constructor; the embedding page loads Chart.js.
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartJs);
}

/// Owns the Chart.js instance bound to one viewer's canvas.
#[derive(Default)]
pub struct ChartHandle {
    instance: Option<ChartJs>,
}

impl ChartHandle {
    /// Destroy the prior chart and draw `config` onto `canvas`.
    pub fn render(
        &mut self,
        canvas: &web_sys::HtmlCanvasElement,
        config: &ChartConfig,
    ) -> Result<(), JsValue> {
        self.clear();
        // Plain JS objects, not Maps: Chart.js walks the config structurally
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_config = config
            .serialize(&serializer)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.instance = Some(ChartJs::new(canvas, &js_config)?);
        Ok(())
    }

    /// Destroy any chart currently bound to the canvas.
    pub fn clear(&mut self) {
        if let Some(chart) = self.instance.take() {
            chart.destroy();
        }
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.clear();
    }
}
