//! The embedded report viewer: fetch, normalize, resolve, project.
//!
//! One instance owns one report definition and one render target. Parameter
//! changes re-resolve the data sources behind a request guard and rebuild
//! chart and table alike from the committed data.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::{ParamValues, ReportDefinition, ReportType, ViewerError};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use uuid::Uuid;
use wasm_bindgen::JsCast;

use crate::config;
use crate::report::chart::{build_chart_config, ChartHandle};
use crate::report::normalize::{normalize_report, record_from_report_response};
use crate::report::state::{RequestGuard, ViewerPhase};
use crate::report::table::{build_table_grid, cell_text, TableGrid};
use crate::shared::api_client::ApiClient;
use crate::viewer::param_control::ParamControl;

/// Fetch and normalize a report definition by id.
pub(crate) async fn fetch_report(
    client: &ApiClient,
    report_id: &str,
) -> Result<ReportDefinition, ViewerError> {
    let envelope = client.get_report(report_id).await?;
    let record = record_from_report_response(&envelope)?;
    normalize_report(record)
}

/// Execute the report's data sources and commit the rows onto the
/// definition, unless a newer resolution has started in the meantime.
async fn resolve_data_sources(
    client: &ApiClient,
    report: RwSignal<Option<ReportDefinition>>,
    phase: RwSignal<ViewerPhase>,
    guard: RequestGuard,
    params: ParamValues,
) {
    let Some(definition) = report.get_untracked() else {
        return;
    };
    let ids: Vec<String> = definition
        .data_sources
        .iter()
        .map(|source| source.id.clone())
        .collect();

    let token = guard.issue();
    phase.set(ViewerPhase::Resolving);

    match client.exec_data_sources(ids, params).await {
        Ok(data) => {
            if !guard.is_current(token) {
                log!("discarding stale data-source resolution");
                return;
            }
            report.update(|current| {
                if let Some(current) = current {
                    current.data = Some(data);
                }
            });
            phase.set(ViewerPhase::Ready);
        }
        Err(err) => {
            if !guard.is_current(token) {
                return;
            }
            log::error!("data-source resolution failed: {err}");
            phase.set(ViewerPhase::Failed(err));
        }
    }
}

#[component]
pub fn ReportEmbedViewer(
    /// Report identifier
    #[prop(into)]
    report_id: String,
    /// Widget display width, in pixels
    width: Option<f64>,
    /// Widget display height, in pixels
    height: Option<f64>,
) -> impl IntoView {
    let report = RwSignal::new(None::<ReportDefinition>);
    let phase = RwSignal::new(ViewerPhase::Idle);
    let param_values = RwSignal::new(ParamValues::new());
    let guard = RequestGuard::new();
    let chart = Rc::new(RefCell::new(ChartHandle::default()));

    // one canvas per instance, unique even when a report is embedded twice
    let canvas_id = StoredValue::new(format!("rv-canvas-{}", Uuid::new_v4()));

    // mount: fetch + normalize the schema, then run the first resolution
    {
        let guard = guard.clone();
        let report_id = report_id.clone();
        spawn_local(async move {
            phase.set(ViewerPhase::Loading);
            let client = match config::client() {
                Ok(client) => client,
                Err(err) => {
                    log::error!("{err}");
                    phase.set(ViewerPhase::Failed(err));
                    return;
                }
            };
            match fetch_report(client, &report_id).await {
                Ok(definition) => {
                    report.set(Some(definition));
                    resolve_data_sources(client, report, phase, guard, ParamValues::new()).await;
                }
                Err(err) => {
                    log::error!("failed to load report {report_id}: {err}");
                    phase.set(ViewerPhase::Failed(err));
                }
            }
        });
    }

    let on_param_change = {
        let guard = guard.clone();
        Callback::new(move |(name, value): (String, Value)| {
            param_values.update(|values| values.merge(name, value));
            let params = param_values.get_untracked();
            let guard = guard.clone();
            spawn_local(async move {
                match config::client() {
                    Ok(client) => {
                        resolve_data_sources(client, report, phase, guard, params).await;
                    }
                    Err(err) => phase.set(ViewerPhase::Failed(err)),
                }
            });
        })
    };

    // redraw or clear the chart after every committed resolution
    {
        let chart = Rc::clone(&chart);
        Effect::new(move |_| {
            let chart_config = report.with(|r| r.as_ref().and_then(build_chart_config));
            let mut handle = chart.borrow_mut();
            let Some(chart_config) = chart_config else {
                handle.clear();
                return;
            };
            let canvas = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&canvas_id.get_value()))
                .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok());
            let Some(canvas) = canvas else {
                return;
            };
            if let Err(err) = handle.render(&canvas, &chart_config) {
                log::error!("chart render failed: {err:?}");
            }
        });
    }

    let is_table = move || {
        report.with(|r| {
            matches!(
                r.as_ref().map(|r| &r.report_type),
                Some(ReportType::Table)
            )
        })
    };

    let mut container_style =
        String::from("padding: 10px; background: white; margin: 10px;");
    if let Some(width) = width {
        container_style.push_str(&format!(" width: {width}px;"));
    }
    if let Some(height) = height {
        container_style.push_str(&format!(" height: {height}px;"));
    }

    view! {
        <div class="rv-embed" style=container_style>
            <h3 class="rv-embed__name">
                {move || report.with(|r| r.as_ref().and_then(|r| r.name.clone()))}
            </h3>
            <div
                class="rv-embed__params"
                style="display: flex; align-items: center; justify-content: center; gap: 10px;"
            >
                <For
                    each=move || {
                        report.with(|r| r.as_ref().map(|r| r.parameters.clone()).unwrap_or_default())
                    }
                    key=|param| param.name.clone()
                    children=move |param| {
                        view! { <ParamControl param=param on_change=on_param_change /> }
                    }
                />
            </div>
            {move || {
                phase
                    .get()
                    .is_busy()
                    .then(|| view! { <div class="rv-embed__loading">"Loading..."</div> })
            }}
            {move || {
                match phase.get() {
                    ViewerPhase::Failed(err) => {
                        Some(
                            view! {
                                <div class="rv-embed__error" style="color: #b00020;">
                                    {err.to_string()}
                                </div>
                            },
                        )
                    }
                    _ => None,
                }
            }}
            <div class="rv-embed__content">
                {move || {
                    if is_table() {
                        match report.with(|r| r.as_ref().and_then(build_table_grid)) {
                            Some(grid) => render_table(grid).into_any(),
                            None => view! {}.into_any(),
                        }
                    } else {
                        view! { <canvas id=canvas_id.get_value()></canvas> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn cell_style(width: Option<f64>) -> String {
    let mut style =
        String::from("flex: 1; text-align: center; border: solid 1px #eee; padding: 5px;");
    if let Some(width) = width {
        style.push_str(&format!(" width: {width}px;"));
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_dimensions_are_passed_through_as_options() {
        let props = ReportEmbedViewerProps::builder()
            .report_id("r-1")
            .width(Some(320.0))
            .height(None)
            .build();
        assert_eq!(props.report_id, "r-1");
        assert_eq!(props.width, Some(320.0));
        assert_eq!(props.height, None);
    }

    #[test]
    fn dimensions_extend_the_container_style() {
        let style = cell_style(Some(120.0));
        assert!(style.contains("width: 120px;"));
        assert!(!cell_style(None).contains("width:"));
    }
}

fn render_table(grid: TableGrid) -> impl IntoView {
    let widths: Vec<Option<f64>> = grid.header.iter().map(|cell| cell.width).collect();

    view! {
        <div class="rv-table">
            <div class="rv-table__header" style="display: flex; font-weight: bold;">
                {grid
                    .header
                    .into_iter()
                    .map(|cell| {
                        view! {
                            <div class="rv-table__cell" style=cell_style(
                                cell.width,
                            )>{cell.title}</div>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="rv-table__body"
                style="display: flex; flex-direction: column; overflow-y: auto;"
            >
                {grid
                    .rows
                    .into_iter()
                    .map(|row| {
                        let widths = widths.clone();
                        view! {
                            <div class="rv-table__row" style="display: flex;">
                                {row
                                    .into_iter()
                                    .zip(widths)
                                    .map(|(value, width)| {
                                        view! {
                                            <div class="rv-table__cell" style=cell_style(
                                                width,
                                            )>{cell_text(&value)}</div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
