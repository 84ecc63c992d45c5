//! Top-level viewer: dispatches to a dashboard or a single report.

use contracts::ViewerError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;
use crate::report::normalize::{normalize_published, PublishedEnvelope};
use crate::viewer::dashboard_viewer::DashboardViewer;
use crate::viewer::embed_viewer::ReportEmbedViewer;

#[component]
pub fn ReportViewer(
    /// `"dashboard"` or `"report"`; when `None` the published envelope's
    /// type decides
    viewer_type: Option<String>,
    /// Published report or dashboard identifier
    #[prop(into)]
    report_id: String,
) -> impl IntoView {
    let envelope = RwSignal::new(None::<PublishedEnvelope>);
    let error = RwSignal::new(None::<ViewerError>);
    let report_id = StoredValue::new(report_id);

    spawn_local(async move {
        let client = match config::client() {
            Ok(client) => client,
            Err(err) => {
                error.set(Some(err));
                return;
            }
        };
        let id = report_id.get_value();
        let loaded = match client.get_published(&id).await {
            Ok(response) => normalize_published(&response),
            Err(err) => Err(err),
        };
        match loaded {
            Ok(published) => envelope.set(Some(published)),
            Err(err) => {
                log::error!("failed to load published report {id}: {err}");
                error.set(Some(err));
            }
        }
    });

    let resolved_type = move || {
        viewer_type
            .clone()
            .or_else(|| envelope.with(|e| e.as_ref().and_then(|e| e.viewer_type.clone())))
    };

    view! {
        <div class="rv-viewer">
            <h1 class="rv-viewer__id">
                {move || {
                    envelope.with(|e| e.as_ref().and_then(|e| e.report.id.clone()).unwrap_or_default())
                }}
            </h1>
            <p class="rv-viewer__description">
                {move || envelope.with(|e| e.as_ref().and_then(|e| e.report.description.clone()))}
            </p>
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="rv-viewer__error" style="color: #b00020;">
                                {err.to_string()}
                            </div>
                        }
                    })
            }}
            {move || match resolved_type().as_deref() {
                Some("dashboard") => {
                    view! { <DashboardViewer report_id=report_id.get_value() /> }.into_any()
                }
                Some("report") => {
                    view! {
                        <ReportEmbedViewer
                            report_id=report_id.get_value()
                            width=None
                            height=None
                        />
                    }
                    .into_any()
                }
                _ => view! {}.into_any(),
            }}
        </div>
    }
}
