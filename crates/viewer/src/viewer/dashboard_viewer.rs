//! Dashboard composition: one embedded report per widget.

use contracts::{ReportDefinition, ViewerError};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;
use crate::viewer::embed_viewer::{fetch_report, ReportEmbedViewer};

#[component]
pub fn DashboardViewer(
    /// Dashboard identifier
    #[prop(into)]
    report_id: String,
) -> impl IntoView {
    let dashboard = RwSignal::new(None::<ReportDefinition>);
    let error = RwSignal::new(None::<ViewerError>);

    spawn_local(async move {
        let client = match config::client() {
            Ok(client) => client,
            Err(err) => {
                error.set(Some(err));
                return;
            }
        };
        match fetch_report(client, &report_id).await {
            Ok(definition) => dashboard.set(Some(definition)),
            Err(err) => {
                log::error!("failed to load dashboard {report_id}: {err}");
                error.set(Some(err));
            }
        }
    });

    view! {
        <div
            class="rv-dashboard"
            style="width: 100%; height: 100%; display: flex; flex-wrap: wrap; justify-content: center;"
        >
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="rv-dashboard__error" style="color: #b00020;">
                                {err.to_string()}
                            </div>
                        }
                    })
            }}
            <For
                each=move || {
                    dashboard
                        .with(|d| d.as_ref().map(|d| d.widgets.clone()).unwrap_or_default())
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<_>>()
                }
                key=|(index, _)| *index
                children=move |(_, widget)| {
                    view! {
                        <ReportEmbedViewer
                            report_id=widget.report_id
                            width=widget.width
                            height=widget.height
                        />
                    }
                }
            />
        </div>
    }
}
