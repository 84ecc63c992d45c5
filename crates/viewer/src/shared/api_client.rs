//! HTTP client for the reporting backend.
//!
//! Thin wrapper over `gloo_net` carrying the bearer token from the installed
//! configuration. Responses are JSON throughout.

use contracts::{DataSet, ExecDataSourcesRequest, ParamValues, ViewerError};
use gloo_net::http::Request;

use crate::config::ViewerConfig;

pub struct ApiClient {
    config: ViewerConfig,
}

impl ApiClient {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.bearer_token())
    }

    /// Fetch a report record by id (`GET /reports/{id}`).
    ///
    /// Returns the raw response envelope; the caller normalizes it into a
    /// `ReportDefinition`.
    pub async fn get_report(&self, report_id: &str) -> Result<serde_json::Value, ViewerError> {
        let url = self.url(&format!("/reports/{}", urlencoding::encode(report_id)));
        self.get_json(&url).await.map_err(ViewerError::FetchFailed)
    }

    /// Fetch a published report or dashboard envelope
    /// (`GET /reports/published?id={id}`), which also carries the viewer
    /// `type` discriminator.
    pub async fn get_published(&self, report_id: &str) -> Result<serde_json::Value, ViewerError> {
        let url = self.url(&format!(
            "/reports/published?id={}",
            urlencoding::encode(report_id)
        ));
        self.get_json(&url).await.map_err(ViewerError::FetchFailed)
    }

    /// Execute every referenced data source in one batched call
    /// (`POST /datasource/exec`). An empty id list is still sent.
    pub async fn exec_data_sources(
        &self,
        ids: Vec<String>,
        params: ParamValues,
    ) -> Result<DataSet, ViewerError> {
        let url = self.url("/datasource/exec");
        let body = serde_json::to_string(&ExecDataSourcesRequest::new(ids, params))
            .map_err(|e| ViewerError::DataSourceResolutionFailed(format!("serialize: {e}")))?;

        let response = Request::post(&url)
            .header("Authorization", &self.bearer())
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ViewerError::DataSourceResolutionFailed(format!("request: {e}")))?
            .send()
            .await
            .map_err(|e| ViewerError::DataSourceResolutionFailed(format!("request failed: {e}")))?;

        if !response.ok() {
            return Err(ViewerError::DataSourceResolutionFailed(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ViewerError::DataSourceResolutionFailed(format!("parse: {e}")))
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value, String> {
        let response = Request::get(url)
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("failed to parse response: {e}"))
    }
}
