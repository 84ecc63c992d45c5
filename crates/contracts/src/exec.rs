//! Wire shapes for batched data-source execution (`POST /datasource/exec`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::params::ParamValues;

/// One result row: column name to scalar value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Resolved data, keyed by data-source id.
pub type DataSet = HashMap<String, Vec<Row>>;

/// Request body for executing every data source a report references in one
/// batched call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecDataSourcesRequest {
    /// Data-source ids to execute; an empty list is still a valid request
    pub ids: Vec<String>,
    /// Always true: the response maps each id to its rows
    pub multiple: bool,
    /// Current per-run parameter values
    pub params: ParamValues,
}

impl ExecDataSourcesRequest {
    pub fn new(ids: Vec<String>, params: ParamValues) -> Self {
        Self {
            ids,
            multiple: true,
            params,
        }
    }
}
