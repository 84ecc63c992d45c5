//! Error taxonomy surfaced to the embedding application.

use thiserror::Error;

/// Everything that can go wrong between mounting a viewer and rendering it.
///
/// Absent optional schema fields (no y-axis, no columns) are not errors; the
/// projections render nothing for those. Errors are reserved for transport
/// failures, unusable schema records, and failed data-source execution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewerError {
    /// Transport failure or non-success status while fetching a report record
    #[error("failed to fetch report: {0}")]
    FetchFailed(String),

    /// The report record could not be normalized into a report definition
    #[error("invalid report schema: {0}")]
    SchemaInvalid(String),

    /// The batched data-source execution call failed
    #[error("data source resolution failed: {0}")]
    DataSourceResolutionFailed(String),

    /// The library was used before `init` installed a configuration
    #[error("viewer is not initialized; call init() first")]
    NotConfigured,

    /// `init` was called without an api key
    #[error("invalid viewer configuration: an api key is required")]
    MissingApiKey,
}
