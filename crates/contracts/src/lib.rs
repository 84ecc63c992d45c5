//! Shared contracts between the embeddable viewer and the reporting backend.
//!
//! Everything here is a plain serde DTO: report/dashboard schema definitions,
//! data-source execution shapes, accumulated parameter values, and the error
//! taxonomy surfaced to the embedding application.

pub mod error;
pub mod exec;
pub mod params;
pub mod report;

pub use error::ViewerError;
pub use exec::{DataSet, ExecDataSourcesRequest, Row};
pub use params::ParamValues;
pub use report::{
    Axis, ColumnDef, DataSourceRef, FieldRef, ParameterDef, ParameterType, ReportDefinition,
    ReportType, Series, Widget,
};
