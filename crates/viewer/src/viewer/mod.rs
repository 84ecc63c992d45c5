pub mod dashboard_viewer;
pub mod embed_viewer;
pub mod param_control;
pub mod report_viewer;

pub use dashboard_viewer::DashboardViewer;
pub use embed_viewer::ReportEmbedViewer;
pub use param_control::ParamControl;
pub use report_viewer::ReportViewer;
