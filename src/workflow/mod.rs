pub mod analysis_flow;
pub mod report_session;

pub use analysis_flow::AnalysisFlow;
pub use report_session::ReportSession;
