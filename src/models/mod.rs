pub mod analysis;
pub mod loaders;
pub mod report;
pub mod test_case;

pub use analysis::AnalysisResult;
pub use loaders::load_report_html;
pub use report::ParsedReport;
pub use test_case::{TestCase, TestStatus, UNKNOWN_TEST_NAME};
