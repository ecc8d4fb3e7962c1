//! JSON 渲染

use serde::Serialize;

use crate::models::{AnalysisResult, ParsedReport};
use crate::workflow::ReportSession;

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    total_count: usize,
    passed_count: usize,
    failed_count: usize,
    failed_tests: Vec<&'a str>,
    digest_chars: usize,
    digest_truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a AnalysisResult>,
}

/// 渲染为格式化的 JSON 字符串
pub fn render_json(
    session: &ReportSession,
    analysis: Option<&AnalysisResult>,
    max_displayed: usize,
) -> serde_json::Result<String> {
    let ParsedReport {
        total_count,
        passed_count,
        failed_count,
        ..
    } = session.report;

    let doc = JsonReport {
        source: &session.source,
        total_count,
        passed_count,
        failed_count,
        failed_tests: session.report.failed_names(max_displayed),
        digest_chars: session.digest.len(),
        digest_truncated: session.digest.is_truncated(),
        analysis,
    };

    serde_json::to_string_pretty(&doc)
}
