//! Markdown 渲染

use crate::models::AnalysisResult;
use crate::workflow::ReportSession;

/// 渲染为 Markdown 文本
///
/// 包含统计、最多 `max_displayed` 个失败用例名称，以及 AI 分析结果（如有）。
pub fn render_markdown(
    session: &ReportSession,
    analysis: Option<&AnalysisResult>,
    max_displayed: usize,
) -> String {
    let report = &session.report;
    let mut out = String::new();

    out.push_str("## 🧪 Test Summary\n\n");
    out.push_str(&format!("- **Total tests**: {}\n", report.total_count));
    out.push_str(&format!("- ✅ Passed: {}\n", report.passed_count));
    out.push_str(&format!("- ❌ Failed: {}\n", report.failed_count));

    if report.has_failures() {
        out.push_str("\n## ❌ Failed Test Cases\n\n");
        for (i, name) in report.failed_names(max_displayed).iter().enumerate() {
            out.push_str(&format!("**{}. {}**\n", i + 1, name));
        }
    }

    match analysis {
        Some(AnalysisResult::Success(summary)) => {
            out.push_str("\n## 🧠 AI Insights\n\n");
            out.push_str(summary);
            out.push('\n');
        }
        Some(AnalysisResult::Failure(message)) => {
            out.push_str(&format!("\n> ❌ {}\n", message));
        }
        None => {}
    }

    out
}
