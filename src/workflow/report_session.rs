//! 报告会话
//!
//! 封装"当前加载的是哪份报告"这一信息：解析结果和失败日志。
//! 加载新报告时整体替换，不保留上一份的任何状态。

use std::fmt::Display;

use crate::models::ParsedReport;
use crate::services::{build_digest, FailureDigest, ReportParser};

/// 单份报告的处理上下文
#[derive(Debug, Clone)]
pub struct ReportSession {
    /// 报告来源（文件路径），仅用于日志显示
    pub source: String,
    pub report: ParsedReport,
    pub digest: FailureDigest,
}

impl ReportSession {
    /// 解析 HTML 并构建失败日志
    pub fn from_html(
        source: impl Into<String>,
        html: &str,
        parser: &ReportParser,
        max_digest_len: usize,
    ) -> Self {
        let report = parser.parse(html);
        let digest = build_digest(&report.test_cases, max_digest_len);

        Self {
            source: source.into(),
            report,
            digest,
        }
    }
}

impl Display for ReportSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[报告 {} 共{} 通过{} 失败{}]",
            self.source,
            self.report.total_count,
            self.report.passed_count,
            self.report.failed_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;

    #[test]
    fn test_session_builds_digest_from_failures() {
        let parser = ReportParser::new(&ParserConfig::default(), 10).unwrap();
        let html = r#"
            <div class="test failed"><h2>a</h2></div>
            <div class="test"><h2>b</h2></div>
            <div class="test failed"><h2>c</h2></div>"#;

        let session = ReportSession::from_html("inline", html, &parser, 6000);
        assert_eq!(session.digest.as_str(), "a\nc");
        assert_eq!(session.to_string(), "[报告 inline 共3 通过1 失败2]");
    }
}
