//! 报告分析流程 - 流程层
//!
//! 核心职责：定义"一份报告"的完整处理流程
//!
//! 流程顺序：
//! 1. 读取 HTML → 解析用例 → 拼接失败日志（加载时总会执行）
//! 2. 调用 LLM 总结（只有用户明确要求时才执行，每次都会产生费用）

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{load_report_html, AnalysisResult};
use crate::services::{ReportParser, Summarizer};
use crate::utils::logging::truncate_text;
use crate::workflow::report_session::ReportSession;

/// 报告分析流程
///
/// - 编排解析和总结两个阶段
/// - 不持有任何报告状态，每次加载都生成新的 `ReportSession`
pub struct AnalysisFlow {
    parser: ReportParser,
    summarizer: Summarizer,
    max_digest_len: usize,
    verbose_logging: bool,
}

impl AnalysisFlow {
    /// 创建新的报告分析流程
    pub fn new(config: &Config) -> Result<Self> {
        let flow = Self::with_summarizer(config, Summarizer::new(config))?;
        Ok(flow)
    }

    /// 使用指定的总结服务创建
    pub fn with_summarizer(config: &Config, summarizer: Summarizer) -> crate::AppResult<Self> {
        Ok(Self {
            parser: ReportParser::new(&config.parser, config.max_displayed_failures)?,
            summarizer,
            max_digest_len: config.max_digest_len,
            verbose_logging: config.verbose_logging,
        })
    }

    /// 加载并解析报告文件
    pub async fn load(&self, report_path: &Path) -> Result<ReportSession> {
        info!("📄 正在加载报告: {}", report_path.display());

        let html = load_report_html(report_path)
            .await
            .with_context(|| format!("无法加载报告: {}", report_path.display()))?;

        Ok(self.load_html(report_path.display().to_string(), &html))
    }

    /// 解析已读入内存的 HTML
    pub fn load_html(&self, source: impl Into<String>, html: &str) -> ReportSession {
        let session = ReportSession::from_html(source, html, &self.parser, self.max_digest_len);

        info!("✓ 解析完成 {}", session);
        if session.digest.is_truncated() {
            info!(
                "✂️ 失败日志 {} 字符，已截断为 {} 字符",
                session.digest.original_len(),
                session.digest.len()
            );
        }
        if self.verbose_logging {
            debug!("失败日志预览: {}", truncate_text(session.digest.as_str(), 200));
        }

        session
    }

    /// 调用 LLM 分析失败日志
    ///
    /// 失败不会向上抛出，而是以 [`AnalysisResult::Failure`] 返回。
    pub async fn analyze(&self, session: &ReportSession) -> AnalysisResult {
        info!("🔍 正在调用 AI 分析 {}...", session.source);
        self.summarizer.analyze(&session.digest).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::error::{AppError, ConfigError};

    #[test]
    fn test_new_reports_invalid_selector() {
        let config = Config {
            parser: ParserConfig {
                test_selector: "div[".to_string(),
                ..ParserConfig::default()
            },
            ..Config::default()
        };

        let err = AnalysisFlow::new(&config).err().expect("无效选择器应当报错");
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Config(ConfigError::InvalidSelector { .. }))
        ));
    }

    #[test]
    fn test_new_with_default_config() {
        let flow = AnalysisFlow::new(&Config::default()).unwrap();
        let session = flow.load_html("inline", r#"<div class="test failed"><h2>x</h2></div>"#);
        assert_eq!(session.report.failed_count, 1);
        assert_eq!(session.digest.as_str(), "x");
    }
}
