//! 应用入口 - 编排层
//!
//! 一次运行只处理一份报告；AI 分析只有在 `analyze` 打开时才会发起，
//! 且只发一次请求。

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::render::{render_json, render_markdown, OutputFormat};
use crate::utils::logging::{log_analysis_result, log_startup};
use crate::workflow::AnalysisFlow;

/// 单次运行参数
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub report_path: PathBuf,
    /// 是否调用 LLM 分析（会产生费用）
    pub analyze: bool,
    pub format: OutputFormat,
}

/// 应用主结构
pub struct App {
    config: Config,
    flow: AnalysisFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);
        let flow = AnalysisFlow::new(&config)?;
        Ok(Self { config, flow })
    }

    /// 使用已构建的流程初始化（测试中替换 LLM 后端）
    pub fn with_flow(config: Config, flow: AnalysisFlow) -> Self {
        Self { config, flow }
    }

    /// 运行应用主逻辑，返回渲染后的输出
    pub async fn run(&self, options: &RunOptions) -> Result<String> {
        let session = self.flow.load(&options.report_path).await?;

        let analysis = if options.analyze {
            let result = self.flow.analyze(&session).await;
            log_analysis_result(&result);
            Some(result)
        } else {
            if session.report.has_failures() {
                info!("💡 使用 --analyze 让 AI 分析失败原因");
            }
            None
        };

        let limit = self.config.max_displayed_failures;
        let output = match options.format {
            OutputFormat::Markdown => render_markdown(&session, analysis.as_ref(), limit),
            OutputFormat::Json => render_json(&session, analysis.as_ref(), limit)?,
        };

        Ok(output)
    }
}
