//! 失败分析服务 - 业务能力层
//!
//! 只负责"把失败日志交给 LLM 总结"能力，不关心报告从哪里来
//!
//! 每次调用只发一次请求，出错直接返回，不重试。

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::clients::{ChatBackend, OpenAiChatClient};
use crate::config::Config;
use crate::error::AnalysisError;
use crate::models::AnalysisResult;
use crate::services::digest_builder::FailureDigest;

/// 系统消息
pub const SYSTEM_MESSAGE: &str = "You are a helpful QA assistant.";

/// 失败分析服务
pub struct Summarizer {
    backend: Arc<dyn ChatBackend>,
}

impl Summarizer {
    /// 使用 OpenAI 兼容客户端创建
    pub fn new(config: &Config) -> Self {
        Self::with_backend(Arc::new(OpenAiChatClient::new(config)))
    }

    /// 使用自定义后端创建
    pub fn with_backend(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// 请求 LLM 生成失败分析
    ///
    /// 空日志也会正常发送，提示词中的日志部分为空。
    pub async fn summarize(&self, digest: &FailureDigest) -> Result<String, AnalysisError> {
        let prompt = build_prompt(digest.as_str());

        debug!(
            "发送分析请求，模型: {}，日志 {} 字符",
            self.backend.model_name(),
            digest.len()
        );

        self.backend.complete(SYSTEM_MESSAGE, &prompt).await
    }

    /// 同 [`Summarizer::summarize`]，但把错误收敛为 [`AnalysisResult::Failure`]
    pub async fn analyze(&self, digest: &FailureDigest) -> AnalysisResult {
        match self.summarize(digest).await {
            Ok(summary) => {
                info!("🧠 AI 分析完成，{} 字符", summary.chars().count());
                AnalysisResult::Success(summary)
            }
            Err(e) => {
                warn!("❌ AI 分析失败: {}", e);
                AnalysisResult::Failure(format!("OpenAI API Error: {e}"))
            }
        }
    }
}

/// 构建分析提示词
pub fn build_prompt(logs: &str) -> String {
    format!(
        r#"
You are a QA assistant. Analyze the following test automation logs and generate:

1. Summary of common failures
2. Root causes
3. Suggestions for fixing
4. Any test pattern anomalies

Test Logs:
{logs}
"#
    )
}
