use serde::Serialize;

/// 一次 AI 分析的结果
///
/// 每次分析独立生成，不保留历史。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum AnalysisResult {
    /// LLM 返回的总结文本（Markdown）
    Success(String),
    /// 错误描述，包含底层错误信息
    Failure(String),
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            AnalysisResult::Success(text) | AnalysisResult::Failure(text) => text,
        }
    }
}
