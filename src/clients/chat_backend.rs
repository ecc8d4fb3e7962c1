use async_trait::async_trait;

use crate::error::AnalysisError;

/// 对话补全后端
///
/// 一次调用对应一次网络请求，实现方不得自行重试。
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// 发送系统消息和用户消息，返回第一条补全的文本
    async fn complete(&self, system_message: &str, user_message: &str)
        -> Result<String, AnalysisError>;

    /// 用于日志展示的模型名称
    fn model_name(&self) -> &str;
}
