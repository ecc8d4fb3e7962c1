//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::AnalysisResult;

/// 初始化 tracing 日志
///
/// 日志写到 stderr，标准输出只留给渲染结果。
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 测试报告分析 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🤖 模型: {} (temperature {})", config.llm_model_name, config.llm_temperature);
    info!("✂️ 失败日志上限: {} 字符", config.max_digest_len);
    if config.llm_api_key.is_none() {
        info!("⚠️ 未配置 OPENAI_API_KEY，AI 分析将返回认证错误");
    }
    info!("{}", "=".repeat(60));
}

/// 记录 AI 分析结果
pub fn log_analysis_result(result: &AnalysisResult) {
    info!("\n{}", "─".repeat(60));
    match result {
        AnalysisResult::Success(summary) => {
            info!("✅ AI 分析成功: {}", truncate_text(summary, 80));
        }
        AnalysisResult::Failure(message) => {
            info!("❌ AI 分析失败: {}", message);
        }
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_text("超时错误发生", 2), "超时...");
    }
}
