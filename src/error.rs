use async_openai::error::OpenAIError;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 不支持的报告格式
    #[error("不支持的报告格式 ({path})，只接受 .html / .htm 文件")]
    UnsupportedExtension { path: String },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// CSS 选择器无效
    #[error("无效的 CSS 选择器 '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// LLM 分析错误
///
/// 所有变体都是终止性的：一次点击对应一次请求，不做重试。
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// 未配置 API 密钥
    #[error("authentication failed: no API key configured (set OPENAI_API_KEY)")]
    MissingApiKey,
    /// 构建请求失败
    #[error("failed to build chat request: {0}")]
    RequestBuild(#[source] OpenAIError),
    /// API 调用失败
    #[error("{model} request failed: {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: OpenAIError,
    },
    /// 返回结果为空
    #[error("{model} returned no completions")]
    EmptyResponse { model: String },
    /// 返回内容为空
    #[error("{model} returned a completion without message content")]
    EmptyContent { model: String },
    /// 其他后端错误（自定义后端使用）
    #[error("{0}")]
    Backend(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return AppError::File(FileError::NotFound { path: path.into() });
        }
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建选择器无效错误
    pub fn invalid_selector(selector: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Config(ConfigError::InvalidSelector {
            selector: selector.into(),
            reason: reason.to_string(),
        })
    }
}

impl AnalysisError {
    /// 创建 LLM API 调用错误
    pub fn api_call_failed(model: impl Into<String>, source: OpenAIError) -> Self {
        AnalysisError::ApiCallFailed {
            model: model.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AppError::file_read_failed("report.html", io);
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
        assert_eq!(err.to_string(), "文件错误: 文件不存在: report.html");
    }

    #[test]
    fn test_backend_error_displays_verbatim() {
        let err = AnalysisError::Backend("quota exceeded".to_string());
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
