use crate::error::{AppError, AppResult, ConfigError, FileError};
use serde::Deserialize;
use std::path::Path;

/// 失败用例拼接文本的最大字符数
pub const MAX_DIGEST_LEN: usize = 6000;

/// 展示失败用例名称的最大条数
pub const MAX_DISPLAYED_FAILURES: usize = 10;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    /// 缺失时不会在启动阶段报错，而是在调用时返回认证错误
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
    // --- 报告处理配置 ---
    /// 发送给 LLM 的失败日志最大字符数
    pub max_digest_len: usize,
    /// 最多展示多少个失败用例名称
    pub max_displayed_failures: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// HTML 选择器配置
    pub parser: ParserConfig,
}

/// HTML 报告解析配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// 测试用例容器选择器
    pub test_selector: String,
    /// 标记失败用例的 class
    pub failed_class: String,
    /// 名称选择器，按顺序尝试（先标题，后行内标签）
    pub name_selectors: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            test_selector: "div.test".to_string(),
            failed_class: "failed".to_string(),
            name_selectors: vec!["h2".to_string(), "span".to_string()],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o".to_string(),
            llm_temperature: 0.0,
            max_digest_len: MAX_DIGEST_LEN,
            max_displayed_failures: MAX_DISPLAYED_FAILURES,
            verbose_logging: false,
            parser: ParserConfig::default(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，环境变量优先级更高
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let path_display = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::file_read_failed(&path_display, e))?;

        let config: Config = toml::from_str(&content).map_err(|source| {
            AppError::File(FileError::TomlParseFailed {
                path: path_display,
                source,
            })
        })?;

        config.with_env_overrides()
    }

    fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            llm_api_key: env_string("OPENAI_API_KEY")
                .filter(|key| !key.trim().is_empty())
                .or(self.llm_api_key),
            llm_api_base_url: env_string("LLM_API_BASE_URL").unwrap_or(self.llm_api_base_url),
            llm_model_name: env_string("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
            llm_temperature: env_parsed("LLM_TEMPERATURE", "f32")?
                .unwrap_or(self.llm_temperature),
            max_digest_len: env_parsed("MAX_DIGEST_LEN", "usize")?.unwrap_or(self.max_digest_len),
            max_displayed_failures: env_parsed("MAX_DISPLAYED_FAILURES", "usize")?
                .unwrap_or(self.max_displayed_failures),
            verbose_logging: env_parsed("VERBOSE_LOGGING", "bool")?
                .unwrap_or(self.verbose_logging),
            parser: self.parser,
        })
    }
}

fn env_string(var_name: &str) -> Option<String> {
    std::env::var(var_name).ok()
}

fn env_parsed<T: std::str::FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| {
            AppError::Config(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            })
        }),
        Err(_) => Ok(None),
    }
}
