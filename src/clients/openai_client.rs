//! OpenAI 兼容 API 客户端
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Azure, Gemini, Doubao 等）

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::clients::ChatBackend;
use crate::config::Config;
use crate::error::AnalysisError;

/// LLM 客户端
pub struct OpenAiChatClient {
    /// 未配置密钥时为 None，调用时返回认证错误
    client: Option<Client<OpenAIConfig>>,
    model_name: String,
    temperature: f32,
}

impl OpenAiChatClient {
    /// 创建新的 LLM 客户端
    pub fn new(config: &Config) -> Self {
        let client = config.llm_api_key.as_ref().map(|api_key| {
            let openai_config = OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base(&config.llm_api_base_url);
            Client::with_config(openai_config)
        });

        Self {
            client,
            model_name: config.llm_model_name.clone(),
            temperature: config.llm_temperature,
        }
    }

    fn build_messages(
        system_message: &str,
        user_message: &str,
    ) -> Result<Vec<ChatCompletionRequestMessage>, AnalysisError> {
        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_message)
            .build()
            .map_err(AnalysisError::RequestBuild)?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(AnalysisError::RequestBuild)?;

        Ok(vec![
            ChatCompletionRequestMessage::System(system_msg),
            ChatCompletionRequestMessage::User(user_msg),
        ])
    }
}

#[async_trait]
impl ChatBackend for OpenAiChatClient {
    async fn complete(
        &self,
        system_message: &str,
        user_message: &str,
    ) -> Result<String, AnalysisError> {
        let client = self.client.as_ref().ok_or(AnalysisError::MissingApiKey)?;

        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.chars().count());

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(Self::build_messages(system_message, user_message)?)
            .temperature(self.temperature)
            .build()
            .map_err(AnalysisError::RequestBuild)?;

        let response = client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            AnalysisError::api_call_failed(&self.model_name, e)
        })?;

        debug!("LLM API 调用成功");

        let choice = response
            .choices
            .first()
            .ok_or_else(|| AnalysisError::EmptyResponse {
                model: self.model_name.clone(),
            })?;

        let content = choice
            .message
            .content
            .as_deref()
            .ok_or_else(|| AnalysisError::EmptyContent {
                model: self.model_name.clone(),
            })?;

        Ok(content.trim().to_string())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
