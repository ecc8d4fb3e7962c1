pub mod chat_backend;
pub mod openai_client;

pub use chat_backend::ChatBackend;
pub use openai_client::OpenAiChatClient;
