//! 输出渲染
//!
//! 标准输出只承载渲染结果，日志全部走 stderr。

pub mod json;
pub mod markdown;

pub use json::render_json;
pub use markdown::render_markdown;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}
