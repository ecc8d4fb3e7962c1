//! # Report Analyzer
//!
//! 解析 HTML 测试报告，统计通过/失败用例，并按需把失败日志交给 LLM 生成分析
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - `ChatBackend` 抽象和 OpenAI 兼容实现，唯一的网络 I/O
//!
//! ### ② 业务能力层（Services）
//! - `ReportParser` - 从 HTML 中提取测试用例
//! - `build_digest` - 拼接并截断失败日志
//! - `Summarizer` - 单次 LLM 总结
//!
//! ### ③ 流程层（Workflow）
//! - `ReportSession` - 一份报告的解析结果和失败日志
//! - `AnalysisFlow` - 流程编排（加载 → 解析 → 按需总结）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::App` - 生命周期、输出渲染
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ChatBackend, OpenAiChatClient};
pub use config::{Config, ParserConfig};
pub use error::{AnalysisError, AppError, AppResult};
pub use models::{AnalysisResult, ParsedReport, TestCase, TestStatus};
pub use orchestrator::{App, RunOptions};
pub use services::{build_digest, FailureDigest, ReportParser, Summarizer};
pub use workflow::{AnalysisFlow, ReportSession};
