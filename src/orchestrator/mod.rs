//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 管理应用生命周期：初始化配置与流程、加载报告、按需触发 AI 分析、渲染输出。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (一次运行 = 一份报告)
//!     ↓
//! workflow::AnalysisFlow (解析 → 按需总结)
//!     ↓
//! services (能力层：parser / digest / summarizer)
//!     ↓
//! clients (基础设施：OpenAI 兼容客户端)
//! ```

pub mod app;

pub use app::{App, RunOptions};
