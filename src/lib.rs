//! # Player Intake
//!
//! 收集足球运动员资料并以一个 JSON 请求提交到 `/api/players` 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 客户端），只暴露能力
//! - `Transport` - 发送 JSON POST 的能力接口，`HttpTransport` 为 reqwest 实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `AttachmentEncoder` - 附件 → base64
//! - `PlayerApi` - 发送请求体、解析记录 id
//! - `OutcomeWriter` - 追加提交结果到日志文件
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整流程
//! - `PlayerForm` - 表单状态与提交流程（encode → request → parse）
//! - `SubmissionStatus` - Idle / Submitting / Succeeded / Failed
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 页面外壳，加载草稿并逐份挂载表单
//! - `orchestrator/draft_processor` - 把单个草稿填入表单并提交
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{FormError, SubmitError, SubmitResult};
pub use infrastructure::{HttpTransport, Transport, TransportResponse};
pub use models::{Attachment, ExtraLink, PlayerDraft, PlayerField, PlayerFields, PlayerPayload};
pub use orchestrator::{App, ProcessingStats};
pub use workflow::{PendingSubmission, PlayerForm, SubmissionStatus};
