//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PlayerDraft>，页面外壳)
//!     ↓
//! draft_processor (把单个草稿填入表单并提交)
//!     ↓
//! workflow::PlayerForm (表单状态 + 提交流程)
//!     ↓
//! services (能力层：attachment encoder / player api / outcome writer)
//!     ↓
//! infrastructure (基础设施：HttpTransport)
//! ```

pub mod batch_processor;
pub mod draft_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats, PAGE_DESCRIPTION, PAGE_TITLE};
pub use draft_processor::{apply_draft, process_draft};
