//! 提交结果写入服务 - 业务能力层
//!
//! 只负责"把一次提交的结果追加到日志文件"，不关心流程

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

use crate::workflow::SubmissionStatus;

/// 提交结果写入服务
pub struct OutcomeWriter {
    log_file_path: String,
}

impl OutcomeWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            log_file_path: path.into(),
        }
    }

    /// 追加一行结果
    ///
    /// # 参数
    /// - `draft_index`: 草稿序号（从1开始）
    /// - `player`: 球员名称
    /// - `status`: 提交后的状态
    pub fn write(&self, draft_index: usize, player: &str, status: &SubmissionStatus) -> Result<()> {
        debug!("写入提交结果: 草稿 {} | {}", draft_index, status);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)?;

        let line = format!(
            "[{}] 草稿 {} | 球员: {} | 状态: {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            draft_index,
            player,
            status
        );

        file.write_all(line.as_bytes())?;

        Ok(())
    }
}
