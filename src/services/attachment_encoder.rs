//! 附件编码服务 - 业务能力层
//!
//! 只负责"把附件整体读出并转成 base64 文本"，不关心流程

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

use crate::error::{SubmitError, SubmitResult};
use crate::models::Attachment;

/// 附件编码服务
///
/// 输出只有编码后的内容，不带 `data:...;base64,` 前缀，也不限制文件大小
#[derive(Debug, Clone, Copy, Default)]
pub struct AttachmentEncoder;

impl AttachmentEncoder {
    pub fn new() -> Self {
        Self
    }

    /// 读取并编码单个附件
    pub async fn encode(&self, attachment: &Attachment) -> SubmitResult<String> {
        let name = attachment.display_name();
        let bytes = match attachment {
            Attachment::File(path) => tokio::fs::read(path)
                .await
                .map_err(|e| SubmitError::attachment_read(&name, e))?,
            Attachment::Memory { bytes, .. } => bytes.clone(),
        };

        debug!("编码附件 {}: {} 字节", name, bytes.len());

        Ok(STANDARD.encode(bytes))
    }

    /// 编码可选附件，缺省时返回 None
    pub async fn encode_optional(
        &self,
        attachment: Option<&Attachment>,
    ) -> SubmitResult<Option<String>> {
        match attachment {
            Some(attachment) => self.encode(attachment).await.map(Some),
            None => Ok(None),
        }
    }
}
