//! 球员接口服务 - 业务能力层
//!
//! 只负责"发送请求体并取回记录 id"，不持有表单状态

use tracing::{debug, warn};

use crate::error::{SubmitError, SubmitResult};
use crate::infrastructure::Transport;
use crate::models::{PlayerPayload, SubmitResponse};

/// 球员接口客户端
pub struct PlayerApi<T> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> PlayerApi<T> {
    /// 创建新的接口客户端
    ///
    /// `endpoint` 为完整地址，通常来自 `Config::players_endpoint`
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// 提交球员资料
    ///
    /// # 返回
    /// 返回服务端分配的记录 id
    pub async fn create_player(&self, payload: &PlayerPayload) -> SubmitResult<String> {
        let body = serde_json::to_value(payload)
            .map_err(|source| SubmitError::PayloadEncode { source })?;

        let response = self.transport.post_json(&self.endpoint, &body).await?;

        if !response.is_success() {
            warn!("⚠️ 提交失败，状态码: {}", response.status);
            return Err(SubmitError::BadStatus {
                status: response.status,
            });
        }

        let parsed = SubmitResponse::from_body(&response.body)
            .map_err(|source| SubmitError::ResponseParse { source })?;

        debug!("服务端返回记录 id: {}", parsed.id);

        Ok(parsed.id)
    }
}
