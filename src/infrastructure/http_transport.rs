//! HTTP 传输 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"POST 一个 JSON"的能力

use std::future::Future;
use std::time::Duration;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};

/// 一次请求的原始响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 是否为 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 传输能力
///
/// 职责：
/// - 发送 `Content-Type: application/json` 的 POST
/// - 返回状态码和响应体文本
/// - 不认识球员资料，不解析响应
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        body: &JsonValue,
    ) -> impl Future<Output = SubmitResult<TransportResponse>> + Send;
}

/// 基于 reqwest 的传输实现
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// 按配置创建，只有设置了超时才会启用
    pub fn new(config: &Config) -> SubmitResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(SubmitError::transport)?;
        Ok(Self { client })
    }

    /// 使用已构建好的 reqwest 客户端
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &JsonValue) -> SubmitResult<TransportResponse> {
        debug!("POST {}", url);

        // .json() 会设置 Content-Type: application/json
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(SubmitError::transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(SubmitError::transport)?;

        debug!("响应状态: {}, 响应长度: {}", status, body.len());

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(201, "").is_success());
        assert!(!TransportResponse::new(302, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }
}
