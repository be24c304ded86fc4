use thiserror::Error;

/// 固定的失败提示，非 2xx 响应一律使用
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit";

/// 提交流程中的错误
///
/// 任何一种都会被折叠成 `SubmissionStatus::Failed`，消息取自 `Display`
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 读取附件失败（发生在任何网络请求之前）
    #[error("Failed to read attachment {name}: {source}")]
    AttachmentRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// 网络请求失败
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 服务端返回非成功状态码，不读取响应体中的错误信息
    #[error("{}", SUBMIT_FAILED_MESSAGE)]
    BadStatus { status: u16 },

    /// 成功响应的 JSON 无法解析或缺少 id
    #[error("Invalid response: {source}")]
    ResponseParse {
        #[source]
        source: serde_json::Error,
    },

    /// 请求体序列化失败
    #[error("Failed to encode request: {source}")]
    PayloadEncode {
        #[source]
        source: serde_json::Error,
    },
}

/// 表单操作错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// 未知字段名
    #[error("unknown player field: {name}")]
    UnknownField { name: String },

    /// 链接下标越界
    #[error("link index {index} out of range (have {len} links)")]
    LinkIndexOutOfRange { index: usize, len: usize },
}

// ========== 便捷构造函数 ==========

impl SubmitError {
    /// 创建网络请求失败错误
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        SubmitError::Transport {
            source: Box::new(source),
        }
    }

    /// 创建附件读取错误
    pub fn attachment_read(name: impl Into<String>, source: std::io::Error) -> Self {
        SubmitError::AttachmentRead {
            name: name.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 提交流程结果类型
pub type SubmitResult<T> = Result<T, SubmitError>;
