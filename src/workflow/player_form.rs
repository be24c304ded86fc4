//! 球员资料表单 - 流程层
//!
//! 核心职责：持有表单的全部可变状态，并定义"一次提交"的完整流程
//!
//! 流程顺序：
//! 1. 守卫：正在提交或缺少必填字段时不发请求
//! 2. 编码附件（头像 → 集锦视频）
//! 3. 组装请求体并 POST
//! 4. 成功则清空表单，失败则保留输入
//!
//! 任何一步出错都在 `finish` 里统一转成 `SubmissionStatus::Failed`

use std::fmt::{self, Display};

use tracing::{debug, info, warn};

use crate::error::{FormError, SubmitResult};
use crate::infrastructure::Transport;
use crate::models::{Attachment, ExtraLink, PlayerField, PlayerFields, PlayerPayload};
use crate::services::{AttachmentEncoder, PlayerApi};
use crate::workflow::submission_status::SubmissionStatus;

/// 已通过守卫、等待发送的一次提交
///
/// 保存的是开始提交那一刻的表单快照
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    fields: PlayerFields,
    extra_links: Vec<ExtraLink>,
    profile_photo: Option<Attachment>,
    highlight_video: Option<Attachment>,
}

/// 球员资料表单
///
/// - 每个实例独立持有状态，实例之间不共享
/// - 同一时刻最多一次提交在进行中
/// - 不做重试，不做超时（超时由传输层按配置决定）
pub struct PlayerForm<T> {
    api: PlayerApi<T>,
    encoder: AttachmentEncoder,
    fields: PlayerFields,
    extra_links: Vec<ExtraLink>,
    profile_photo: Option<Attachment>,
    highlight_video: Option<Attachment>,
    status: SubmissionStatus,
}

impl<T: Transport> PlayerForm<T> {
    /// 创建空表单
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            api: PlayerApi::new(transport, endpoint),
            encoder: AttachmentEncoder::new(),
            fields: PlayerFields::default(),
            extra_links: ExtraLink::defaults(),
            profile_photo: None,
            highlight_video: None,
            status: SubmissionStatus::Idle,
        }
    }

    // ========== 读取状态 ==========

    pub fn fields(&self) -> &PlayerFields {
        &self.fields
    }

    pub fn extra_links(&self) -> &[ExtraLink] {
        &self.extra_links
    }

    pub fn profile_photo(&self) -> Option<&Attachment> {
        self.profile_photo.as_ref()
    }

    pub fn highlight_video(&self) -> Option<&Attachment> {
        self.highlight_video.as_ref()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// 尚未填写的必填字段
    pub fn missing_required_fields(&self) -> Vec<PlayerField> {
        PlayerField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.fields.get(*field).is_empty())
            .collect()
    }

    // ========== 修改状态 ==========

    /// 设置字段值，此处不做校验
    pub fn update_field(&mut self, field: PlayerField, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// 替换指定位置链接的 url，标签不变
    pub fn update_link(&mut self, index: usize, url: impl Into<String>) -> Result<(), FormError> {
        let len = self.extra_links.len();
        let link = self
            .extra_links
            .get_mut(index)
            .ok_or(FormError::LinkIndexOutOfRange { index, len })?;
        link.url = url.into();
        Ok(())
    }

    /// 追加一个带标签的链接，允许重复标签
    pub fn add_link(&mut self, label: impl Into<String>, url: impl Into<String>) {
        self.extra_links.push(ExtraLink::new(label, url));
    }

    /// 设置头像，None 表示清除
    pub fn set_profile_photo(&mut self, attachment: Option<Attachment>) {
        self.profile_photo = attachment;
    }

    /// 设置集锦视频文件，None 表示清除
    pub fn set_highlight_video(&mut self, attachment: Option<Attachment>) {
        self.highlight_video = attachment;
    }

    /// 恢复所有字段、链接和附件为默认值（不改变提交状态）
    pub fn reset(&mut self) {
        self.fields = PlayerFields::default();
        self.extra_links = ExtraLink::defaults();
        self.profile_photo = None;
        self.highlight_video = None;
    }

    // ========== 提交流程 ==========

    /// 提交表单
    ///
    /// 正在提交或缺少必填字段时直接返回当前状态，不发请求
    pub async fn submit(&mut self) -> &SubmissionStatus {
        match self.begin_submit() {
            Some(pending) => self.complete_submit(pending).await,
            None => &self.status,
        }
    }

    /// 提交的前半段：守卫检查，进入 `Submitting` 并拍下快照
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if self.status.is_submitting() {
            debug!("已有提交在进行中，忽略本次提交");
            return None;
        }

        let missing = self.missing_required_fields();
        if !missing.is_empty() {
            warn!("⚠️ 缺少必填字段: {:?}，不提交", missing);
            return None;
        }

        self.status = SubmissionStatus::Submitting;

        Some(PendingSubmission {
            fields: self.fields.clone(),
            extra_links: self.extra_links.clone(),
            profile_photo: self.profile_photo.clone(),
            highlight_video: self.highlight_video.clone(),
        })
    }

    /// 提交的后半段：编码、发送、解析并落到终态
    pub async fn complete_submit(&mut self, pending: PendingSubmission) -> &SubmissionStatus {
        let result = self.dispatch(&pending).await;
        self.finish(result)
    }

    async fn dispatch(&self, pending: &PendingSubmission) -> SubmitResult<String> {
        info!("📤 正在提交球员资料: {}", pending.fields.full_name);

        let profile_photo_base64 = self
            .encoder
            .encode_optional(pending.profile_photo.as_ref())
            .await?;
        let highlight_video_base64 = self
            .encoder
            .encode_optional(pending.highlight_video.as_ref())
            .await?;

        let payload = build_payload(pending, profile_photo_base64, highlight_video_base64);

        self.api.create_player(&payload).await
    }

    fn finish(&mut self, result: SubmitResult<String>) -> &SubmissionStatus {
        self.status = match result {
            Ok(id) => {
                info!("✓ 提交成功，记录 id: {}", id);
                self.reset();
                SubmissionStatus::Succeeded { id }
            }
            Err(e) => {
                warn!("⚠️ 提交失败: {}", e);
                SubmissionStatus::Failed {
                    message: e.to_string(),
                }
            }
        };
        &self.status
    }
}

/// 由快照和编码好的附件组装请求体
pub fn build_payload(
    pending: &PendingSubmission,
    profile_photo_base64: Option<String>,
    highlight_video_base64: Option<String>,
) -> PlayerPayload {
    PlayerPayload::build(
        &pending.fields,
        &pending.extra_links,
        profile_photo_base64,
        highlight_video_base64,
    )
}

impl<T> Display for PlayerForm<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player Information")?;
        for field in PlayerField::ALL {
            let value = self.fields.get(field);
            let shown = match (value.is_empty(), field.placeholder()) {
                (true, Some(placeholder)) => format!("<{}>", placeholder),
                _ => value.to_string(),
            };
            let marker = if field.is_required() { " *" } else { "" };
            writeln!(f, "  {}{}: {}", field.label(), marker, shown)?;
        }

        writeln!(f, "Media")?;
        let name_of = |a: &Option<Attachment>| {
            a.as_ref()
                .map(Attachment::display_name)
                .unwrap_or_else(|| "(none)".to_string())
        };
        writeln!(f, "  Profile Photo: {}", name_of(&self.profile_photo))?;
        writeln!(f, "  Highlight Video (file): {}", name_of(&self.highlight_video))?;

        writeln!(f, "Extra Links")?;
        for link in &self.extra_links {
            writeln!(f, "  {}: {}", link.label, link.url)?;
        }

        write!(f, "[{}]", self.status.button_label())?;
        if let Some(line) = self.status.status_line() {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}
