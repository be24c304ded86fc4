//! 单个草稿处理器 - 编排层
//!
//! 把一份草稿填进一张新表单，提交一次并记录结果

use anyhow::Result;
use tracing::{error, info, warn};

use crate::error::FormError;
use crate::infrastructure::Transport;
use crate::models::{Attachment, PlayerDraft};
use crate::services::OutcomeWriter;
use crate::utils::logging::truncate_text;
use crate::workflow::{PlayerForm, SubmissionStatus};

/// 把草稿内容逐项写入表单
///
/// 链接按标签落到第一个同名且为空的槽位，找不到则追加到末尾
pub fn apply_draft<T: Transport>(
    form: &mut PlayerForm<T>,
    draft: &PlayerDraft,
) -> Result<(), FormError> {
    for (field, value) in draft.field_values() {
        form.update_field(field, value);
    }

    for link in &draft.extra_links {
        let slot = form
            .extra_links()
            .iter()
            .position(|l| l.label == link.label && l.url.is_empty());
        match slot {
            Some(index) => form.update_link(index, link.url.clone())?,
            None => form.add_link(link.label.clone(), link.url.clone()),
        }
    }

    if let Some(path) = &draft.profile_photo {
        form.set_profile_photo(Some(Attachment::from_path(draft.resolve_media_path(path))));
    }
    if let Some(path) = &draft.highlight_video {
        form.set_highlight_video(Some(Attachment::from_path(draft.resolve_media_path(path))));
    }

    Ok(())
}

/// 处理单个草稿
///
/// # 返回
/// 返回是否提交成功
pub async fn process_draft<T: Transport>(
    form: &mut PlayerForm<T>,
    draft: &PlayerDraft,
    draft_index: usize,
    writer: &OutcomeWriter,
    verbose_logging: bool,
) -> Result<bool> {
    let player = draft.display_name();
    info!("[草稿 {}] 球员: {}", draft_index, truncate_text(&player, 40));

    apply_draft(form, draft)?;

    if verbose_logging {
        info!("[草稿 {}] 表单内容:\n{}", draft_index, form);
    }

    let status = form.submit().await.clone();

    match &status {
        SubmissionStatus::Succeeded { id } => {
            info!("[草稿 {}] ✅ 提交成功，记录 id: {}", draft_index, id);
        }
        SubmissionStatus::Failed { message } => {
            error!("[草稿 {}] ❌ 提交失败: {}", draft_index, message);
        }
        SubmissionStatus::Idle | SubmissionStatus::Submitting => {
            warn!(
                "[草稿 {}] ⚠️ 未提交，缺少必填字段: {:?}",
                draft_index,
                form.missing_required_fields()
            );
        }
    }

    writer.write(draft_index, &player, &status)?;

    Ok(matches!(status, SubmissionStatus::Succeeded { .. }))
}
