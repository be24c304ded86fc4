use crate::models::draft::PlayerDraft;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载球员草稿
pub async fn load_toml_to_player_draft(toml_file_path: &Path) -> Result<PlayerDraft> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let draft: PlayerDraft = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    Ok(draft.with_file_path(toml_file_path.to_path_buf()))
}

/// 从文件夹中加载所有 TOML 草稿
///
/// 解析失败的文件只记录警告并跳过；结果按文件名排序
pub async fn load_all_drafts(folder_path: &str) -> Result<Vec<PlayerDraft>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut toml_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }
    toml_files.sort();

    let mut drafts = Vec::new();
    for path in toml_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_toml_to_player_draft(&path).await {
            Ok(draft) => {
                tracing::info!("成功加载球员草稿: {}", draft.display_name());
                drafts.push(draft);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(drafts)
}
