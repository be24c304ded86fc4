use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::player::{ExtraLink, PlayerField};

/// 从 TOML 文件读取的球员草稿
///
/// 每个键都可以省略，省略的字段保持表单默认值
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerDraft {
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: Option<String>,
    pub country: Option<String>,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub dominant_foot: Option<String>,
    pub current_club: Option<String>,
    pub past_clubs: Option<String>,
    pub bio: Option<String>,
    pub highlight_video_link: Option<String>,
    #[serde(default)]
    pub extra_links: Vec<ExtraLink>,
    pub profile_photo: Option<PathBuf>,
    pub highlight_video: Option<PathBuf>,
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl PlayerDraft {
    /// 草稿中出现过的标量字段及其值
    pub fn field_values(&self) -> Vec<(PlayerField, &str)> {
        let slots = [
            (PlayerField::FullName, &self.full_name),
            (PlayerField::Age, &self.age),
            (PlayerField::Country, &self.country),
            (PlayerField::Position, &self.position),
            (PlayerField::Height, &self.height),
            (PlayerField::Weight, &self.weight),
            (PlayerField::DominantFoot, &self.dominant_foot),
            (PlayerField::CurrentClub, &self.current_club),
            (PlayerField::PastClubs, &self.past_clubs),
            (PlayerField::Bio, &self.bio),
            (PlayerField::HighlightVideoLink, &self.highlight_video_link),
        ];
        slots
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
            .collect()
    }

    /// 相对路径以草稿文件所在目录为基准
    pub fn resolve_media_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.file_path.as_deref().and_then(Path::parent) {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        }
    }

    /// 获取用于日志显示的名称
    pub fn display_name(&self) -> String {
        match (&self.full_name, &self.file_path) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(path)) => path.display().to_string(),
            _ => "<unnamed draft>".to_string(),
        }
    }

    pub fn with_file_path(mut self, file_path: PathBuf) -> Self {
        self.file_path = Some(file_path);
        self
    }
}

// 年龄既可以写成字符串也可以写成数字
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_text_or_number(deserializer).map(Some)
}

/// 把字符串或数字统一读成文本
fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct TextOrNumberVisitor;

    impl<'de> Visitor<'de> for TextOrNumberVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(TextOrNumberVisitor)
}
