use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 球员表单中的标量字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerField {
    /// 姓名（必填）
    FullName,
    /// 年龄
    Age,
    /// 国籍
    Country,
    /// 场上位置
    Position,
    /// 身高
    Height,
    /// 体重
    Weight,
    /// 惯用脚
    DominantFoot,
    /// 当前俱乐部
    CurrentClub,
    /// 曾效力俱乐部
    PastClubs,
    /// 个人简介
    Bio,
    /// 集锦视频链接
    HighlightVideoLink,
}

impl PlayerField {
    /// 表单中全部字段，按页面顺序排列
    pub const ALL: [PlayerField; 11] = [
        PlayerField::FullName,
        PlayerField::Age,
        PlayerField::Country,
        PlayerField::Position,
        PlayerField::Height,
        PlayerField::Weight,
        PlayerField::DominantFoot,
        PlayerField::CurrentClub,
        PlayerField::PastClubs,
        PlayerField::Bio,
        PlayerField::HighlightVideoLink,
    ];

    /// 获取字段在请求体中的名称
    pub fn name(self) -> &'static str {
        match self {
            PlayerField::FullName => "full_name",
            PlayerField::Age => "age",
            PlayerField::Country => "country",
            PlayerField::Position => "position",
            PlayerField::Height => "height",
            PlayerField::Weight => "weight",
            PlayerField::DominantFoot => "dominant_foot",
            PlayerField::CurrentClub => "current_club",
            PlayerField::PastClubs => "past_clubs",
            PlayerField::Bio => "bio",
            PlayerField::HighlightVideoLink => "highlight_video_link",
        }
    }

    /// 获取字段在页面上显示的标签
    pub fn label(self) -> &'static str {
        match self {
            PlayerField::FullName => "Full Name",
            PlayerField::Age => "Age",
            PlayerField::Country => "Country",
            PlayerField::Position => "Position",
            PlayerField::Height => "Height",
            PlayerField::Weight => "Weight",
            PlayerField::DominantFoot => "Dominant Foot",
            PlayerField::CurrentClub => "Current Club",
            PlayerField::PastClubs => "Past Clubs",
            PlayerField::Bio => "Bio / About Me",
            PlayerField::HighlightVideoLink => "Or paste a YouTube/Drive link",
        }
    }

    /// 输入框的占位提示
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            PlayerField::Height => Some("e.g., 180 cm"),
            PlayerField::Weight => Some("e.g., 75 kg"),
            PlayerField::DominantFoot => Some("Left or Right"),
            PlayerField::PastClubs => Some("Comma-separated"),
            PlayerField::HighlightVideoLink => Some("https://"),
            _ => None,
        }
    }

    /// 是否为必填字段（只有姓名）
    pub fn is_required(self) -> bool {
        matches!(self, PlayerField::FullName)
    }

    /// 从请求体字段名解析（精确匹配）
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == s)
    }
}

impl std::fmt::Display for PlayerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PlayerField {
    type Err = crate::error::FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::error::FormError::UnknownField {
            name: s.to_string(),
        })
    }
}

/// 表单标量字段的当前文本值
///
/// 所有字段都按输入框的原始文本保存，`age` 在提交时才转换为数字
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFields {
    pub full_name: String,
    pub age: String,
    pub country: String,
    pub position: String,
    pub height: String,
    pub weight: String,
    pub dominant_foot: String,
    pub current_club: String,
    pub past_clubs: String,
    pub bio: String,
    pub highlight_video_link: String,
}

impl PlayerFields {
    /// 读取字段当前值
    pub fn get(&self, field: PlayerField) -> &str {
        match field {
            PlayerField::FullName => &self.full_name,
            PlayerField::Age => &self.age,
            PlayerField::Country => &self.country,
            PlayerField::Position => &self.position,
            PlayerField::Height => &self.height,
            PlayerField::Weight => &self.weight,
            PlayerField::DominantFoot => &self.dominant_foot,
            PlayerField::CurrentClub => &self.current_club,
            PlayerField::PastClubs => &self.past_clubs,
            PlayerField::Bio => &self.bio,
            PlayerField::HighlightVideoLink => &self.highlight_video_link,
        }
    }

    /// 覆盖字段值，不做任何校验
    pub fn set(&mut self, field: PlayerField, value: String) {
        let slot = match field {
            PlayerField::FullName => &mut self.full_name,
            PlayerField::Age => &mut self.age,
            PlayerField::Country => &mut self.country,
            PlayerField::Position => &mut self.position,
            PlayerField::Height => &mut self.height,
            PlayerField::Weight => &mut self.weight,
            PlayerField::DominantFoot => &mut self.dominant_foot,
            PlayerField::CurrentClub => &mut self.current_club,
            PlayerField::PastClubs => &mut self.past_clubs,
            PlayerField::Bio => &mut self.bio,
            PlayerField::HighlightVideoLink => &mut self.highlight_video_link,
        };
        *slot = value;
    }
}

/// 默认的四个外部链接标签
pub const DEFAULT_LINK_LABELS: [&str; 4] = ["Transfermarkt", "Instagram", "Full Match Video", "CV"];

/// 带标签的外部链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraLink {
    pub label: String,
    pub url: String,
}

impl ExtraLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// 生成默认链接槽位（url 全部为空）
    pub fn defaults() -> Vec<ExtraLink> {
        DEFAULT_LINK_LABELS
            .iter()
            .map(|label| ExtraLink::new(*label, ""))
            .collect()
    }
}

/// 媒体附件句柄
///
/// 只保存位置或内容，直到提交时才读取并编码
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    /// 本地文件
    File(PathBuf),
    /// 内存中的内容
    Memory { name: String, bytes: Vec<u8> },
}

impl Attachment {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Attachment::File(path.into())
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Attachment::Memory {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// 用于显示和日志的文件名
    pub fn display_name(&self) -> String {
        match self {
            Attachment::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            Attachment::Memory { name, .. } => name.clone(),
        }
    }
}
