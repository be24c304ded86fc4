use serde::Serialize;
use serde_json::{Number, Value as JsonValue};
use tracing::warn;

use crate::models::player::{ExtraLink, PlayerFields};

/// 提交到 `/api/players` 的请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPayload {
    pub full_name: String,
    pub age: Option<Number>,
    pub country: String,
    pub position: String,
    pub height: String,
    pub weight: String,
    pub dominant_foot: String,
    pub current_club: String,
    pub past_clubs: String,
    pub bio: String,
    pub highlight_video_link: String,
    pub extra_links: Vec<ExtraLink>,
    pub profile_photo_base64: Option<String>,
    pub highlight_video_base64: Option<String>,
}

impl PlayerPayload {
    /// 组装请求体
    ///
    /// - 标量字段原样复制
    /// - `age` 转为数字，空白或无法解析时为 null
    /// - 丢弃 url 为空的链接，保留原有顺序
    pub fn build(
        fields: &PlayerFields,
        extra_links: &[ExtraLink],
        profile_photo_base64: Option<String>,
        highlight_video_base64: Option<String>,
    ) -> Self {
        Self {
            full_name: fields.full_name.clone(),
            age: parse_age(&fields.age),
            country: fields.country.clone(),
            position: fields.position.clone(),
            height: fields.height.clone(),
            weight: fields.weight.clone(),
            dominant_foot: fields.dominant_foot.clone(),
            current_club: fields.current_club.clone(),
            past_clubs: fields.past_clubs.clone(),
            bio: fields.bio.clone(),
            highlight_video_link: fields.highlight_video_link.clone(),
            extra_links: extra_links
                .iter()
                .filter(|link| !link.url.is_empty())
                .cloned()
                .collect(),
            profile_photo_base64,
            highlight_video_base64,
        }
    }
}

/// 把年龄输入框的文本转为数字
///
/// 整数按整数发送，小数按浮点数发送；非数字文本不会报错，而是按 null 发送
pub fn parse_age(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(age) = trimmed.parse::<i64>() {
        return Some(Number::from(age));
    }
    match trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(age) => Some(age),
        None => {
            warn!("⚠️ 年龄 '{}' 不是有效数字，按 null 提交", trimmed);
            None
        }
    }
}

/// 服务端成功响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub id: String,
}

impl SubmitResponse {
    /// 从成功响应体中取出记录 id
    ///
    /// 只要是合法 JSON 就算成功：字符串 id 原样保留，其他类型按 JSON 文本保存，缺少 id 时为空
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        let value: JsonValue = serde_json::from_str(body)?;
        let id = match value.get("id") {
            Some(JsonValue::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Ok(Self { id })
    }
}
