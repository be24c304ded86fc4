//! 提交状态
//!
//! 四个状态互斥，"提交中且失败"这类组合无法表示

use std::fmt::Display;

/// 表单提交状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// 初始状态，尚未提交
    #[default]
    Idle,
    /// 正在提交，提交按钮不可用
    Submitting,
    /// 提交成功，携带服务端返回的记录 id
    Succeeded { id: String },
    /// 提交失败，携带给用户看的提示
    Failed { message: String },
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// 提交按钮上的文字
    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Submitting..."
        } else {
            "Submit"
        }
    }

    /// 按钮下方的状态行，只有终态才显示
    pub fn status_line(&self) -> Option<String> {
        match self {
            SubmissionStatus::Succeeded { .. } => Some("Submitted successfully!".to_string()),
            SubmissionStatus::Failed { message } => Some(format!("Error: {}", message)),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Submitting => write!(f, "submitting"),
            SubmissionStatus::Succeeded { id } => write!(f, "succeeded (id: {})", id),
            SubmissionStatus::Failed { message } => write!(f, "failed ({})", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        assert_eq!(SubmissionStatus::Idle.status_line(), None);
        assert_eq!(SubmissionStatus::Submitting.status_line(), None);
        assert_eq!(
            SubmissionStatus::Succeeded { id: "abc123".into() }.status_line().as_deref(),
            Some("Submitted successfully!")
        );
        assert_eq!(
            SubmissionStatus::Failed { message: "Failed to submit".into() }
                .status_line()
                .as_deref(),
            Some("Error: Failed to submit")
        );
    }

    #[test]
    fn test_button_label() {
        assert_eq!(SubmissionStatus::Submitting.button_label(), "Submitting...");
        assert_eq!(SubmissionStatus::Idle.button_label(), "Submit");
    }
}
