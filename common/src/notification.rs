//! 一時通知（トースト）

use crate::error::{Error, Result};
use crate::types::UploadSummary;
use serde::{Deserialize, Serialize};

/// 通知の表示時間
pub const NOTIFICATION_TIMEOUT_MS: u32 = 1500;

pub const UPLOAD_SUCCESS_TITLE: &str = "Patient data uploaded successfully";
pub const UPLOAD_FAILURE_TITLE: &str = "Something terrible happened!";
pub const FETCH_FAILURE_TITLE: &str = "Error Fetching Patients Data!!!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: Option<String>,
    pub timeout_ms: u32,
}

impl Notification {
    pub fn success(title: &str) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.to_string(),
            description: None,
            timeout_ms: NOTIFICATION_TIMEOUT_MS,
        }
    }

    pub fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.to_string(),
            description: Some(description.into()),
            timeout_ms: NOTIFICATION_TIMEOUT_MS,
        }
    }

    /// 一括アップロード完了時の通知
    pub fn for_submit(result: &Result<UploadSummary>) -> Self {
        match result {
            Ok(_) => Self::success(UPLOAD_SUCCESS_TITLE),
            Err(e) => Self::error(UPLOAD_FAILURE_TITLE, e.detail()),
        }
    }

    /// ページ取得失敗時の通知
    pub fn for_fetch(error: &Error) -> Self {
        Self::error(FETCH_FAILURE_TITLE, error.detail())
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}
