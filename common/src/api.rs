//! バックエンドAPIの境界
//!
//! 実装はフロントエンドごとに持つ（Web: fetch、CLI: reqwest）。
//! ここではエンドポイントの組み立てとトレイトだけを定義する。

use crate::error::{Error, Result};
use crate::types::{PageResponse, UploadSummary};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// multipartで繰り返し使うフィールド名
pub const UPLOAD_FIELD_NAME: &str = "files";

/// アップロード対象ファイル（名前とサイズだけ見える不透明なBlob）
pub trait FileHandle: Clone {
    fn name(&self) -> String;
    fn size(&self) -> u64;
}

/// バックエンドAPI
///
/// ブラウザのfetchはSendでないFutureを返すので、Send境界は付けない。
#[allow(async_fn_in_trait)]
pub trait PatientApi {
    type File: FileHandle;

    /// 全ファイルを1リクエストで送信
    async fn submit_files(&self, files: &[Self::File]) -> Result<UploadSummary>;

    /// 1ページ取得
    async fn fetch_page(&self, page: u32) -> Result<PageResponse>;
}

/// エンドポイントURL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiEndpoints {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("API base URL is empty".into()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(Error::Config(format!(
                "API base URL must start with http:// or https://: {}",
                trimmed
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bulk_upload_url(&self) -> String {
        format!("{}/patient/bulk_upload/", self.base_url)
    }

    pub fn patients_url(&self, page: u32) -> String {
        format!("{}/patients/?page={}", self.base_url, page)
    }
}

/// 非2xxレスポンスの詳細文字列
pub fn http_failure_detail(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}
