//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 画面に出すのは `Submit` / `Fetch` の2種類だけ。詳細文字列はバックエンド
/// またはトランスポートが返したものをそのまま保持する。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Upload failed: {0}")]
    Submit(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 通知に載せる詳細（プレフィックスなし）
    pub fn detail(&self) -> String {
        match self {
            Error::Submit(detail) | Error::Fetch(detail) | Error::Config(detail) => detail.clone(),
            Error::Json(e) => e.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
