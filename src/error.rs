use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("アップロードするファイルが指定されていません")]
    NoFilesGiven,

    #[error("入力エラー: {0}")]
    Dialog(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] patient_admin_common::Error),
}

impl From<dialoguer::Error> for AdminError {
    fn from(e: dialoguer::Error) -> Self {
        AdminError::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
