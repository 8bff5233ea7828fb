//! reqwestによるバックエンドAPIクライアント

use crate::error::{AdminError, Result};
use patient_admin_common::api::http_failure_detail;
use patient_admin_common::{
    ApiEndpoints, Error as CommonError, FileHandle, PageResponse, PatientApi, UploadSummary,
    UPLOAD_FIELD_NAME,
};
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};

/// ローカルファイル（送信時に読み込む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub path: PathBuf,
    name: String,
    size: u64,
}

impl LocalFile {
    pub fn open(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .map_err(|_| AdminError::FileNotFound(path.display().to_string()))?;
        if !metadata.is_file() {
            return Err(AdminError::FileNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }
}

impl FileHandle for LocalFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

pub struct HttpApi {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl HttpApi {
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    pub fn with_client(client: reqwest::Client, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    async fn build_form(files: &[LocalFile]) -> std::result::Result<Form, String> {
        let mut form = Form::new();
        for file in files {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|e| format!("{}: {}", file.path.display(), e))?;
            let part = Part::bytes(bytes).file_name(file.name.clone());
            form = form.part(UPLOAD_FIELD_NAME, part);
        }
        Ok(form)
    }

    /// レスポンスを検査してJSONを取り出す（失敗時は詳細文字列）
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> std::result::Result<T, String> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(http_failure_detail(status.as_u16(), &body));
        }
        response.json::<T>().await.map_err(|e| e.to_string())
    }
}

impl PatientApi for HttpApi {
    type File = LocalFile;

    async fn submit_files(&self, files: &[LocalFile]) -> patient_admin_common::Result<UploadSummary> {
        let url = self.endpoints.bulk_upload_url();
        log::debug!("POST {} ({} file(s))", url, files.len());

        let form = Self::build_form(files).await.map_err(CommonError::Submit)?;
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| CommonError::Submit(e.to_string()))?;

        Self::read_json(response).await.map_err(CommonError::Submit)
    }

    async fn fetch_page(&self, page: u32) -> patient_admin_common::Result<PageResponse> {
        let url = self.endpoints.patients_url(page);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CommonError::Fetch(e.to_string()))?;

        Self::read_json(response).await.map_err(CommonError::Fetch)
    }
}
