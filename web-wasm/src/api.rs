//! fetchによるバックエンドAPIクライアント

use patient_admin_common::api::http_failure_detail;
use patient_admin_common::{
    ApiEndpoints, Error, FileHandle, PageResponse, PatientApi, Result, UploadSummary,
    UPLOAD_FIELD_NAME,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// ブラウザで選択されたファイル
#[derive(Clone, Debug)]
pub struct WebFile(pub web_sys::File);

impl From<web_sys::File> for WebFile {
    fn from(file: web_sys::File) -> Self {
        Self(file)
    }
}

impl FileHandle for WebFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// FileListをVecに展開
pub fn collect_files(list: &web_sys::FileList) -> Vec<WebFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(WebFile::from)
        .collect()
}

#[derive(Clone, Debug)]
pub struct FetchApi {
    endpoints: ApiEndpoints,
}

impl FetchApi {
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self { endpoints }
    }

    /// ビルド時の `PATIENT_ADMIN_API_URL` を優先し、なければデフォルト
    pub fn from_build_env() -> Self {
        let endpoints = option_env!("PATIENT_ADMIN_API_URL")
            .and_then(|url| ApiEndpoints::new(url).ok())
            .unwrap_or_default();
        Self::new(endpoints)
    }
}

fn js_detail(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// リクエスト送信 → ステータス確認 → JSON取り出し
async fn send_json<T: DeserializeOwned>(request: Request) -> std::result::Result<T, String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_detail)?;
    let resp: Response = resp_value.dyn_into().map_err(js_detail)?;

    if !resp.ok() {
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(http_failure_detail(resp.status(), &body));
    }

    let json = JsFuture::from(resp.json().map_err(js_detail)?)
        .await
        .map_err(js_detail)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

impl PatientApi for FetchApi {
    type File = WebFile;

    async fn submit_files(&self, files: &[WebFile]) -> Result<UploadSummary> {
        let form = FormData::new().map_err(|e| Error::Submit(js_detail(e)))?;
        for file in files {
            form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, &file.0, &file.0.name())
                .map_err(|e| Error::Submit(js_detail(e)))?;
        }

        // Content-Typeはブラウザがboundary付きで付与する
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from(form));

        let request = Request::new_with_str_and_init(&self.endpoints.bulk_upload_url(), &opts)
            .map_err(|e| Error::Submit(js_detail(e)))?;

        send_json(request).await.map_err(|detail| {
            gloo::console::error!(format!("Error while uploading patient files: {}", detail));
            Error::Submit(detail)
        })
    }

    async fn fetch_page(&self, page: u32) -> Result<PageResponse> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&self.endpoints.patients_url(page), &opts)
            .map_err(|e| Error::Fetch(js_detail(e)))?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(|e| Error::Fetch(js_detail(e)))?;

        send_json(request).await.map_err(|detail| {
            gloo::console::error!(format!("Error fetching patient records! {}", detail));
            Error::Fetch(detail)
        })
    }
}
