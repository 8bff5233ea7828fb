//! 一括アップロードのフローテスト
//!
//! APIはテスト内のフェイクで置き換える

use patient_admin::client::LocalFile;
use patient_admin::commands::{browse_visits, upload_files};
use patient_admin::error::AdminError;
use patient_admin_common::{
    Error, FileHandle, FileOutcome, PageResponse, PatientApi, Result, UploadSummary,
};
use std::cell::RefCell;
use std::path::PathBuf;
use tempfile::tempdir;

#[derive(Default)]
struct RecordingApi {
    fail_upload: Option<String>,
    batches: RefCell<Vec<Vec<(String, u64)>>>,
    pages: RefCell<Vec<u32>>,
}

impl PatientApi for RecordingApi {
    type File = LocalFile;

    async fn submit_files(&self, files: &[LocalFile]) -> Result<UploadSummary> {
        self.batches
            .borrow_mut()
            .push(files.iter().map(|f| (f.name(), f.size())).collect());

        if let Some(detail) = &self.fail_upload {
            return Err(Error::Submit(detail.clone()));
        }
        Ok(UploadSummary {
            files_processed: files.len() as u64,
            total_added: 5,
            total_duplicates: 1,
            per_file: files
                .iter()
                .map(|f| FileOutcome {
                    file_name: f.name(),
                    added: 5,
                    duplicates: 1,
                    errors: vec![],
                })
                .collect(),
        })
    }

    async fn fetch_page(&self, page: u32) -> Result<PageResponse> {
        self.pages.borrow_mut().push(page);
        if page > 3 {
            return Err(Error::Fetch("HTTP 404: Invalid page.".into()));
        }
        Ok(PageResponse::default())
    }
}

fn write_files(dir: &std::path::Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            std::fs::write(&path, "mr_number,first_name\n7,A\n").unwrap();
            path
        })
        .collect()
}

/// 全ファイルを1リクエストで送る
#[tokio::test]
async fn test_upload_sends_one_batch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = write_files(dir.path(), &["a.csv", "b.csv"]);
    let api = RecordingApi::default();

    let report = upload_files(&api, &paths, true).await.unwrap();

    let batches = api.batches.borrow();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 2);
    assert_eq!(batches[0][0].0, "a.csv");
    assert_eq!(batches[0][0].1, 25);

    assert!(!report.notification.is_error());
    let summary = report.summary.expect("結果がない");
    assert_eq!(summary.files_processed, 2);
}

/// 失敗時は結果なし・エラー通知1件
#[tokio::test]
async fn test_upload_failure_reports_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = write_files(dir.path(), &["a.csv"]);
    let api = RecordingApi {
        fail_upload: Some("HTTP 400: unsupported file".into()),
        ..Default::default()
    };

    let report = upload_files(&api, &paths, true).await.unwrap();

    assert!(report.notification.is_error());
    assert_eq!(
        report.notification.description.as_deref(),
        Some("HTTP 400: unsupported file")
    );
    assert!(report.summary.is_none());
}

/// 存在しないファイルがあればリクエストしない
#[tokio::test]
async fn test_upload_missing_file_sends_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut paths = write_files(dir.path(), &["a.csv"]);
    paths.push(dir.path().join("missing.csv"));
    let api = RecordingApi::default();

    let err = upload_files(&api, &paths, true).await.err().unwrap();

    assert!(matches!(err, AdminError::FileNotFound(_)));
    assert!(api.batches.borrow().is_empty());
}

/// ファイル指定なし
#[tokio::test]
async fn test_upload_no_files() {
    let api = RecordingApi::default();
    let err = upload_files(&api, &[], true).await.err().unwrap();

    assert!(matches!(err, AdminError::NoFilesGiven));
    assert!(api.batches.borrow().is_empty());
}

/// 一覧表示は指定ページを1回だけ取得
#[tokio::test]
async fn test_browse_visits_fetches_once() {
    let api = RecordingApi::default();
    browse_visits(&api, 1, false).await.unwrap();
    assert_eq!(*api.pages.borrow(), vec![1]);

    let api = RecordingApi::default();
    browse_visits(&api, 3, false).await.unwrap();
    assert_eq!(*api.pages.borrow(), vec![3]);
}

/// 初回取得の失敗はエラーで返す
#[tokio::test]
async fn test_browse_visits_failure() {
    let api = RecordingApi::default();
    let err = browse_visits(&api, 9, false).await.unwrap_err();

    assert!(matches!(err, AdminError::Common(Error::Fetch(_))));
}
