//! アップロード制御
//!
//! 選択ファイルの保持 → 一括送信 → 結果保持 までの状態機械。
//! IOは持たない: `begin_submit` で送信バッチを受け取り、呼び出し側が
//! APIを叩いたあと `finish_submit` に結果を渡す。
//!
//! 状態遷移は `Idle → Uploading → Idle` のみ。完了時は成否に関係なく
//! 選択ファイルを空にする。

use crate::api::{FileHandle, PatientApi};
use crate::error::Result;
use crate::notification::Notification;
use crate::types::UploadSummary;

/// 送信待ちファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile<F> {
    pub id: String,
    pub file: F,
}

#[derive(Debug, Clone)]
pub struct UploadController<F> {
    pending: Vec<PendingFile<F>>,
    summary: Option<UploadSummary>,
    uploading: bool,
    next_seq: u64,
}

impl<F> Default for UploadController<F> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            summary: None,
            uploading: false,
            next_seq: 0,
        }
    }
}

impl<F: FileHandle> UploadController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[PendingFile<F>] {
        &self.pending
    }

    pub fn summary(&self) -> Option<&UploadSummary> {
        self.summary.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// ファイルを追加し、表示中の結果を破棄する
    ///
    /// IDは `名前-選択時刻(ms)-連番`。同名ファイルを同じミリ秒に
    /// 選んでも連番で区別できる。追加したIDを返す。
    pub fn add_files(&mut self, files: impl IntoIterator<Item = F>, selected_at_ms: u64) -> Vec<String> {
        self.summary = None;

        let mut ids = Vec::new();
        for file in files {
            let id = format!("{}-{}-{}", file.name(), selected_at_ms, self.next_seq);
            self.next_seq += 1;
            ids.push(id.clone());
            self.pending.push(PendingFile { id, file });
        }
        log::debug!("{} file(s) selected, {} pending", ids.len(), self.pending.len());
        ids
    }

    /// 1件削除（存在しなければ何もしない）
    pub fn remove_file(&mut self, id: &str) -> bool {
        match self.pending.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.pending.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.pending.clear();
    }

    /// 送信開始
    ///
    /// 選択が空、または送信中なら `None`（リクエストは発行しない）。
    /// それ以外は Uploading に入り、送信するファイル一覧を返す。
    pub fn begin_submit(&mut self) -> Option<Vec<F>> {
        if self.uploading || self.pending.is_empty() {
            return None;
        }
        self.uploading = true;
        self.summary = None;
        Some(self.pending.iter().map(|p| p.file.clone()).collect())
    }

    /// 送信完了
    ///
    /// 成否にかかわらず選択を空にして Idle に戻り、通知を1件返す。
    pub fn finish_submit(&mut self, result: Result<UploadSummary>) -> Notification {
        self.uploading = false;
        self.pending.clear();

        let notification = Notification::for_submit(&result);
        match result {
            Ok(summary) => {
                log::info!(
                    "upload done: {} file(s), {} added, {} duplicate(s)",
                    summary.files_processed,
                    summary.total_added,
                    summary.total_duplicates
                );
                self.summary = Some(summary);
            }
            Err(e) => {
                log::error!("Error while uploading patient files: {}", e);
                self.summary = None;
            }
        }
        notification
    }

    /// begin → API呼び出し → finish をまとめて実行
    pub async fn submit<A>(&mut self, api: &A) -> Option<Notification>
    where
        A: PatientApi<File = F>,
    {
        let batch = self.begin_submit()?;
        let result = api.submit_files(&batch).await;
        Some(self.finish_submit(result))
    }
}
