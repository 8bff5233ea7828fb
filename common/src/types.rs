//! APIレスポンスと表示用の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - UploadSummary / FileOutcome: 一括アップロードの結果
//! - PatientVisitRecord / PageResponse: 患者来院一覧の1ページ
//! - PageState / VisitRow: 一覧表示用の状態と行

use serde::{Deserialize, Serialize};

/// 一括アップロード結果（`POST /patient/bulk_upload/` のレスポンス）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSummary {
    pub files_processed: u64,
    pub total_added: u64,
    pub total_duplicates: u64,
    #[serde(rename = "file_stats", default)]
    pub per_file: Vec<FileOutcome>,
}

impl UploadSummary {
    /// 結果パネル上部に並べる3つの集計値
    pub fn headline(&self) -> [(&'static str, u64); 3] {
        [
            ("Files Processed", self.files_processed),
            ("Records Added", self.total_added),
            ("Duplicates", self.total_duplicates),
        ]
    }
}

/// ファイル単位の取込結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    #[serde(rename = "file")]
    pub file_name: String,
    pub added: u64,
    pub duplicates: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// 来院1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub visited_date: String,
    pub reason: String,
}

/// 患者1人分のレコード（来院履歴つき）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientVisitRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub mr_number: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl PatientVisitRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// `GET /patients/?page=n` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub results: Vec<PatientVisitRecord>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl PageResponse {
    /// null と空文字はどちらも「次ページなし」
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn has_previous(&self) -> bool {
        self.previous.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// 表示中のページ
///
/// 取得成功のたびに丸ごと置き換える。ページ番号もここに含めるので、
/// 取得失敗時は表示中データと番号がずれない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub records: Vec<PatientVisitRecord>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            has_next: false,
            has_previous: false,
            records: Vec::new(),
        }
    }
}

impl PageState {
    pub fn from_response(page: u32, response: PageResponse) -> Self {
        Self {
            current_page: page,
            has_next: response.has_next(),
            has_previous: response.has_previous(),
            records: response.results,
        }
    }

    /// 患者×来院を1行ずつに展開（来院なしの患者は行を出さない）
    pub fn rows(&self) -> Vec<VisitRow> {
        self.records
            .iter()
            .enumerate()
            .flat_map(|(record_idx, record)| {
                record.visits.iter().enumerate().map(move |(visit_idx, visit)| VisitRow {
                    key: format!("{}-{}", record_idx, visit_idx),
                    mr_number: record.mr_number,
                    patient_name: record.full_name(),
                    dob: record.dob.clone(),
                    visited_date: visit.visited_date.clone(),
                    reason: visit.reason.clone(),
                })
            })
            .collect()
    }
}

/// 一覧テーブルの1行
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitRow {
    pub key: String,
    pub mr_number: i64,
    pub patient_name: String,
    pub dob: String,
    pub visited_date: String,
    pub reason: String,
}

/// テーブル見出し
pub const VISIT_COLUMNS: [&str; 5] = [
    "MR Number",
    "Patient Name",
    "Date of Birth",
    "Visit Date",
    "Reason",
];

/// 行がないときの表示
pub const EMPTY_VISITS_TEXT: &str = "No patient records found!";
