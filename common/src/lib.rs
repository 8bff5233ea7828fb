//! Patient Admin Common Library
//!
//! CLIとWeb(WASM)で共有される型と、アップロード／ページ送りの状態機械

pub mod api;
pub mod error;
pub mod format;
pub mod notification;
pub mod pager;
pub mod types;
pub mod upload;

#[cfg(test)]
mod test_utils;

pub use api::{ApiEndpoints, FileHandle, PatientApi, DEFAULT_API_BASE_URL, UPLOAD_FIELD_NAME};
pub use error::{Error, Result};
pub use format::format_file_size;
pub use notification::{Notification, NotificationLevel};
pub use pager::{LoadOutcome, PagerControls, VisitPager};
pub use types::{
    FileOutcome, PageResponse, PageState, PatientVisitRecord, UploadSummary, Visit, VisitRow,
    EMPTY_VISITS_TEXT, VISIT_COLUMNS,
};
pub use upload::{PendingFile, UploadController};
