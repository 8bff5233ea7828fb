//! テスト用のフェイクAPI

use crate::api::{FileHandle, PatientApi};
use crate::error::{Error, Result};
use crate::types::{PageResponse, UploadSummary};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeFile {
    name: String,
    size: u64,
}

impl FakeFile {
    pub fn new(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            size,
        }
    }
}

impl FileHandle for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// 応答を事前に仕込んでおくAPI。呼び出し回数を記録する。
#[derive(Default)]
pub struct FakeApi {
    upload: RefCell<Option<std::result::Result<UploadSummary, String>>>,
    pages: RefCell<HashMap<u32, std::result::Result<PageResponse, String>>>,
    submit_calls: Cell<usize>,
    last_batch: RefCell<Vec<String>>,
    fetched: RefCell<Vec<u32>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upload(self, result: std::result::Result<UploadSummary, String>) -> Self {
        *self.upload.borrow_mut() = Some(result);
        self
    }

    pub fn with_page(self, page: u32, result: std::result::Result<PageResponse, String>) -> Self {
        self.pages.borrow_mut().insert(page, result);
        self
    }

    pub fn set_page(&self, page: u32, result: std::result::Result<PageResponse, String>) {
        self.pages.borrow_mut().insert(page, result);
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.get()
    }

    pub fn last_batch(&self) -> Vec<String> {
        self.last_batch.borrow().clone()
    }

    pub fn fetched(&self) -> Vec<u32> {
        self.fetched.borrow().clone()
    }
}

impl PatientApi for FakeApi {
    type File = FakeFile;

    async fn submit_files(&self, files: &[FakeFile]) -> Result<UploadSummary> {
        self.submit_calls.set(self.submit_calls.get() + 1);
        *self.last_batch.borrow_mut() = files.iter().map(|f| f.name()).collect();
        match self.upload.borrow().clone() {
            Some(Ok(summary)) => Ok(summary),
            Some(Err(detail)) => Err(Error::Submit(detail)),
            None => Err(Error::Submit("no upload response configured".into())),
        }
    }

    async fn fetch_page(&self, page: u32) -> Result<PageResponse> {
        self.fetched.borrow_mut().push(page);
        match self.pages.borrow().get(&page).cloned() {
            Some(Ok(response)) => Ok(response),
            Some(Err(detail)) => Err(Error::Fetch(detail)),
            None => Err(Error::Fetch(format!("HTTP 404: page {} not found", page))),
        }
    }
}
