//! 来院一覧のページ送り
//!
//! 次/前ページの有無はサーバーの `next` / `previous` をそのまま信じる。
//! 総ページ数はクライアントでは持たない。

use crate::api::PatientApi;
use crate::error::Result;
use crate::notification::Notification;
use crate::types::{PageResponse, PageState, VisitRow};

/// ページ送りボタンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagerControls {
    /// 次・前のどちらかがあるときだけ表示
    pub visible: bool,
    pub next_enabled: bool,
    pub previous_enabled: bool,
    pub loading: bool,
}

/// 読込結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// ガードで弾かれた（リクエストなし）
    Skipped,
    Loaded,
    Failed(Notification),
}

#[derive(Debug, Clone, Default)]
pub struct VisitPager {
    state: PageState,
    /// 取得中のページ番号（in-flightガード）
    loading: Option<u32>,
}

impl VisitPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// 取得中ならそのページ、そうでなければ表示中のページ
    pub fn page(&self) -> u32 {
        self.loading.unwrap_or(self.state.current_page)
    }

    pub fn rows(&self) -> Vec<VisitRow> {
        self.state.rows()
    }

    pub fn controls(&self) -> PagerControls {
        let loading = self.is_loading();
        PagerControls {
            visible: self.state.has_next || self.state.has_previous,
            next_enabled: self.state.has_next && !loading,
            previous_enabled: self.state.has_previous && !loading,
            loading,
        }
    }

    /// 初回表示: 表示中のページ（初期値1）を読み込む
    pub fn mount(&mut self) -> Option<u32> {
        self.request_page(self.state.current_page)
    }

    pub fn next_page(&mut self) -> Option<u32> {
        if !self.state.has_next {
            return None;
        }
        let next = self.state.current_page.checked_add(1)?;
        self.request_page(next)
    }

    pub fn previous_page(&mut self) -> Option<u32> {
        if !self.state.has_previous || self.state.current_page <= 1 {
            return None;
        }
        self.request_page(self.state.current_page - 1)
    }

    /// 任意ページの読込開始。取得中、または0ページなら `None`
    pub fn request_page(&mut self, page: u32) -> Option<u32> {
        if self.loading.is_some() || page == 0 {
            return None;
        }
        self.loading = Some(page);
        Some(page)
    }

    /// 読込完了
    ///
    /// 成功時はPageStateを丸ごと置き換える。失敗時は表示中のデータを
    /// そのまま残し、エラー通知を返す。
    pub fn finish_load(&mut self, page: u32, result: Result<PageResponse>) -> Option<Notification> {
        self.loading = None;
        match result {
            Ok(response) => {
                log::debug!("page {} loaded: {} record(s)", page, response.results.len());
                self.state = PageState::from_response(page, response);
                None
            }
            Err(e) => {
                log::error!("Error fetching patient records (page {}): {}", page, e);
                Some(Notification::for_fetch(&e))
            }
        }
    }

    async fn load<A: PatientApi>(&mut self, api: &A, requested: Option<u32>) -> LoadOutcome {
        let Some(page) = requested else {
            return LoadOutcome::Skipped;
        };
        let result = api.fetch_page(page).await;
        match self.finish_load(page, result) {
            Some(notification) => LoadOutcome::Failed(notification),
            None => LoadOutcome::Loaded,
        }
    }

    pub async fn load_mount<A: PatientApi>(&mut self, api: &A) -> LoadOutcome {
        let requested = self.mount();
        self.load(api, requested).await
    }

    pub async fn load_next<A: PatientApi>(&mut self, api: &A) -> LoadOutcome {
        let requested = self.next_page();
        self.load(api, requested).await
    }

    pub async fn load_previous<A: PatientApi>(&mut self, api: &A) -> LoadOutcome {
        let requested = self.previous_page();
        self.load(api, requested).await
    }

    pub async fn load_page<A: PatientApi>(&mut self, api: &A, page: u32) -> LoadOutcome {
        let requested = self.request_page(page);
        self.load(api, requested).await
    }
}
