//! メインアプリケーションコンポーネント

use crate::api::FetchApi;
use crate::components::{
    file_upload::FileUpload,
    header::Header,
    toast::{ToastRegion, Toaster},
    visit_table::VisitTable,
};
use leptos::prelude::*;

/// 表示中のタブ
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    PatientVisits,
    FileUpload,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::PatientVisits => "Patient Visits",
            Tab::FileUpload => "File Upload",
        }
    }
}

/// メインアプリケーションコンポーネント
///
/// タブを切り替えると非表示側のウィジェットは破棄される
/// （再表示時は一覧がページ1から読み直される）。
#[component]
pub fn App() -> impl IntoView {
    provide_context(FetchApi::from_build_env());
    provide_context(Toaster::new());

    let (tab, set_tab) = signal(Tab::PatientVisits);

    let tab_button = move |t: Tab| {
        view! {
            <button
                class=move || if tab.get() == t { "tab active" } else { "tab" }
                on:click=move |_| set_tab.set(t)
            >
                {t.title()}
            </button>
        }
    };

    view! {
        <ToastRegion />
        <div class="layout">
            <Header />
            <main class="container">
                <div class="page-title">
                    <h1>"Patient Management"</h1>
                    <p class="text-muted">"View and manage patient information and visits"</p>
                </div>

                <div class="tabs">
                    {tab_button(Tab::PatientVisits)}
                    {tab_button(Tab::FileUpload)}
                </div>

                <div class="tab-panel">
                    <Show when=move || tab.get() == Tab::PatientVisits>
                        <VisitTable />
                    </Show>
                    <Show when=move || tab.get() == Tab::FileUpload>
                        <div class="card">
                            <h2>"Upload Patient Files"</h2>
                            <p class="text-muted">"Select multiple files to upload to the patient records"</p>
                            <FileUpload />
                        </div>
                    </Show>
                </div>
            </main>
        </div>
    }
}
