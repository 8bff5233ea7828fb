//! 来院一覧テーブル
//!
//! 1患者×1来院を1行に展開して表示する。ページ送りはサーバーの
//! next/previous をそのまま使う。

use crate::api::FetchApi;
use crate::components::toast::Toaster;
use leptos::prelude::*;
use leptos::task::spawn_local;
use patient_admin_common::{
    Notification, PatientApi, VisitPager, EMPTY_VISITS_TEXT, VISIT_COLUMNS,
};

#[component]
pub fn VisitTable() -> impl IntoView {
    let api = expect_context::<FetchApi>();
    let toaster = expect_context::<Toaster>();
    let pager = RwSignal::new(VisitPager::new());

    // 読込開始済みのページを取得して結果を反映
    let load = move |requested: Option<u32>, api: FetchApi| {
        let Some(page) = requested else {
            return;
        };
        spawn_local(async move {
            let result = api.fetch_page(page).await;
            // 破棄済みでもエラー通知は出す
            let fallback = result.as_ref().err().map(Notification::for_fetch);
            let notification = pager
                .try_update(|p| p.finish_load(page, result))
                .unwrap_or(fallback);
            if let Some(notification) = notification {
                toaster.push(notification);
            }
        });
    };

    // 初回表示でページ1
    load(pager.try_update(|p| p.mount()).flatten(), api.clone());

    let on_next = {
        let api = api.clone();
        move |_| load(pager.try_update(|p| p.next_page()).flatten(), api.clone())
    };
    let on_previous = {
        let api = api.clone();
        move |_| load(pager.try_update(|p| p.previous_page()).flatten(), api.clone())
    };

    let rows = move || pager.with(|p| p.rows());
    let controls = move || pager.with(|p| p.controls());
    let is_empty = move || pager.with(|p| p.rows().is_empty());

    view! {
        <div class="visit-table">
            <div class="visit-table-title">
                <span class="icon">"📅"</span>
                <p>"Patient Visits"</p>
            </div>
            <table class=move || if controls().loading { "table loading" } else { "table" }>
                <thead>
                    <tr>
                        {VISIT_COLUMNS.iter().map(|name| view! { <th>{*name}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <Show when=is_empty>
                        <tr>
                            <td class="empty" colspan=VISIT_COLUMNS.len().to_string()>{EMPTY_VISITS_TEXT}</td>
                        </tr>
                    </Show>
                    <For
                        each=rows
                        // 行番号キーはページをまたいで重複するので行全体をキーにする
                        key=|row| row.clone()
                        children=move |row| {
                            view! {
                                <tr>
                                    <td>{row.mr_number}</td>
                                    <td class="patient-name">"👤 " {row.patient_name}</td>
                                    <td>{row.dob}</td>
                                    <td>{row.visited_date}</td>
                                    <td>{row.reason}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || controls().visible>
                <div class="pager">
                    <button
                        class="btn btn-primary"
                        disabled=move || !controls().next_enabled
                        on:click=on_next.clone()
                    >
                        {move || if controls().loading { "Loading..." } else { "Next" }}
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || !controls().previous_enabled
                        on:click=on_previous.clone()
                    >
                        {move || if controls().loading { "Loading..." } else { "Previous" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
