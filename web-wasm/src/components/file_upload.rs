//! 一括アップロードウィジェット
//!
//! 状態は `UploadController` に持たせ、このコンポーネントは
//! イベントを流し込んで結果を描くだけ。

use crate::api::{FetchApi, WebFile};
use crate::components::toast::Toaster;
use crate::components::upload_area::UploadArea;
use crate::components::upload_results::UploadResults;
use leptos::prelude::*;
use leptos::task::spawn_local;
use patient_admin_common::{
    format_file_size, FileHandle, Notification, PatientApi, UploadController,
};

/// 一覧表示用（web_sys::Fileを持ち回らない）
#[derive(Clone, Debug, PartialEq)]
struct PendingRow {
    id: String,
    name: String,
    size: String,
}

#[component]
pub fn FileUpload() -> impl IntoView {
    let api = expect_context::<FetchApi>();
    let toaster = expect_context::<Toaster>();
    let controller = RwSignal::new_local(UploadController::<WebFile>::new());

    let on_files_added = Callback::new(move |files: Vec<WebFile>| {
        let selected_at = js_sys::Date::now() as u64;
        controller.update(|c| {
            c.add_files(files, selected_at);
        });
    });

    let pending_rows = move || {
        controller.with(|c| {
            c.pending()
                .iter()
                .map(|p| PendingRow {
                    id: p.id.clone(),
                    name: p.file.name(),
                    size: format_file_size(p.file.size()),
                })
                .collect::<Vec<_>>()
        })
    };
    let pending_count = move || controller.with(|c| c.pending().len());
    let is_uploading = move || controller.with(|c| c.is_uploading());
    let summary = Signal::derive(move || controller.with(|c| c.summary().cloned()));

    let on_upload = move |_| {
        // ガードで弾かれたら何もしない（多重クリック対策）
        let Some(batch) = controller.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let result = api.submit_files(&batch).await;
            // タブ切替で破棄済みでも通知は出す
            let fallback = Notification::for_submit(&result);
            let notification = controller
                .try_update(|c| c.finish_submit(result))
                .unwrap_or(fallback);
            toaster.push(notification);
        });
    };

    view! {
        <div class="file-upload">
            <UploadArea on_files_added=on_files_added />

            <Show when=move || { pending_count() > 0 }>
                <div class="selected-files">
                    <div class="selected-files-header">
                        <h3>{move || format!("Selected Files ({})", pending_count())}</h3>
                        <button
                            class="btn btn-bordered"
                            on:click=move |_| controller.update(|c| c.clear_all())
                        >
                            "Clear All"
                        </button>
                    </div>
                    <div class="selected-files-list">
                        <For
                            each=pending_rows
                            key=|row| row.id.clone()
                            children=move |row| {
                                let id = row.id.clone();
                                view! {
                                    <div class="selected-file">
                                        <span class="file-name">"📄 " {row.name}</span>
                                        <span class="file-size">{row.size}</span>
                                        <button
                                            class="btn btn-ghost btn-icon"
                                            title="Remove"
                                            on:click=move |_| {
                                                controller.update(|c| {
                                                    c.remove_file(&id);
                                                })
                                            }
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <button
                        class="btn btn-primary btn-large"
                        disabled=is_uploading
                        on:click=on_upload.clone()
                    >
                        {move || if is_uploading() { "Uploading..." } else { "Upload Files" }}
                    </button>
                </div>
            </Show>

            <UploadResults summary=summary />
        </div>
    }
}
