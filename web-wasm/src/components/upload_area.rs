//! アップロードエリアコンポーネント（ドラッグ&ドロップ／クリックで選択）

use crate::api::{collect_files, WebFile};
use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};

#[component]
pub fn UploadArea(on_files_added: Callback<Vec<WebFile>>) -> impl IntoView {
    let (is_dragging, set_is_dragging) = signal(false);
    let input_ref: NodeRef<Input> = NodeRef::new();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            let files = collect_files(&files);
            if !files.is_empty() {
                on_files_added.run(files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            let files = collect_files(&files);
            if !files.is_empty() {
                on_files_added.run(files);
            }
        }
        // 同じファイルを続けて選んでもchangeが発火するように
        input.set_value("");
    };

    view! {
        <input
            type="file"
            class="hidden"
            multiple=true
            node_ref=input_ref
            on:change=on_change
        />
        <div
            class=move || {
                if is_dragging.get() { "upload-area dragging" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"⬆"</div>
            <h3>"Drag and drop files here"</h3>
            <p class="text-muted">"or " <span class="link">"browse files"</span></p>
            <p class="text-small">"Support for multiple files"</p>
        </div>
    }
}
