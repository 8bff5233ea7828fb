//! ブラウザ上でのファイルハンドル確認（wasm-pack test --headless --chrome）

use patient_admin_common::{FileHandle, UploadController};
use patient_admin_wasm::api::WebFile;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn web_file(name: &str, content: &str) -> WebFile {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    web_sys::File::new_with_str_sequence(&parts, name)
        .expect("File生成失敗")
        .into()
}

#[wasm_bindgen_test]
fn web_file_reports_name_and_size() {
    let file = web_file("a.csv", "mr_number\n7\n");
    assert_eq!(file.name(), "a.csv");
    assert_eq!(file.size(), 12);
}

#[wasm_bindgen_test]
fn same_name_files_get_distinct_ids() {
    let mut controller = UploadController::new();
    let ids = controller.add_files(vec![web_file("a.csv", "x"), web_file("a.csv", "y")], 42);

    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(controller.begin_submit().map(|b| b.len()), Some(2));
}
