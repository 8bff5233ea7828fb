//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <span class="brand">"Sarc Medic"</span>
            <span class="nav-item">"Dashboard"</span>
        </header>
    }
}
