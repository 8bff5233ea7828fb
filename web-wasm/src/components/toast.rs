//! トースト通知
//!
//! `Toaster` をcontextで配り、各ウィジェットは `push` するだけ。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use patient_admin_common::Notification;

#[derive(Clone, Debug)]
struct ToastItem {
    id: u64,
    notification: Notification,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    items: RwSignal<Vec<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// 通知を表示し、timeout後に自動で消す
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let timeout_ms = notification.timeout_ms;
        self.items.update(|items| items.push(ToastItem { id, notification }));

        let items = self.items;
        Timeout::new(timeout_ms, move || {
            items.update(|items| items.retain(|item| item.id != id));
        })
        .forget();
    }
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="toast-region">
            <For
                each=move || toaster.items.get()
                key=|item| item.id
                children=move |item| {
                    let level = item.notification.level.as_str();
                    let description = item.notification.description.clone();
                    view! {
                        <div class=format!("toast toast-{}", level) role="status">
                            <p class="toast-title">{item.notification.title.clone()}</p>
                            {description.map(|d| view! { <p class="toast-description">{d}</p> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
