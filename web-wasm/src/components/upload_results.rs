//! アップロード結果パネル

use leptos::prelude::*;
use patient_admin_common::{FileOutcome, UploadSummary};

#[component]
pub fn UploadResults(summary: Signal<Option<UploadSummary>>) -> impl IntoView {
    move || {
        summary.get().map(|summary| {
            let headline = summary
                .headline()
                .into_iter()
                .zip(["stat-blue", "stat-green", "stat-amber"])
                .map(|((label, value), class)| {
                    view! {
                        <div class=format!("stat-card {}", class)>
                            <p class="stat-label">{label}</p>
                            <p class="stat-value">{value}</p>
                        </div>
                    }
                })
                .collect_view();

            let outcomes = summary
                .per_file
                .into_iter()
                .map(|outcome| view! { <FileOutcomeCard outcome=outcome /> })
                .collect_view();

            view! {
                <div class="upload-results">
                    <h3>"Upload Results"</h3>
                    <div class="stat-grid">{headline}</div>
                    <div class="file-outcomes">{outcomes}</div>
                </div>
            }
        })
    }
}

#[component]
fn FileOutcomeCard(outcome: FileOutcome) -> impl IntoView {
    let error_count = outcome.errors.len();
    let errors = (error_count > 0).then(|| {
        view! {
            <div class="file-errors">
                <div class="file-errors-title">{format!("⚠ Errors ({})", error_count)}</div>
                <ul>
                    {outcome.errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                </ul>
            </div>
        }
    });

    view! {
        <div class="file-outcome">
            <h4>"📁 " {outcome.file_name}</h4>
            <div class="file-outcome-counts">
                <span>
                    <strong>{outcome.added}</strong>
                    " records added"
                </span>
                <span>
                    <strong>{outcome.duplicates}</strong>
                    " duplicates found"
                </span>
            </div>
            {errors}
        </div>
    }
}
