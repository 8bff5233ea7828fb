//! 端末向けの出力整形

use patient_admin_common::{
    format_file_size, Notification, NotificationLevel, PagerControls, PendingFile, FileHandle,
    UploadSummary, VisitRow, EMPTY_VISITS_TEXT, VISIT_COLUMNS,
};

/// 選択ファイル一覧
pub fn render_pending<F: FileHandle>(pending: &[PendingFile<F>]) -> String {
    let mut out = format!("Selected Files ({})\n", pending.len());
    for p in pending {
        out.push_str(&format!("  - {}  ({})\n", p.file.name(), format_file_size(p.file.size())));
    }
    out
}

/// アップロード結果
pub fn render_summary(summary: &UploadSummary) -> String {
    let mut out = String::from("Upload Results\n");
    for (label, value) in summary.headline() {
        out.push_str(&format!("  {:<16} {}\n", label, value));
    }

    for outcome in &summary.per_file {
        out.push_str(&format!("\n  📄 {}\n", outcome.file_name));
        out.push_str(&format!("     {} records added\n", outcome.added));
        out.push_str(&format!("     {} duplicates found\n", outcome.duplicates));
        if !outcome.errors.is_empty() {
            out.push_str(&format!("     Errors ({})\n", outcome.errors.len()));
            for error in &outcome.errors {
                out.push_str(&format!("       • {}\n", error));
            }
        }
    }
    out
}

pub fn render_notification(notification: &Notification) -> String {
    let mark = match notification.level {
        NotificationLevel::Success => "✔",
        NotificationLevel::Error => "✖",
    };
    match &notification.description {
        Some(description) if !description.is_empty() => {
            format!("{} {}\n  {}", mark, notification.title, description)
        }
        _ => format!("{} {}", mark, notification.title),
    }
}

/// 来院一覧テーブル
pub fn render_visit_table(rows: &[VisitRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY_VISITS_TEXT);
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.mr_number.to_string(),
                r.patient_name.clone(),
                r.dob.clone(),
                r.visited_date.clone(),
                r.reason.clone(),
            ]
        })
        .collect();

    let mut widths = VISIT_COLUMNS.map(|c| c.chars().count());
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |values: Vec<&str>| -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:<width$}", v, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = line(VISIT_COLUMNS.to_vec());
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &cells {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

/// ページ表示の脚注（ボタン非表示なら空）
pub fn render_pager_footer(page: u32, controls: &PagerControls) -> String {
    if !controls.visible {
        return String::new();
    }
    let previous = if controls.previous_enabled { "‹ Previous" } else { "  -" };
    let next = if controls.next_enabled { "Next ›" } else { "-" };
    format!("{}   page {}   {}", previous, page, next)
}
