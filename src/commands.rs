//! サブコマンド本体
//!
//! 状態は共通ライブラリのコントローラに持たせ、ここでは入出力だけを行う。

use crate::client::LocalFile;
use crate::error::{AdminError, Result};
use crate::render;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use patient_admin_common::{LoadOutcome, Notification, PatientApi, UploadController, UploadSummary, VisitPager};
use std::path::PathBuf;
use std::time::Duration;

/// アップロード結果（終了コード判定用）
pub struct UploadReport {
    pub notification: Notification,
    pub summary: Option<UploadSummary>,
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// ファイルを選択して一括送信
///
/// 存在しないファイルがあればリクエスト前にエラーにする。
pub async fn upload_files<A>(api: &A, paths: &[PathBuf], quiet: bool) -> Result<UploadReport>
where
    A: PatientApi<File = LocalFile>,
{
    if paths.is_empty() {
        return Err(AdminError::NoFilesGiven);
    }

    let files = paths
        .iter()
        .map(|p| LocalFile::open(p))
        .collect::<Result<Vec<_>>>()?;

    let mut controller = UploadController::new();
    let selected_at = chrono::Utc::now().timestamp_millis().max(0) as u64;
    controller.add_files(files, selected_at);

    if !quiet {
        print!("{}", render::render_pending(controller.pending()));
    }

    let pb = (!quiet).then(|| spinner("アップロード中..."));
    let notification = controller.submit(api).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    // 選択が空でないので必ず通知が返る
    let notification = notification.ok_or(AdminError::NoFilesGiven)?;
    Ok(UploadReport {
        notification,
        summary: controller.summary().cloned(),
    })
}

/// 指定ページを表示し、対話モードなら次/前の操作を受け付ける
pub async fn browse_visits<A: PatientApi>(api: &A, start_page: u32, interactive: bool) -> Result<()> {
    let mut pager = VisitPager::new();

    let outcome = if start_page <= 1 {
        pager.load_mount(api).await
    } else {
        pager.load_page(api, start_page).await
    };
    report_load(&outcome)?;
    print_page(&pager);

    if !interactive {
        return Ok(());
    }

    loop {
        let controls = pager.controls();
        let mut choices: Vec<(&str, PagerAction)> = Vec::new();
        if controls.next_enabled {
            choices.push(("Next", PagerAction::Next));
        }
        if controls.previous_enabled {
            choices.push(("Previous", PagerAction::Previous));
        }
        choices.push(("Quit", PagerAction::Quit));

        let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
        let selection = Select::new()
            .with_prompt(format!("page {}", pager.page()))
            .items(&labels)
            .default(0)
            .interact()?;

        let outcome = match choices[selection].1 {
            PagerAction::Next => pager.load_next(api).await,
            PagerAction::Previous => pager.load_previous(api).await,
            PagerAction::Quit => break,
        };
        match outcome {
            LoadOutcome::Failed(notification) => eprintln!("{}", render::render_notification(&notification)),
            LoadOutcome::Loaded => print_page(&pager),
            LoadOutcome::Skipped => {}
        }
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum PagerAction {
    Next,
    Previous,
    Quit,
}

/// 初回読込の失敗は終了コードに反映する
fn report_load(outcome: &LoadOutcome) -> Result<()> {
    if let LoadOutcome::Failed(notification) = outcome {
        eprintln!("{}", render::render_notification(notification));
        return Err(patient_admin_common::Error::Fetch(
            notification.description.clone().unwrap_or_default(),
        )
        .into());
    }
    Ok(())
}

fn print_page(pager: &VisitPager) {
    println!("\n📅 Patient Visits\n");
    print!("{}", render::render_visit_table(&pager.rows()));
    let footer = render::render_pager_footer(pager.page(), &pager.controls());
    if !footer.is_empty() {
        println!("\n{}", footer);
    }
}
