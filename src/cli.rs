use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "patient-admin")]
#[command(about = "患者記録の一括アップロードと来院一覧の閲覧", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ファイルをまとめてアップロード
    Upload {
        /// アップロードするファイル
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 来院一覧を表示
    Visits {
        /// 表示するページ
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// 次/前ページを対話的に移動
        #[arg(short, long)]
        interactive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを保存
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
