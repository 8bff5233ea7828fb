use clap::Parser;
use patient_admin::{cli, client, commands, config, error, render};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Upload { files, json } => {
            let endpoints = config.endpoints(cli.api_url.as_deref())?;
            let api = client::HttpApi::new(endpoints);

            if !json {
                println!("📤 patient-admin - 一括アップロード\n");
            }
            let report = commands::upload_files(&api, &files, json).await?;

            if json {
                if report.notification.is_error() {
                    eprintln!("{}", render::render_notification(&report.notification));
                }
                println!("{}", serde_json::to_string_pretty(&report.summary)?);
            } else {
                println!("{}", render::render_notification(&report.notification));
                if let Some(summary) = &report.summary {
                    println!();
                    print!("{}", render::render_summary(summary));
                }
            }

            if report.notification.is_error() {
                std::process::exit(1);
            }
        }

        Commands::Visits { page, interactive } => {
            let endpoints = config.endpoints(cli.api_url.as_deref())?;
            let api = client::HttpApi::new(endpoints);
            commands::browse_visits(&api, page, interactive).await?;
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_base_url(url)?;
                println!("✔ APIのベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIベースURL: {}", config.api_base_url);
                println!("  設定ファイル: {}", Config::config_path()?.display());
                if let Ok(env_url) = std::env::var(config::API_URL_ENV) {
                    println!("  環境変数 {}: {}", config::API_URL_ENV, env_url);
                }
            }
        }
    }

    Ok(())
}
