use crate::error::{AdminError, Result};
use patient_admin_common::{ApiEndpoints, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数でベースURLを上書き
pub const API_URL_ENV: &str = "PATIENT_ADMIN_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdminError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("patient-admin").join("config.json"))
    }

    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn endpoints(&self, override_url: Option<&str>) -> Result<ApiEndpoints> {
        let env_url = std::env::var(API_URL_ENV).ok().filter(|s| !s.trim().is_empty());
        let url = override_url
            .map(str::to_string)
            .or(env_url)
            .unwrap_or_else(|| self.api_base_url.clone());
        Ok(ApiEndpoints::new(&url)?)
    }

    pub fn set_api_base_url(&mut self, url: String) -> Result<()> {
        // 保存前に形式だけ確認
        let endpoints = ApiEndpoints::new(&url)?;
        self.api_base_url = endpoints.base_url().to_string();
        self.save()
    }
}
