//! 設定ファイルテスト

use patient_admin::config::Config;
use patient_admin::error::AdminError;
use tempfile::tempdir;

/// 設定ファイルがなければデフォルト
#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.api_base_url, "http://localhost:8000/api/v1");
}

/// 保存と再読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        api_base_url: "https://records.example.org/api/v1".to_string(),
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// キーが欠けていてもデフォルトで補う
#[test]
fn test_load_empty_object() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, Config::default());
}

/// 壊れたJSON
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, AdminError::JsonParse(_)));
}

/// 引数のURLが最優先
#[test]
fn test_endpoints_override() {
    let config = Config::default();
    let endpoints = config.endpoints(Some("http://10.0.0.5:9000/api/v1/")).unwrap();

    assert_eq!(endpoints.base_url(), "http://10.0.0.5:9000/api/v1");
    assert_eq!(
        endpoints.bulk_upload_url(),
        "http://10.0.0.5:9000/api/v1/patient/bulk_upload/"
    );
}

/// 不正なURLはCommon(Config)エラー
#[test]
fn test_endpoints_invalid_override() {
    let config = Config::default();
    let err = config.endpoints(Some("ftp://nowhere")).unwrap_err();

    assert!(matches!(
        err,
        AdminError::Common(patient_admin_common::Error::Config(_))
    ));
}
