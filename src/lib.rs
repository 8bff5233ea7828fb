//! 患者記録管理ツール
//!
//! 共通ライブラリの状態機械を、reqwestクライアントと端末出力でつなぐ。

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
