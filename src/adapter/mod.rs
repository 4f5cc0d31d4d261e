//! Adapter Layer
//!
//! 外部システム（S3, ファイルシステム, 設定ファイル）との統合

pub mod auth;
pub mod config;
pub mod repositories;
pub mod s3;
