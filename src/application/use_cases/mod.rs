//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverFilesUseCase**: 作業ルートの解決とファイルの発見
//! - **UploadFilesUseCase**: ファイルの逐次アップロード

pub mod discover_files;
pub mod upload_files;
