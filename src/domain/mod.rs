//! # Domain Layer
//!
//! このモジュールはアップロード処理の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - AWS SDK やファイルシステム走査ライブラリについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（WalkRoot, FileList, UploadTarget, RunOutcome）
//! - **errors**: エラー分類（FilesystemError は致命的、UploadError はファイル単位）
//! - **repositories**: Repository trait（インターフェース定義のみ）

pub mod entities;
pub mod errors;
pub mod repositories;
