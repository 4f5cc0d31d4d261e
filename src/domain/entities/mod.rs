//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **WalkRoot**: 作業ルートと走査開始ディレクトリ
//! - **FileList**: 走査で見つかったファイルの相対パス一覧
//! - **UploadTarget**: ローカルファイルとオブジェクトキーの組
//! - **RunOutcome**: 実行結果の集計

pub mod file_list;
pub mod run_outcome;
pub mod upload_target;
pub mod walk_root;
