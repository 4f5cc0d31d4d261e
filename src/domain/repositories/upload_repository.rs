//! # Upload Repository Trait
//!
//! オブジェクトストレージへのアップロードを抽象化

use async_trait::async_trait;

use crate::domain::entities::upload_target::UploadTarget;
use crate::domain::errors::UploadError;

/// アップロードリポジトリ
///
/// 1回の呼び出しで1つのオブジェクトを作成または上書きする
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// ファイルをアップロード
    ///
    /// # Arguments
    ///
    /// * `target` - ローカルファイルとオブジェクトキー
    /// * `bucket` - アップロード先のバケット名
    ///
    /// # Errors
    ///
    /// ファイルを開けない場合、または転送に失敗した場合にエラーを返す
    async fn upload(&self, target: &UploadTarget, bucket: &str) -> Result<(), UploadError>;
}
