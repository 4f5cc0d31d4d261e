//! # Upload Files Use Case
//!
//! ファイルアップロードユースケース

use log::{error, info};
use std::sync::Arc;

use crate::domain::entities::file_list::FileList;
use crate::domain::entities::run_outcome::RunOutcome;
use crate::domain::entities::upload_target::UploadTarget;
use crate::domain::entities::walk_root::WalkRoot;
use crate::domain::repositories::upload_repository::UploadRepository;

/// ファイルアップロードユースケース
///
/// 一覧の順に1件ずつアップロードする。ファイル単位の失敗は記録して次へ進む。
pub struct UploadFilesUseCase<U: UploadRepository + ?Sized> {
    upload_repository: Arc<U>,
}

impl<U: UploadRepository + ?Sized> UploadFilesUseCase<U> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `upload_repository` - アップロードリポジトリ
    pub fn new(upload_repository: Arc<U>) -> Self {
        Self { upload_repository }
    }

    /// ファイルをアップロードする
    ///
    /// # Arguments
    ///
    /// * `root` - 作業ルート
    /// * `files` - 作業ルートからの相対パス
    /// * `bucket` - アップロード先のバケット名
    ///
    /// # Returns
    ///
    /// 成功数と失敗数の集計
    pub async fn execute(&self, root: &WalkRoot, files: &FileList, bucket: &str) -> RunOutcome {
        let mut outcome = RunOutcome {
            total: files.len(),
            ..Default::default()
        };

        for relative in files {
            let target = UploadTarget::from_relative(root, relative);
            info!("Uploading {:?}", target.key);

            match self.upload_repository.upload(&target, bucket).await {
                Ok(()) => outcome.record_success(),
                Err(e) => {
                    outcome.record_failure();
                    error!("{}", e);
                }
            }
        }

        outcome
    }
}
