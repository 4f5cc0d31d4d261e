//! # Discover Files Use Case
//!
//! ファイル発見ユースケース

use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::file_list::FileList;
use crate::domain::entities::walk_root::WalkRoot;
use crate::domain::errors::FilesystemError;
use crate::domain::repositories::file_repository::FileRepository;

/// 発見されたファイル
#[derive(Debug, Clone)]
pub struct DiscoveredFiles {
    /// 相対パスの基準となる作業ルート
    pub root: WalkRoot,
    /// 作業ルートからの相対パス
    pub files: FileList,
}

/// ファイル発見ユースケース
///
/// 作業ルートを解決し、その配下のファイルを全て発見する
pub struct DiscoverFilesUseCase<R: FileRepository> {
    file_repository: Arc<R>,
}

impl<R: FileRepository> DiscoverFilesUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `file_repository` - ファイルリポジトリ
    pub fn new(file_repository: Arc<R>) -> Self {
        Self { file_repository }
    }

    /// ファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `dir` - アップロードするローカルディレクトリ
    /// * `create_dir` - ディレクトリ名自体をキーの先頭に含めるかどうか
    ///
    /// # Errors
    ///
    /// 作業ルートの解決、または走査に失敗した場合にエラーを返す。
    /// どちらも致命的で、部分的な結果は返さない。
    pub async fn execute(
        &self,
        dir: &Path,
        create_dir: bool,
    ) -> Result<DiscoveredFiles, FilesystemError> {
        let root = self
            .file_repository
            .resolve_walk_root(dir, create_dir)
            .await?;
        info!("Working root: {}", root.base().display());

        let files = self.file_repository.collect_files(&root).await?;

        Ok(DiscoveredFiles { root, files })
    }
}
