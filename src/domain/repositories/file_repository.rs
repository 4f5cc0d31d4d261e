//! # File Repository Trait
//!
//! 作業ルートの解決とファイルの発見を抽象化

use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::file_list::FileList;
use crate::domain::entities::walk_root::WalkRoot;
use crate::domain::errors::FilesystemError;

/// ファイルリポジトリ
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// 作業ルートを解決する
    ///
    /// # Arguments
    ///
    /// * `dir` - アップロードするローカルディレクトリ
    /// * `create_dir` - ディレクトリ名自体をキーの先頭に含めるかどうか
    ///
    /// # Errors
    ///
    /// ディレクトリが存在しない、またはアクセスできない場合にエラーを返す
    async fn resolve_walk_root(
        &self,
        dir: &Path,
        create_dir: bool,
    ) -> Result<WalkRoot, FilesystemError>;

    /// 作業ルート配下の全ファイルを発見する
    ///
    /// # Returns
    ///
    /// 作業ルートからの相対パスのリスト（ディレクトリは含まない）
    ///
    /// # Errors
    ///
    /// 走査中のエラーが1件でもあれば、途中結果を捨ててエラーを返す
    async fn collect_files(&self, root: &WalkRoot) -> Result<FileList, FilesystemError>;
}
