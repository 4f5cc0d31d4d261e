//! Local File Repository Implementation
//!
//! FileRepositoryのローカルファイルシステム実装

use async_trait::async_trait;
use log::{debug, info};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::file_list::FileList;
use crate::domain::entities::walk_root::WalkRoot;
use crate::domain::errors::FilesystemError;
use crate::domain::repositories::file_repository::FileRepository;

/// ローカルファイルシステムベースのファイルリポジトリ
pub struct LocalFileRepository;

/// 先頭の `~` をホームディレクトリに展開する
///
/// UTF-8 でないパスはそのまま返す
pub fn expand_tilde(dir: &Path) -> PathBuf {
    match dir.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => dir.to_path_buf(),
    }
}

impl LocalFileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 作業ルートを解決する（内部実装）
    ///
    /// 引数の最後の要素が通常の名前なら、それをそのままプレフィックスにする
    /// （シンボリックリンクでもリンク名が使われる）。`.` や `..` で終わる場合だけ
    /// 正規化後の実際のディレクトリ名を使う。
    fn resolve_walk_root_internal(
        dir: &Path,
        create_dir: bool,
    ) -> Result<WalkRoot, FilesystemError> {
        let expanded = expand_tilde(dir);

        let target = fs::canonicalize(&expanded).map_err(|source| FilesystemError::Resolve {
            path: expanded.clone(),
            source,
        })?;

        let metadata = fs::metadata(&target).map_err(|source| FilesystemError::Resolve {
            path: expanded.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(FilesystemError::NotADirectory { path: expanded });
        }

        if !create_dir {
            return Ok(WalkRoot::new(target, None));
        }

        if let Some(Component::Normal(name)) = expanded.components().next_back() {
            let parent = match expanded.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let base = fs::canonicalize(parent).map_err(|source| FilesystemError::Resolve {
                path: parent.to_path_buf(),
                source,
            })?;
            return Ok(WalkRoot::new(base, Some(name.to_os_string())));
        }

        match (target.parent(), target.file_name()) {
            (Some(parent), Some(name)) => {
                Ok(WalkRoot::new(parent.to_path_buf(), Some(name.to_os_string())))
            }
            _ => Err(FilesystemError::NoBaseName { path: target }),
        }
    }

    /// ファイルを発見する（内部実装）
    ///
    /// ディレクトリ以外のエントリを全て対象にする。シンボリックリンクは辿らない。
    fn collect_files_internal(root: &WalkRoot) -> Result<FileList, FilesystemError> {
        let walk_dir = root.walk_dir();
        let mut files = Vec::new();

        for entry in WalkDir::new(&walk_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| FilesystemError::Walk {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| walk_dir.clone()),
                source: e.into(),
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root.base())
                .unwrap_or(entry.path())
                .to_path_buf();
            debug!("Found {}", relative.display());
            files.push(relative);
        }

        info!("Found {} files in {}", files.len(), walk_dir.display());

        Ok(FileList::new(files))
    }
}

#[async_trait]
impl FileRepository for LocalFileRepository {
    async fn resolve_walk_root(
        &self,
        dir: &Path,
        create_dir: bool,
    ) -> Result<WalkRoot, FilesystemError> {
        let dir = dir.to_path_buf();
        run_blocking(move || Self::resolve_walk_root_internal(&dir, create_dir)).await
    }

    async fn collect_files(&self, root: &WalkRoot) -> Result<FileList, FilesystemError> {
        // 非同期なので、tokio::task::spawn_blockingでラップ
        let root = root.clone();
        run_blocking(move || Self::collect_files_internal(&root)).await
    }
}

/// ブロッキング処理をスレッドプールで実行する
///
/// タスクのパニックやキャンセルは走査エラーとして扱う
async fn run_blocking<T, F>(f: F) -> Result<T, FilesystemError>
where
    F: FnOnce() -> Result<T, FilesystemError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| FilesystemError::Walk {
            path: PathBuf::new(),
            source: std::io::Error::other(format!("Failed to spawn blocking task: {}", e)),
        })?
}

impl Default for LocalFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
