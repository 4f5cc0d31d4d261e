//! # WalkRoot Value Object
//!
//! 作業ルートのバリューオブジェクト

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// 作業ルート
///
/// プロセスのカレントディレクトリは変更せず、相対パスの基準となる
/// ディレクトリ（`base`）と、走査を開始するサブディレクトリ名（`prefix`）を保持する。
///
/// - `prefix` が `None` の場合は `base` 自体を走査する（オブジェクトキーに
///   ディレクトリ名を含めない）
/// - `prefix` が `Some(name)` の場合は `base/name` を走査し、全てのキーが
///   `name/` で始まる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkRoot {
    base: PathBuf,
    prefix: Option<OsString>,
}

impl WalkRoot {
    /// 新しい作業ルートを作成
    ///
    /// # Arguments
    ///
    /// * `base` - 相対パスの基準ディレクトリ（絶対パス）
    /// * `prefix` - 走査を開始するサブディレクトリ名
    pub fn new(base: PathBuf, prefix: Option<OsString>) -> Self {
        Self { base, prefix }
    }

    /// 相対パスの基準ディレクトリ
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// キーの先頭に付くディレクトリ名
    pub fn prefix(&self) -> Option<&OsStr> {
        self.prefix.as_deref()
    }

    /// 走査を開始するディレクトリ
    pub fn walk_dir(&self) -> PathBuf {
        match &self.prefix {
            Some(name) => self.base.join(name),
            None => self.base.clone(),
        }
    }

    /// 基準ディレクトリからの相対パスを絶対パスに変換
    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.base.join(relative)
    }
}
