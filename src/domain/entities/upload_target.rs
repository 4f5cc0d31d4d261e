//! # UploadTarget Value Object
//!
//! ローカルファイルとオブジェクトキーの組

use std::path::{Component, Path, PathBuf};

use super::walk_root::WalkRoot;

/// 相対パスからオブジェクトキーを作る
///
/// OSのパス区切り文字に関係なく `/` で連結する。
/// UTF-8 でない要素は置換文字に変換される。
pub fn object_key(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// アップロード対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    /// 読み込むローカルファイル（絶対パス）
    pub local_path: PathBuf,
    /// バケット内のオブジェクトキー
    pub key: String,
}

impl UploadTarget {
    /// 作業ルートからの相対パスでアップロード対象を作成
    ///
    /// ```
    /// use std::path::{Path, PathBuf};
    /// use dirpush::domain::entities::upload_target::UploadTarget;
    /// use dirpush::domain::entities::walk_root::WalkRoot;
    ///
    /// let root = WalkRoot::new(PathBuf::from("/srv"), Some("data".into()));
    /// let target = UploadTarget::from_relative(&root, Path::new("data/sub/b.txt"));
    ///
    /// assert_eq!(target.key, "data/sub/b.txt");
    /// assert_eq!(target.local_path, PathBuf::from("/srv/data/sub/b.txt"));
    /// ```
    pub fn from_relative(root: &WalkRoot, relative: &Path) -> Self {
        Self {
            local_path: root.absolute(relative),
            key: object_key(relative),
        }
    }
}
