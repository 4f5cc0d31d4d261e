//! # FileList Value Object
//!
//! 走査結果のファイル一覧

use std::path::PathBuf;

/// ファイル一覧
///
/// 作業ルートからの相対パスを走査順に保持する。ディレクトリは含まない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    paths: Vec<PathBuf>,
}

impl FileList {
    /// 新しいファイル一覧を作成
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// ファイル数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// 一覧が空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// パスへの参照を返す
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }
}

impl From<Vec<PathBuf>> for FileList {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::new(paths)
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_list_new() {
        let list = FileList::new(vec![PathBuf::from("a.txt"), PathBuf::from("sub/b.txt")]);

        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.paths()[1], PathBuf::from("sub/b.txt"));
    }

    #[test]
    fn test_file_list_empty() {
        let list = FileList::default();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_file_list_iter_keeps_order() {
        let list: FileList = vec![PathBuf::from("b"), PathBuf::from("a")].into();

        let collected: Vec<_> = list.iter().cloned().collect();

        assert_eq!(collected, vec![PathBuf::from("b"), PathBuf::from("a")]);
    }
}
