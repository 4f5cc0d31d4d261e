//! # Domain Errors
//!
//! エラー分類
//!
//! - **FilesystemError**: 作業ルートの解決やディレクトリ走査の失敗。致命的で、
//!   アップロードは一切行わない
//! - **UploadError**: ファイル単位のアップロード失敗。記録して次のファイルへ進む

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// ファイルシステムエラー（致命的）
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("unable to resolve working directory for {path:?}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path:?} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("{path:?} has no base name to use as bucket prefix")]
    NoBaseName { path: PathBuf },

    #[error("cannot parse directory {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// アップロードエラー（ファイル単位）
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unable to open file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to upload {path:?} to {bucket:?}: {source}")]
    Transfer {
        path: PathBuf,
        bucket: String,
        #[source]
        source: anyhow::Error,
    },
}
