//! # Run Configuration DTO
//!
//! 実行設定のData Transfer Object

use std::path::PathBuf;

/// デフォルトのバケットリージョン
pub const DEFAULT_REGION: &str = "eu-west-3";

/// 実行設定
///
/// 起動時に一度だけ組み立てられ、以降は変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// アップロードするローカルディレクトリ
    pub dir: PathBuf,
    /// ディレクトリ名自体をキーの先頭に含めるかどうか
    pub create_dir: bool,
    /// バケットのリージョン（例: "eu-west-3"）
    pub region: String,
    /// アップロード先のバケット名
    pub bucket: String,
    /// 認証情報のプロファイル名（`None` ならデフォルトの解決順序）
    pub profile: Option<String>,
    /// アップロードせずに対象を一覧表示するだけ
    pub dry_run: bool,
}

impl RunConfiguration {
    /// 新しい実行設定を作成します。
    ///
    /// リージョンは [`DEFAULT_REGION`]、プロファイルなし、`create_dir` と
    /// `dry_run` は無効で初期化される。
    ///
    /// # 例
    ///
    /// ```
    /// use dirpush::application::dto::run_config::RunConfiguration;
    ///
    /// let config = RunConfiguration::new("data", "my-bucket")
    ///     .with_create_dir(true)
    ///     .with_profile(Some("staging".to_string()));
    ///
    /// assert_eq!(config.region, "eu-west-3");
    /// assert!(config.create_dir);
    /// assert_eq!(config.profile.as_deref(), Some("staging"));
    /// ```
    pub fn new(dir: impl Into<PathBuf>, bucket: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            create_dir: false,
            region: DEFAULT_REGION.to_string(),
            bucket: bucket.into(),
            profile: None,
            dry_run: false,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// 空文字列のプロファイルは `None` として扱う
    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile.filter(|p| !p.is_empty());
        self
    }

    pub fn with_create_dir(mut self, create_dir: bool) -> Self {
        self.create_dir = create_dir;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
