//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::adapter::config::Config;
use crate::application::dto::run_config::{RunConfiguration, DEFAULT_REGION};

/// 1つのダッシュでも受け付けるロングフラグ
const SINGLE_DASH_FLAGS: &[&str] = &[
    "region",
    "bucket",
    "profile",
    "createDir",
    "dryRun",
    "config",
];

/// ローカルディレクトリをS3バケットにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "dirpush")]
#[command(about = "Upload a local directory tree to an S3 bucket", long_about = None)]
pub struct Args {
    /// Bucket region [default: eu-west-3]
    #[arg(long)]
    pub region: Option<String>,

    /// Name of the bucket to upload files to
    #[arg(long)]
    pub bucket: Option<String>,

    /// AWS profile name for credentials
    #[arg(long)]
    pub profile: Option<String>,

    /// Create the base directory in the bucket
    #[arg(
        long = "createDir",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub create_dir: Option<bool>,

    /// List the objects that would be uploaded, without uploading
    #[arg(long = "dryRun")]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Local directory to upload
    pub dir: PathBuf,
}

impl Args {
    /// 設定ファイルの値とマージして実行設定を作る
    ///
    /// 優先順位: フラグ > 設定ファイル > デフォルト値
    pub fn into_run_config(self, file: Config) -> RunConfiguration {
        let region = self
            .region
            .or(file.region)
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        RunConfiguration::new(self.dir, self.bucket.or(file.bucket).unwrap_or_default())
            .with_region(region)
            .with_profile(self.profile.or(file.profile))
            .with_create_dir(self.create_dir.or(file.create_dir).unwrap_or(false))
            .with_dry_run(self.dry_run)
    }
}

/// `-region eu-west-1` のようなダッシュ1つのロングフラグを `--region` に書き換える
///
/// 既知のフラグ名だけを対象にし、`--` 以降はそのまま渡す
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut end_of_flags = false;

    args.into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| {
            if end_of_flags {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    end_of_flags = true;
                    None
                }
                Some(s) if is_single_dash_long_flag(s) => Some(OsString::from(format!("-{}", s))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split('=').next().unwrap_or(rest);
            SINGLE_DASH_FLAGS.contains(&name)
        }
        _ => false,
    }
}
