//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション
//!
//! 状態は Initializing → Walking → Uploading → Done の順にだけ進む。
//! 作業ルートの解決と走査の失敗は致命的で、アップロード中の失敗はファイル単位。

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::process::ExitCode;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::local_file_repository::LocalFileRepository;
use crate::adapter::repositories::s3_upload_repository::S3UploadRepository;
use crate::adapter::s3::client::{RealClientFactory, S3ClientFactory};
use crate::application::dto::run_config::RunConfiguration;
use crate::application::use_cases::discover_files::DiscoverFilesUseCase;
use crate::application::use_cases::upload_files::UploadFilesUseCase;
use crate::domain::entities::run_outcome::RunOutcome;
use crate::domain::entities::upload_target::object_key;
use crate::domain::repositories::upload_repository::UploadRepository;

use super::cli::Args;

/// 一部のファイルがアップロードできなかった場合の終了コード
///
/// 1 は致命的エラー、2 は clap の使い方エラーで使われる
pub const EXIT_UPLOAD_FAILURES: u8 = 3;

/// 実行結果を終了ステータスに変換
pub fn exit_status(outcome: &RunOutcome) -> u8 {
    if outcome.is_success() {
        0
    } else {
        EXIT_UPLOAD_FAILURES
    }
}

pub fn exit_code(outcome: &RunOutcome) -> ExitCode {
    ExitCode::from(exit_status(outcome))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunPhase {
    Initializing,
    Walking,
    Uploading,
    Done,
}

fn enter(phase: RunPhase) {
    debug!("Phase: {:?}", phase);
}

/// Directory Upload Workflow
pub struct DirectoryUploadWorkflow {
    config: RunConfiguration,
    discover_use_case: DiscoverFilesUseCase<LocalFileRepository>,
    client_factory: Arc<dyn S3ClientFactory>,
}

impl DirectoryUploadWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: RunConfiguration) -> Self {
        let factory = RealClientFactory::new(config.region.clone(), config.profile.clone());
        Self::with_client_factory(config, Arc::new(factory))
    }

    /// Create a workflow that builds its S3 client through `client_factory`
    pub fn with_client_factory(
        config: RunConfiguration,
        client_factory: Arc<dyn S3ClientFactory>,
    ) -> Self {
        let file_repo = Arc::new(LocalFileRepository::new());

        Self {
            config,
            discover_use_case: DiscoverFilesUseCase::new(file_repo),
            client_factory,
        }
    }

    /// Build the workflow from parsed CLI arguments, merging the optional config file
    pub fn from_args(args: Args) -> Result<Self> {
        let file_config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(Self::new(args.into_run_config(file_config)))
    }

    pub fn config(&self) -> &RunConfiguration {
        &self.config
    }

    /// Execute the upload workflow
    ///
    /// # Errors
    ///
    /// 作業ルートの解決、走査、S3クライアントの作成に失敗した場合。
    /// ファイル単位のアップロード失敗はエラーにならず、結果の `failed` に数えられる。
    pub async fn execute(&self) -> Result<RunOutcome> {
        enter(RunPhase::Initializing);
        info!("Starting directory upload...");
        debug!("Configuration: {:?}", self.config);

        if self.config.bucket.is_empty() {
            warn!("No bucket given, every upload will fail");
        }

        enter(RunPhase::Walking);
        let discovered = self
            .discover_use_case
            .execute(&self.config.dir, self.config.create_dir)
            .await
            .with_context(|| format!("cannot upload directory {:?}", self.config.dir))?;

        if self.config.dry_run {
            println!("✓ Dry-run mode (not actually uploading)");
            println!("  Would upload {} files:", discovered.files.len());
            for relative in &discovered.files {
                println!("    s3://{}/{}", self.config.bucket, object_key(relative));
            }
            enter(RunPhase::Done);
            return Ok(RunOutcome::dry_run(discovered.files.len()));
        }

        let putter = self
            .client_factory
            .create_client()
            .await
            .context("Failed to create S3 client")?;
        info!(
            "Created S3 client (region: {}, profile: {})",
            self.config.region,
            self.config.profile.as_deref().unwrap_or("default")
        );

        enter(RunPhase::Uploading);
        let upload_repo: Arc<dyn UploadRepository> = Arc::new(S3UploadRepository::new(putter));
        let upload_use_case = UploadFilesUseCase::new(upload_repo);
        let outcome = upload_use_case
            .execute(&discovered.root, &discovered.files, &self.config.bucket)
            .await;

        enter(RunPhase::Done);
        if outcome.is_success() {
            info!("[OK] uploads succeeded");
        } else {
            // ファイルごとの失敗は既に error で出ているので、まとめは warn にする
            warn!("[FAIL] not all files could be uploaded");
        }
        info!(
            "Uploaded {} of {} files ({} failed)",
            outcome.uploaded, outcome.total, outcome.failed
        );

        Ok(outcome)
    }
}
