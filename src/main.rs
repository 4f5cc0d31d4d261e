//! Dirpush - Directory Uploader
//!
//! ローカルディレクトリを S3 バケットにアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use clap::Parser;
use log::error;
use std::process::ExitCode;

use dirpush::driver::{exit_code, normalize_args, Args, DirectoryUploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse_from(normalize_args(std::env::args_os()));

    // Load configuration and create workflow with injected dependencies
    let workflow = match DirectoryUploadWorkflow::from_args(args) {
        Ok(workflow) => workflow,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match workflow.execute().await {
        Ok(outcome) => exit_code(&outcome),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
