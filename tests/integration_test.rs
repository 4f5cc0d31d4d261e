//! Integration tests for dirpush
//!
//! These tests run the compiled binary end-to-end.
//! The live S3 test requires AWS credentials to run.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn dirpush() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dirpush"));
    cmd.env("RUST_LOG", "info");
    cmd
}

fn create_test_data(temp_dir: &TempDir) -> std::path::PathBuf {
    let data = temp_dir.path().join("data");
    fs::create_dir_all(data.join("sub")).unwrap();
    fs::write(data.join("a.txt"), "alpha").unwrap();
    fs::write(data.join("sub").join("b.txt"), "bravo").unwrap();
    data
}

#[test]
fn test_missing_directory_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let output = dirpush()
        .args(["-bucket", "my-bucket"])
        .arg(&missing)
        .output()
        .expect("Failed to run dirpush");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unable to resolve working directory"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_missing_positional_argument_is_usage_error() {
    let output = dirpush()
        .args(["-bucket", "my-bucket"])
        .output()
        .expect("Failed to run dirpush");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_dry_run_lists_keys() {
    let temp_dir = TempDir::new().unwrap();
    let data = create_test_data(&temp_dir);

    let output = dirpush()
        .args(["-bucket", "my-bucket", "-dryRun"])
        .arg(&data)
        .output()
        .expect("Failed to run dirpush");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("s3://my-bucket/a.txt"));
    assert!(stdout.contains("s3://my-bucket/sub/b.txt"));
    assert!(!stdout.contains("s3://my-bucket/data/"));
}

#[test]
fn test_dry_run_with_create_dir_relative_argument() {
    let temp_dir = TempDir::new().unwrap();
    create_test_data(&temp_dir);

    let output = dirpush()
        .current_dir(temp_dir.path())
        .args(["-bucket", "my-bucket", "-createDir", "-dryRun", "data"])
        .output()
        .expect("Failed to run dirpush");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("s3://my-bucket/data/a.txt"));
    assert!(stdout.contains("s3://my-bucket/data/sub/b.txt"));
}

/// Integration test that requires AWS credentials
/// Run with: cargo test --test integration_test -- --ignored
#[test]
#[ignore]
fn test_s3_upload_e2e() {
    // This test requires:
    // - AWS credentials resolvable by the default provider chain
    // - DIRPUSH_TEST_BUCKET and DIRPUSH_TEST_REGION env vars set

    let bucket = std::env::var("DIRPUSH_TEST_BUCKET")
        .expect("DIRPUSH_TEST_BUCKET env var required for E2E test");
    let region = std::env::var("DIRPUSH_TEST_REGION")
        .expect("DIRPUSH_TEST_REGION env var required for E2E test");

    let temp_dir = TempDir::new().unwrap();
    let data = create_test_data(&temp_dir);

    let output = dirpush()
        .args(["-bucket", &bucket, "-region", &region, "-createDir"])
        .arg(&data)
        .output()
        .expect("Failed to run dirpush");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "upload failed: {}", stderr);
    assert!(stderr.contains("[OK] uploads succeeded"));
}
