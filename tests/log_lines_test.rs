//! Log Output Tests
//!
//! アップロード失敗時に出力されるログ行の検証
//!
//! ロガーはプロセス全体で1つしか登録できないので、このファイルのテストは1つだけにする

use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use dirpush::adapter::s3::client::{ObjectPutter, S3ClientFactory};
use dirpush::application::dto::run_config::RunConfiguration;
use dirpush::driver::workflow::DirectoryUploadWorkflow;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// dirpush のログだけを溜めるロガー
struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("dirpush")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

struct FailingPutter {
    fail_keys: Vec<String>,
}

#[async_trait]
impl ObjectPutter for FailingPutter {
    async fn put_object(&self, _bucket: &str, key: &str, _body: ByteStream) -> Result<()> {
        if self.fail_keys.iter().any(|k| k == key) {
            anyhow::bail!("AccessDenied");
        }
        Ok(())
    }
}

struct FailingFactory {
    fail_keys: Vec<String>,
}

#[async_trait]
impl S3ClientFactory for FailingFactory {
    async fn create_client(&self) -> Result<Box<dyn ObjectPutter>> {
        Ok(Box::new(FailingPutter {
            fail_keys: self.fail_keys.clone(),
        }))
    }
}

#[tokio::test]
async fn test_each_failed_upload_logs_one_error_line() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir_all(data.join("sub")).unwrap();
    for name in ["a.txt", "b.txt", "c.txt", "sub/d.txt", "sub/e.txt"] {
        fs::write(data.join(name), name).unwrap();
    }
    let factory = Arc::new(FailingFactory {
        fail_keys: vec!["b.txt".to_string(), "sub/e.txt".to_string()],
    });

    let config = RunConfiguration::new(data, "my-bucket");
    let workflow = DirectoryUploadWorkflow::with_client_factory(config, factory);
    let outcome = workflow.execute().await.unwrap();

    assert_eq!(outcome.failed, 2);

    let records = LOGGER.records.lock().unwrap();
    let errors: Vec<&String> = records
        .iter()
        .filter(|(level, _)| *level == Level::Error)
        .map(|(_, message)| message)
        .collect();
    assert_eq!(errors.len(), 2, "error lines: {:?}", errors);
    assert!(errors.iter().any(|m| m.contains("b.txt")));
    assert!(errors.iter().any(|m| m.contains("e.txt")));

    let summaries = records
        .iter()
        .filter(|(level, message)| *level == Level::Warn && message.contains("[FAIL]"))
        .count();
    assert_eq!(summaries, 1);

    let uploading = records
        .iter()
        .filter(|(level, message)| *level == Level::Info && message.starts_with("Uploading "))
        .count();
    assert_eq!(uploading, 5);
}
