//! S3 Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

#[cfg(test)]
use mockall::automock;

/// Trait for S3 put operations
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectPutter: Send + Sync {
    /// Create or overwrite `key` in `bucket` with the streamed body
    async fn put_object(&self, bucket: &str, key: &str, body: ByteStream) -> Result<()>;
}

/// S3 client that owns the Client instance
pub struct OwnedS3Client {
    client: Client,
}

impl OwnedS3Client {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectPutter for OwnedS3Client {
    async fn put_object(&self, bucket: &str, key: &str, body: ByteStream) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| anyhow!("S3 PutObject failed: {}", DisplayErrorContext(&e)))?;
        Ok(())
    }
}

/// Factory for creating S3 clients
#[async_trait]
pub trait S3ClientFactory: Send + Sync {
    async fn create_client(&self) -> Result<Box<dyn ObjectPutter>>;
}

/// Production implementation of S3ClientFactory
pub struct RealClientFactory {
    region: String,
    profile: Option<String>,
}

impl RealClientFactory {
    pub fn new(region: String, profile: Option<String>) -> Self {
        Self { region, profile }
    }
}

#[async_trait]
impl S3ClientFactory for RealClientFactory {
    async fn create_client(&self) -> Result<Box<dyn ObjectPutter>> {
        let client =
            crate::adapter::auth::create_s3_client(&self.region, self.profile.as_deref()).await;
        Ok(Box::new(OwnedS3Client::new(client)))
    }
}
