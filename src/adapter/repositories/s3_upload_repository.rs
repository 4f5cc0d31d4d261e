//! S3 Upload Repository Implementation
//!
//! UploadRepositoryのS3実装

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::adapter::s3::client::ObjectPutter;
use crate::domain::entities::upload_target::UploadTarget;
use crate::domain::errors::UploadError;
use crate::domain::repositories::upload_repository::UploadRepository;

/// S3アップロードリポジトリ
///
/// 起動時に作った1つのクライアントを全てのアップロードで使い回す
pub struct S3UploadRepository {
    putter: Box<dyn ObjectPutter>,
}

impl S3UploadRepository {
    /// 新しいリポジトリを作成
    pub fn new(putter: Box<dyn ObjectPutter>) -> Self {
        Self { putter }
    }

    /// ローカルファイルをストリームにする（メモリに全体を読み込まない）
    ///
    /// 読めないファイルを転送エラーと区別するため、先に一度開いて確かめる。
    /// ボディはパスから作るので、SDK側の再送でも読み直せる。
    async fn open_body(target: &UploadTarget) -> Result<ByteStream, UploadError> {
        tokio::fs::File::open(&target.local_path)
            .await
            .map_err(|source| UploadError::Open {
                path: target.local_path.clone(),
                source,
            })?;

        ByteStream::from_path(&target.local_path)
            .await
            .map_err(|e| UploadError::Open {
                path: target.local_path.clone(),
                source: std::io::Error::other(e),
            })
    }
}

#[async_trait]
impl UploadRepository for S3UploadRepository {
    async fn upload(&self, target: &UploadTarget, bucket: &str) -> Result<(), UploadError> {
        let body = Self::open_body(target).await?;

        self.putter
            .put_object(bucket, &target.key, body)
            .await
            .map_err(|source| UploadError::Transfer {
                path: target.local_path.clone(),
                bucket: bucket.to_string(),
                source,
            })
    }
}
