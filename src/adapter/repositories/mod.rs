//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod local_file_repository;
pub mod s3_upload_repository;
