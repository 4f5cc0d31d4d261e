//! Authentication Module
//!
//! AWS認証関連の機能

pub mod aws_auth;

pub use aws_auth::create_s3_client;
