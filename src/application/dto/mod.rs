//! # DTO
//!
//! ユースケースに渡す設定値

pub mod run_config;
