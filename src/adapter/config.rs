//! Configuration File
//!
//! JSON設定ファイルの読み込み。全てのキーは省略可能で、
//! コマンドラインフラグが指定されていればそちらが優先される。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub region: Option<String>,
    pub bucket: Option<String>,
    pub profile: Option<String>,
    pub create_dir: Option<bool>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", expanded))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", expanded))?;
        Ok(config)
    }
}
