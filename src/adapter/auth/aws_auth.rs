//! AWS Authentication
//!
//! リージョンとプロファイルからSDK設定を組み立てる。
//! 認証情報そのものはSDKの標準的な解決順序（環境変数、共有設定ファイル、
//! インスタンスメタデータ等）に任せる。

use aws_config::{BehaviorVersion, ConfigLoader, SdkConfig};
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client;

/// SDK設定のローダーを作成
///
/// `profile` が `None` の場合はデフォルトの認証情報解決を使う
pub fn config_loader(region: &str, profile: Option<&str>) -> ConfigLoader {
    let loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));

    match profile {
        Some(name) => loader.profile_name(name),
        None => loader,
    }
}

/// SDK設定を読み込む
pub async fn load_sdk_config(region: &str, profile: Option<&str>) -> SdkConfig {
    config_loader(region, profile).load().await
}

/// Creates an S3 client bound to the given region and credential profile
pub async fn create_s3_client(region: &str, profile: Option<&str>) -> Client {
    let config = load_sdk_config(region, profile).await;
    Client::new(&config)
}
