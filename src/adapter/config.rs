//! # Configuration
//!
//! プロセス環境変数からの設定読み込み
//!
//! 設定はここで一度だけ読み込み、以後は構造体として明示的に引き回す
//! （ビジネスロジック内で環境変数を直接参照しない）

use thiserror::Error;

/// 接続文字列の環境変数名
pub const ENV_CONNECTION_STRING: &str = "AZURE_STORAGE_CONNECTION_STRING";
/// コンテナ名の環境変数名
pub const ENV_CONTAINER_NAME: &str = "CONTAINER_NAME";

/// 設定エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),

    /// 環境変数が空
    #[error("environment variable {0} is empty")]
    EmptyVariable(&'static str),
}

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct Config {
    /// Azure Storageの接続文字列
    pub connection_string: String,
    /// 宛先コンテナ名
    pub container_name: String,
}

impl Config {
    /// 環境変数から設定を読み込む
    ///
    /// # Errors
    ///
    /// `AZURE_STORAGE_CONNECTION_STRING` または `CONTAINER_NAME` が
    /// 未設定・空の場合にエラーを返す
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            connection_string: require_env(ENV_CONNECTION_STRING)?,
            container_name: require_env(ENV_CONTAINER_NAME)?,
        })
    }
}

/// 必須の環境変数を読み込む（空文字列はエラー）
fn require_env(name: &'static str) -> Result<String, ConfigError> {
    let value = std::env::var(name).map_err(|_| ConfigError::MissingVariable(name))?;

    if value.trim().is_empty() {
        return Err(ConfigError::EmptyVariable(name));
    }

    Ok(value)
}
