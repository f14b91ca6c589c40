//! Azure Blob Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use azure_storage::{CloudLocation, ConnectionString};
use azure_storage_blobs::prelude::{ClientBuilder, ContainerClient};

#[cfg(test)]
use mockall::automock;

/// Trait for blob upload operations
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobUploader: Send + Sync {
    /// Upload bytes to the named blob, replacing any existing blob
    async fn put_blob(&self, blob_name: &str, content: Vec<u8>) -> Result<()>;
}

/// Real uploader over an Azure Blob Storage container client
pub struct RealBlobUploader {
    container: ContainerClient,
}

impl RealBlobUploader {
    pub fn new(container: ContainerClient) -> Self {
        Self { container }
    }
}

#[async_trait]
impl BlobUploader for RealBlobUploader {
    async fn put_blob(&self, blob_name: &str, content: Vec<u8>) -> Result<()> {
        // Put Block Blob は常に全体置換（上書き）となる
        self.container
            .blob_client(blob_name)
            .put_block_blob(content)
            .content_type("text/csv")
            .await
            .with_context(|| format!("Azure put_block_blob failed for {}", blob_name))?;

        Ok(())
    }
}

/// 接続文字列からコンテナクライアントを構築する
///
/// `BlobEndpoint` が指定されている場合（Azurite等）はエミュレータ向けの
/// エンドポイントとして解釈する
///
/// # Errors
///
/// 接続文字列が不正、または `AccountName` を含まない場合にエラーを返す
pub fn build_container_client(
    connection_string: &str,
    container_name: &str,
) -> Result<ContainerClient> {
    let parsed = ConnectionString::new(connection_string)
        .context("Invalid Azure storage connection string")?;

    let account = parsed
        .account_name
        .context("Connection string is missing AccountName")?
        .to_string();

    let credentials = parsed
        .storage_credentials()
        .context("Connection string holds no usable credentials")?;

    let builder = if let Some(endpoint) = parsed.blob_endpoint {
        let url = azure_core::Url::parse(endpoint).context("Invalid BlobEndpoint URL")?;
        let address = url
            .host_str()
            .context("BlobEndpoint URL is missing a host")?
            .to_string();
        // Azuriteの既定Blobポート
        let port = url.port().unwrap_or(10000);

        ClientBuilder::with_location(CloudLocation::Emulator { address, port }, credentials)
    } else {
        ClientBuilder::new(account, credentials)
    };

    Ok(builder.container_client(container_name))
}

/// Factory for creating blob uploaders
///
/// Driver層がdry-runモードではファクトリを生成しないことで、
/// ネットワーククライアントの構築自体を回避できる
#[async_trait]
pub trait BlobUploaderFactory: Send + Sync {
    async fn create_uploader(&self) -> Result<Box<dyn BlobUploader>>;
}

/// Production implementation of BlobUploaderFactory
pub struct RealUploaderFactory {
    connection_string: String,
    container_name: String,
}

impl RealUploaderFactory {
    pub fn new(connection_string: String, container_name: String) -> Self {
        Self {
            connection_string,
            container_name,
        }
    }
}

#[async_trait]
impl BlobUploaderFactory for RealUploaderFactory {
    async fn create_uploader(&self) -> Result<Box<dyn BlobUploader>> {
        let container = build_container_client(&self.connection_string, &self.container_name)?;
        Ok(Box::new(RealBlobUploader::new(container)))
    }
}
