//! Azure Blob Repository Implementation
//!
//! BlobRepositoryのAzure Blob Storage実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::adapter::azure::client::{BlobUploader, BlobUploaderFactory};
use crate::domain::entities::dataset::Dataset;
use crate::domain::repositories::blob_repository::{BlobRepository, UploadReceipt};

/// Azure Blob Storageベースのアップロードリポジトリ
///
/// アップローダは初回アップロード時にファクトリから一度だけ生成し、
/// 以後の全アップロードで使い回す
pub struct AzureBlobRepository {
    factory: Arc<dyn BlobUploaderFactory>,
    uploader: OnceCell<Box<dyn BlobUploader>>,
}

impl AzureBlobRepository {
    /// 新しいリポジトリを作成
    pub fn new(factory: Arc<dyn BlobUploaderFactory>) -> Self {
        Self {
            factory,
            uploader: OnceCell::new(),
        }
    }

    async fn uploader(&self) -> Result<&dyn BlobUploader> {
        let uploader = self
            .uploader
            .get_or_try_init(|| self.factory.create_uploader())
            .await?;

        Ok(uploader.as_ref())
    }
}

/// データセットをCSVテキストにシリアライズする
///
/// ヘッダー行＋データ行のみを出力する（インデックス列は付加しない）
pub fn serialize_dataset(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(dataset.headers())
        .context("Failed to serialize CSV header")?;

    for row in dataset.rows() {
        writer
            .write_record(row)
            .with_context(|| format!("Failed to serialize a row of {}", dataset.name()))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))
}

#[async_trait]
impl BlobRepository for AzureBlobRepository {
    async fn upload_dataset(&self, dataset: &Dataset, blob_name: &str) -> Result<UploadReceipt> {
        let content = serialize_dataset(dataset)?;
        let bytes_uploaded = content.len() as u64;

        self.uploader().await?.put_blob(blob_name, content).await?;

        Ok(UploadReceipt::new(blob_name, bytes_uploaded))
    }
}
