//! # Blob Repository Trait
//!
//! データセットのBlobアップロードを抽象化

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::dataset::Dataset;

/// アップロード受領
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    /// 宛先Blob名
    pub blob_name: String,
    /// アップロードされたバイト数
    pub bytes_uploaded: u64,
    /// アップロード完了時刻
    pub uploaded_at: DateTime<Utc>,
}

impl UploadReceipt {
    /// 新しいアップロード受領を作成
    pub fn new(blob_name: impl Into<String>, bytes_uploaded: u64) -> Self {
        Self {
            blob_name: blob_name.into(),
            bytes_uploaded,
            uploaded_at: Utc::now(),
        }
    }
}

/// Blobリポジトリ
///
/// データセットをCSVとしてシリアライズし、コンテナ内の指定Blobへ
/// アップロードするリポジトリ。既存Blobは上書きされる
#[async_trait]
pub trait BlobRepository: Send + Sync {
    /// データセットをアップロードする
    ///
    /// # Arguments
    ///
    /// * `dataset` - アップロードするデータセット
    /// * `blob_name` - コンテナ内の宛先Blob名
    ///
    /// # Returns
    ///
    /// アップロード受領
    ///
    /// # Errors
    ///
    /// シリアライズまたはアップロードに失敗した場合にエラーを返す
    async fn upload_dataset(&self, dataset: &Dataset, blob_name: &str) -> Result<UploadReceipt>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_new() {
        let receipt = UploadReceipt::new("cleaneddata/products.csv", 42);

        assert_eq!(receipt.blob_name, "cleaneddata/products.csv");
        assert_eq!(receipt.bytes_uploaded, 42);
    }
}
