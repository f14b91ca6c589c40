//! # Upload Dataset Use Case
//!
//! データセットアップロードユースケース

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::domain::entities::upload_plan::StagedUpload;
use crate::domain::repositories::blob_repository::{BlobRepository, UploadReceipt};

/// データセットアップロードユースケース
///
/// ステージ済みのデータセットを1件、Blobリポジトリ経由でアップロードする。
/// 呼び出し側（Driver層）がプラン順に逐次実行する
pub struct UploadDatasetUseCase<B: BlobRepository> {
    blob_repository: Arc<B>,
}

impl<B: BlobRepository> UploadDatasetUseCase<B> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `blob_repository` - Blobリポジトリ
    pub fn new(blob_repository: Arc<B>) -> Self {
        Self { blob_repository }
    }

    /// ステージ済みデータセットをアップロードする
    ///
    /// # Arguments
    ///
    /// * `staged` - ステージ済みアップロード
    ///
    /// # Returns
    ///
    /// アップロード受領
    ///
    /// # Errors
    ///
    /// アップロードに失敗した場合にエラーを返す。
    /// 失敗時のロールバックは行わない（既にアップロード済みのBlobは残る）
    pub async fn execute(&self, staged: &StagedUpload) -> Result<UploadReceipt> {
        info!(
            "Uploading {} ({} rows, {} columns) to {}",
            staged.dataset.name(),
            staged.dataset.row_count(),
            staged.dataset.column_count(),
            staged.blob_name
        );

        let receipt = self
            .blob_repository
            .upload_dataset(&staged.dataset, &staged.blob_name)
            .await
            .with_context(|| format!("Failed to upload blob {}", staged.blob_name))?;

        info!(
            "Uploaded {} ({} bytes) at {}",
            receipt.blob_name,
            receipt.bytes_uploaded,
            receipt.uploaded_at.to_rfc3339()
        );

        Ok(receipt)
    }
}
