//! # Read Datasets Use Case
//!
//! データセット読み込みユースケース

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::entities::upload_plan::{StagedUpload, UploadPlan};
use crate::domain::repositories::dataset_repository::DatasetRepository;

/// データセット読み込みユースケース
///
/// アップロードプランの全ソースファイルをメモリに読み込む。
/// 1件でも読み込みに失敗した場合は全体をエラーとする
/// （fail-fast: アップロード開始前に失敗させる）
pub struct ReadDatasetsUseCase<R: DatasetRepository> {
    dataset_repository: Arc<R>,
}

impl<R: DatasetRepository> ReadDatasetsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `dataset_repository` - データセットリポジトリ
    pub fn new(dataset_repository: Arc<R>) -> Self {
        Self { dataset_repository }
    }

    /// プランの全データセットを読み込む
    ///
    /// # Arguments
    ///
    /// * `plan` - アップロードプラン
    ///
    /// # Returns
    ///
    /// プラン順のステージ済みアップロードのリスト
    ///
    /// # Errors
    ///
    /// いずれかのソースファイルの読み込みに失敗した場合にエラーを返す
    pub async fn execute(&self, plan: &UploadPlan) -> Result<Vec<StagedUpload>> {
        let mut staged = Vec::with_capacity(plan.len());

        for unit in plan.units() {
            let dataset = self
                .dataset_repository
                .load_dataset(&unit.source)
                .await
                .with_context(|| {
                    format!("Failed to load dataset from {}", unit.source.display())
                })?;

            staged.push(StagedUpload::new(dataset, unit.blob_name.clone()));
        }

        Ok(staged)
    }
}
