//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::azure::client::{BlobUploaderFactory, RealUploaderFactory};
use crate::adapter::config::Config;
use crate::adapter::repositories::azure_blob_repository::AzureBlobRepository;
use crate::adapter::repositories::csv_dataset_repository::CsvDatasetRepository;
use crate::application::use_cases::read_datasets::ReadDatasetsUseCase;
use crate::application::use_cases::upload_dataset::UploadDatasetUseCase;
use crate::domain::entities::upload_plan::UploadPlan;

use super::cli::Args;

/// データディレクトリのパスを解決する
///
/// チルダを展開してPathBufに変換する
pub fn expand_data_dir(data_dir: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(data_dir).as_ref())
}

/// Dataset Upload Workflow
pub struct DatasetUploadWorkflow {
    config: Config,
    factory: Arc<dyn BlobUploaderFactory>,
    read_use_case: Arc<ReadDatasetsUseCase<CsvDatasetRepository>>,
}

impl DatasetUploadWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let factory = Arc::new(RealUploaderFactory::new(
            config.connection_string.clone(),
            config.container_name.clone(),
        ));

        Self::with_factory(config, factory)
    }

    /// アップローダファクトリを明示的に指定してワークフローを作成
    ///
    /// # Arguments
    ///
    /// * `config` - アプリケーション設定
    /// * `factory` - Blobアップローダのファクトリ
    pub fn with_factory(config: Config, factory: Arc<dyn BlobUploaderFactory>) -> Self {
        let dataset_repo = Arc::new(CsvDatasetRepository::new());
        let read_use_case = Arc::new(ReadDatasetsUseCase::new(dataset_repo));

        Self {
            config,
            factory,
            read_use_case,
        }
    }

    /// Execute the upload workflow
    ///
    /// 読み込み → （dry-run時はここで終了）→ アップロードの線形シーケンス。
    /// アップロードN件目の失敗で処理は停止し、1..N-1件目は
    /// アップロード済みのまま残る（ベストエフォート方式、ロールバックなし）
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting Azure Blob uploader...");
        info!("Dry run: {}", args.dry_run);

        // 接続文字列はクレデンシャルなので出力しない
        println!("✓ Using configuration:");
        println!("  Container: {}", self.config.container_name);

        let data_dir = expand_data_dir(&args.data_dir);
        if !data_dir.exists() {
            anyhow::bail!("Data directory does not exist: {}", data_dir.display());
        }

        // Build the fixed upload plan
        let plan = UploadPlan::default_plan(&data_dir);
        println!(
            "✓ Prepared upload plan: {} datasets from {}",
            plan.len(),
            data_dir.display()
        );

        if plan.is_empty() {
            println!("No datasets to upload. Exiting.");
            return Ok(());
        }

        // Read every source file before the first upload (fail-fast)
        let staged = self.read_use_case.execute(&plan).await?;
        let total_rows: usize = staged.iter().map(|s| s.dataset.row_count()).sum();
        println!(
            "✓ Loaded {} datasets ({} rows total)",
            staged.len(),
            total_rows
        );

        if args.dry_run {
            println!("✓ Dry-run mode (not actually uploading)");
            println!("  Would upload {} blobs:", staged.len());
            for item in &staged {
                println!(
                    "    - {} ({} rows, {} columns)",
                    item.blob_name,
                    item.dataset.row_count(),
                    item.dataset.column_count()
                );
            }
            return Ok(());
        }

        // ネットワーククライアントの構築は初回アップロード時まで遅延される
        let upload_repo = Arc::new(AzureBlobRepository::new(self.factory.clone()));
        let upload_use_case = UploadDatasetUseCase::new(upload_repo);

        // Upload sequentially, in plan order
        let mut total_bytes: u64 = 0;
        for item in &staged {
            let receipt = upload_use_case.execute(item).await?;
            total_bytes += receipt.bytes_uploaded;
            println!("{} loaded into Azure Blob Storage.", receipt.blob_name);
        }

        println!(
            "✓ Upload complete! {} blobs uploaded ({} bytes)",
            staged.len(),
            total_bytes
        );

        Ok(())
    }
}
