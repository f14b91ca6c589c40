//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ReadDatasetsUseCase**: プラン全件のデータセット読み込み（fail-fast）
//! - **UploadDatasetUseCase**: データセット1件のアップロード

pub mod read_datasets;
pub mod upload_dataset;
