//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod azure_blob_repository;
pub mod csv_dataset_repository;
