//! # Dataset Repository Trait
//!
//! ローカルファイルからのデータセット読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::dataset::Dataset;

/// データセットリポジトリ
///
/// ローカルのCSVファイルからデータセットを読み込むリポジトリ
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// データセットを読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - ソースCSVファイルのパス
    ///
    /// # Returns
    ///
    /// 読み込まれたデータセット
    ///
    /// # Errors
    ///
    /// ファイルが存在しない、またはCSVとして不正な場合にエラーを返す
    async fn load_dataset(&self, path: &Path) -> Result<Dataset>;
}
