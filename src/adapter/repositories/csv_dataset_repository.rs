//! CSV Dataset Repository Implementation
//!
//! DatasetRepositoryのCSVファイル実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::domain::entities::dataset::Dataset;
use crate::domain::repositories::dataset_repository::DatasetRepository;

/// CSVファイルベースのデータセットリポジトリ
pub struct CsvDatasetRepository;

impl CsvDatasetRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// CSVファイルを読み込む（同期処理）
    ///
    /// ヘッダー行とデータ行をそのまま文字列として保持する。
    /// 型推論・スキーマ検証は行わない
    fn load_sync(path: &Path) -> Result<Dataset> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .with_context(|| format!("Failed to read CSV headers: {}", path.display()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for (line_num, result) in csv_reader.records().enumerate() {
            // +2: 1始まりの行番号とヘッダー行の分
            let record = result.with_context(|| {
                format!("Failed to read CSV row {} in {}", line_num + 2, path.display())
            })?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset")
            .to_string();

        Ok(Dataset::new(name, headers, rows))
    }
}

#[async_trait]
impl DatasetRepository for CsvDatasetRepository {
    async fn load_dataset(&self, path: &Path) -> Result<Dataset> {
        // ブロッキングI/Oなので、tokio::task::spawn_blockingでラップ
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for CsvDatasetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sync_valid_csv() {
        let file = write_csv("id,name\n1,Widget\n2,Gadget\n");

        let dataset = CsvDatasetRepository::load_sync(file.path()).unwrap();

        assert_eq!(dataset.headers(), &["id".to_string(), "name".to_string()]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.rows()[0], vec!["1".to_string(), "Widget".to_string()]);
        assert_eq!(dataset.rows()[1], vec!["2".to_string(), "Gadget".to_string()]);
    }

    #[test]
    fn test_load_sync_header_only() {
        let file = write_csv("id,name\n");

        let dataset = CsvDatasetRepository::load_sync(file.path()).unwrap();

        assert_eq!(dataset.column_count(), 2);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_load_sync_quoted_fields() {
        let file = write_csv("id,name\n1,\"Widget, large\"\n");

        let dataset = CsvDatasetRepository::load_sync(file.path()).unwrap();

        assert_eq!(dataset.rows()[0][1], "Widget, large");
    }

    #[test]
    fn test_load_sync_missing_file() {
        let result = CsvDatasetRepository::load_sync(Path::new("/nonexistent/products.csv"));

        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("/nonexistent/products.csv"), "got: {}", message);
    }

    #[test]
    fn test_load_sync_malformed_csv() {
        // フィールド数が不一致の行はパースエラーになる
        let file = write_csv("id,name\n1,Widget,extra\n");

        let result = CsvDatasetRepository::load_sync(file.path());

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_dataset_async() {
        let file = write_csv("id\n1\n");
        let repo = CsvDatasetRepository::new();

        let dataset = repo.load_dataset(file.path()).await.unwrap();

        assert_eq!(dataset.headers(), &["id".to_string()]);
        assert_eq!(dataset.row_count(), 1);
    }
}
