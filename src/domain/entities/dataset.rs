//! # Dataset Entity
//!
//! CSVファイルから読み込んだ表形式データのビジネス表現

/// データセット
///
/// ヘッダー行と文字列の行からなるインメモリの表。
/// CSVファイルの内容をそのまま保持する（スキーマ検証・型変換なし）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// データセット名（ソースファイル名に由来）
    name: String,
    /// カラム名（ヘッダー行）
    headers: Vec<String>,
    /// データ行（各行はヘッダーと同数のセル）
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// 新しいデータセットを作成
    ///
    /// # Arguments
    ///
    /// * `name` - データセット名
    /// * `headers` - カラム名のリスト
    /// * `rows` - データ行のリスト
    pub fn new(name: String, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name,
            headers,
            rows,
        }
    }

    /// データセット名を返す
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ヘッダー行への参照を返す
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// データ行への参照を返す
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// データ行数を返す（ヘッダーは含まない）
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// カラム数を返す
    #[inline]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// データ行が空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dataset() -> Dataset {
        Dataset::new(
            "products".to_string(),
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec!["1".to_string(), "Widget".to_string()],
                vec!["2".to_string(), "Gadget".to_string()],
            ],
        )
    }

    #[test]
    fn test_dataset_new() {
        let dataset = create_test_dataset();

        assert_eq!(dataset.name(), "products");
        assert_eq!(dataset.headers(), &["id".to_string(), "name".to_string()]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.column_count(), 2);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_dataset_rows() {
        let dataset = create_test_dataset();

        assert_eq!(dataset.rows()[0], vec!["1".to_string(), "Widget".to_string()]);
        assert_eq!(dataset.rows()[1], vec!["2".to_string(), "Gadget".to_string()]);
    }

    #[test]
    fn test_dataset_empty_rows() {
        let dataset = Dataset::new(
            "staff".to_string(),
            vec!["id".to_string()],
            vec![],
        );

        assert!(dataset.is_empty());
        assert_eq!(dataset.row_count(), 0);
        assert_eq!(dataset.column_count(), 1);
    }

    #[test]
    fn test_dataset_values_kept_verbatim() {
        // 型変換を行わないこと（"001" や "true" も文字列のまま）
        let dataset = Dataset::new(
            "transactions".to_string(),
            vec!["id".to_string(), "flag".to_string()],
            vec![vec!["001".to_string(), "true".to_string()]],
        );

        assert_eq!(dataset.rows()[0][0], "001");
        assert_eq!(dataset.rows()[0][1], "true");
    }
}
