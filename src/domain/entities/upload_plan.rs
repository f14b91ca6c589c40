//! # UploadPlan Value Object
//!
//! アップロード対象（ソースファイルと宛先Blob名のペア）のバリューオブジェクト

use std::path::{Path, PathBuf};

use super::dataset::Dataset;

/// アップロード単位
///
/// ローカルのソースファイルと宛先Blob名のペア
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadUnit {
    /// ソースCSVファイルのパス
    pub source: PathBuf,
    /// コンテナ内の宛先Blob名
    pub blob_name: String,
}

impl UploadUnit {
    /// 新しいアップロード単位を作成
    pub fn new(source: PathBuf, blob_name: impl Into<String>) -> Self {
        Self {
            source,
            blob_name: blob_name.into(),
        }
    }
}

/// アップロードプラン
///
/// アップロード単位の順序付きコレクション。
/// プロセス起動時に一度構築され、以後変更されない
#[derive(Debug, Clone)]
pub struct UploadPlan {
    units: Vec<UploadUnit>,
}

impl UploadPlan {
    /// 新しいアップロードプランを作成
    pub fn new(units: Vec<UploadUnit>) -> Self {
        Self { units }
    }

    /// 既定の5データセットからなるプランを構築
    ///
    /// ソースパスはOSのパス区切りに従って `data_dir` の下に組み立てる
    ///
    /// # Arguments
    ///
    /// * `data_dir` - ソースCSVファイルを格納するディレクトリ
    pub fn default_plan(data_dir: &Path) -> Self {
        let pairs = [
            ("clean_data.csv", "rawdata/cleaned_zipco_transaction_data.csv"),
            ("products.csv", "cleaneddata/products.csv"),
            ("customers.csv", "cleaneddata/customers.csv"),
            ("staff.csv", "cleaneddata/staff.csv"),
            ("transactions.csv", "cleaneddata/transactions.csv"),
        ];

        let units = pairs
            .iter()
            .map(|(file, blob_name)| UploadUnit::new(data_dir.join(file), *blob_name))
            .collect();

        Self { units }
    }

    /// プラン内の単位数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// プランが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// 単位への参照を返す
    pub fn units(&self) -> &[UploadUnit] {
        &self.units
    }
}

/// ステージ済みアップロード
///
/// 読み込み済みのデータセットと宛先Blob名のペア。
/// 読み込みフェーズが生成し、アップロードフェーズが消費する
#[derive(Debug, Clone)]
pub struct StagedUpload {
    /// 読み込み済みデータセット
    pub dataset: Dataset,
    /// コンテナ内の宛先Blob名
    pub blob_name: String,
}

impl StagedUpload {
    /// 新しいステージ済みアップロードを作成
    pub fn new(dataset: Dataset, blob_name: impl Into<String>) -> Self {
        Self {
            dataset,
            blob_name: blob_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_has_five_units() {
        let plan = UploadPlan::default_plan(Path::new("data"));

        assert_eq!(plan.len(), 5);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_default_plan_order_and_destinations() {
        let plan = UploadPlan::default_plan(Path::new("data"));
        let blob_names: Vec<&str> = plan
            .units()
            .iter()
            .map(|u| u.blob_name.as_str())
            .collect();

        assert_eq!(
            blob_names,
            vec![
                "rawdata/cleaned_zipco_transaction_data.csv",
                "cleaneddata/products.csv",
                "cleaneddata/customers.csv",
                "cleaneddata/staff.csv",
                "cleaneddata/transactions.csv",
            ]
        );
    }

    #[test]
    fn test_default_plan_sources_under_data_dir() {
        let plan = UploadPlan::default_plan(Path::new("/tmp/input"));

        assert_eq!(
            plan.units()[0].source,
            PathBuf::from("/tmp/input").join("clean_data.csv")
        );
        assert_eq!(
            plan.units()[1].source,
            PathBuf::from("/tmp/input").join("products.csv")
        );
    }

    #[test]
    fn test_empty_plan() {
        let plan = UploadPlan::new(vec![]);

        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
    }

    #[test]
    fn test_staged_upload_new() {
        let dataset = Dataset::new(
            "products".to_string(),
            vec!["id".to_string()],
            vec![vec!["1".to_string()]],
        );
        let staged = StagedUpload::new(dataset, "cleaneddata/products.csv");

        assert_eq!(staged.blob_name, "cleaneddata/products.csv");
        assert_eq!(staged.dataset.row_count(), 1);
    }
}
