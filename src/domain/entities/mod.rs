//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Dataset**: CSVファイルから読み込んだ表形式データ
//! - **UploadPlan**: アップロード対象（ソースと宛先Blob名）の固定リスト

pub mod dataset;
pub mod upload_plan;
