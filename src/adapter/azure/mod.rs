//! Azure Blob Storage Integration
//!
//! Blobクライアントの抽象化と接続文字列の解決

pub mod client;
