//! Adapter Layer
//!
//! 外部システム（Azure Blob Storage, ファイルシステム）との統合

pub mod azure;
pub mod config;
pub mod repositories;
