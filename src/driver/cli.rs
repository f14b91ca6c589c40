//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// ローカルのCSVデータセットをAzure Blob StorageにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "blobsync")]
#[command(about = "Upload local CSV datasets to Azure Blob Storage", long_about = None)]
pub struct Args {
    /// Dry run mode - don't actually upload
    #[arg(long)]
    pub dry_run: bool,

    /// Directory holding the source CSV files
    #[arg(short, long, default_value = "data")]
    pub data_dir: String,

    /// Env file populating the process environment before config is read
    #[arg(long, default_value = ".env")]
    pub env_file: String,
}
