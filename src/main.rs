//! Blobsync - Dataset Uploader
//!
//! ローカルのCSVデータセットを Azure Blob Storage にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use blobsync::adapter::config::Config;
use blobsync::driver::{Args, DatasetUploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Populate the environment from the env file if present, then load configuration
    dotenv::from_filename(&args.env_file).ok();
    let config = Config::from_env()?;

    // Create workflow with injected dependencies
    let workflow = DatasetUploadWorkflow::new(config);

    workflow.execute(args).await
}
