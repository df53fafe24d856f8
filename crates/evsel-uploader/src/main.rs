use anyhow::Context;
use tracing::info;

use evsel_ccdb::HttpStore;
use evsel_core::{UploadConfig, Uploader};
use evsel_observe::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Configuration
    let cfg = UploadConfig::default();

    // 2) Logger
    init_logger(&cfg.logger)?;
    info!(
        "uploading trigger aliases: ccdb={}, runs={}, alias_set={:?}",
        cfg.ccdb.endpoint,
        cfg.runs_file.display(),
        cfg.alias_set
    );

    // 3) Conditions database
    let store = HttpStore::new(cfg.ccdb.clone()).context("failed to build ccdb client")?;
    let uploader = Uploader::from_config(&cfg, store);

    // 4) Run-independent object
    if cfg.upload_default_object {
        uploader.upload_default_object().await?;
    }

    // 5) Runs
    let report = uploader
        .process_file(&cfg.runs_file)
        .await
        .with_context(|| format!("trigger alias upload from {} failed", cfg.runs_file.display()))?;
    info!(
        "done: {} runs uploaded, {} runs skipped",
        report.uploaded.len(),
        report.skipped.len()
    );

    Ok(())
}
