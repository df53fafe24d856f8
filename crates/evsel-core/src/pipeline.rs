use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use evsel_ccdb::ConditionsStore;
use evsel_model::{
    AliasSet, DEFAULT_OBJECT_END_MS, DEFAULT_OBJECT_RUN_LABEL, DEFAULT_OBJECT_START_MS,
    META_RUN_NUMBER, Metadata, RunNumber, TriggerAliases, ValidityWindow,
};

use crate::{
    config::UploadConfig,
    error::CoreError,
    resolver::AliasResolver,
    runs::{RunFilter, SkipReason, read_runs_file},
};

/// Result of processing one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunOutcome {
    Skipped(SkipReason),
    Uploaded {
        window: ValidityWindow,
        /// Aliases bound to at least one class.
        bound_aliases: usize,
    },
}

/// Summary of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReport {
    pub uploaded: Vec<RunNumber>,
    pub skipped: Vec<(RunNumber, SkipReason)>,
}

impl UploadReport {
    fn record(&mut self, run: RunNumber, outcome: RunOutcome) {
        match outcome {
            RunOutcome::Skipped(reason) => self.skipped.push((run, reason)),
            RunOutcome::Uploaded { .. } => self.uploaded.push(run),
        }
    }
}

/// Fetches, resolves and uploads trigger aliases run by run.
///
/// Runs are handled strictly one after another over the single `store`. Skips are
/// reported as outcomes; any remote failure aborts the batch.
pub struct Uploader<S> {
    store: S,
    resolver: AliasResolver,
    filter: RunFilter,
}

impl<S> Uploader<S>
where
    S: ConditionsStore,
{
    pub fn new(store: S, aliases: AliasSet) -> Self {
        Self {
            store,
            resolver: AliasResolver::new(aliases),
            filter: RunFilter::default(),
        }
    }

    pub fn from_config(cfg: &UploadConfig, store: S) -> Self {
        Self::new(store, AliasSet::from_kind(cfg.alias_set))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn process_run(&self, run: RunNumber) -> Result<RunOutcome, CoreError> {
        info!(run, "processing run");

        if let Some(reason) = self.filter.check(run) {
            info!(run, %reason, "run skipped");
            return Ok(RunOutcome::Skipped(reason));
        }

        let duration = self.store.run_duration(run).await?;
        let metadata = Metadata::for_run(run);

        let Some(config) = self
            .store
            .retrieve_ctp_config(&metadata, duration.sor)
            .await?
        else {
            let reason = SkipReason::MissingConfiguration;
            info!(run, %reason, "run skipped");
            return Ok(RunOutcome::Skipped(reason));
        };
        debug!(run, "ctp configuration:\n{}", config.config_string());

        let window = ValidityWindow::for_run(run, duration)?;
        let aliases = self.resolver.resolve(&config)?;
        info!(run, "trigger aliases:\n{aliases}");

        self.store
            .store_trigger_aliases(&aliases, &metadata, window)
            .await?;
        info!(
            run,
            start = window.start(),
            end = window.end(),
            "trigger aliases uploaded"
        );

        Ok(RunOutcome::Uploaded {
            window,
            bound_aliases: aliases.bound_count(),
        })
    }

    pub async fn process_runs(&self, runs: &[RunNumber]) -> Result<UploadReport, CoreError> {
        let mut report = UploadReport::default();
        for &run in runs {
            let outcome = self.process_run(run).await?;
            report.record(run, outcome);
        }
        info!(
            uploaded = report.uploaded.len(),
            skipped = report.skipped.len(),
            "run list processed"
        );
        Ok(report)
    }

    /// Read the run list at `path` and process it.
    pub async fn process_file(&self, path: impl AsRef<Path>) -> Result<UploadReport, CoreError> {
        let path = path.as_ref();
        let runs = read_runs_file(path)?;
        info!(path = %path.display(), runs = runs.len(), "run list loaded");
        self.process_runs(&runs).await
    }

    /// Store an empty alias table tagged `runNumber=default` over the fixed default window.
    pub async fn upload_default_object(&self) -> Result<ValidityWindow, CoreError> {
        let window = ValidityWindow::new(DEFAULT_OBJECT_START_MS, DEFAULT_OBJECT_END_MS)?;
        let metadata = Metadata::single(META_RUN_NUMBER, DEFAULT_OBJECT_RUN_LABEL);

        self.store
            .store_trigger_aliases(&TriggerAliases::new(), &metadata, window)
            .await?;
        info!(start = window.start(), end = window.end(), "default trigger aliases uploaded");
        Ok(window)
    }
}
