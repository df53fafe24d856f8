use async_trait::async_trait;
use evsel_model::{
    CtpConfiguration, Metadata, RunDuration, RunNumber, TimestampMs, TriggerAliases,
    ValidityWindow,
};

use crate::errors::CcdbError;

/// Conditions database operations used by the alias upload.
#[async_trait]
pub trait ConditionsStore: Send + Sync {
    /// Start and end of run from the run-condition table.
    async fn run_duration(&self, run: RunNumber) -> Result<RunDuration, CcdbError>;

    /// CTP configuration valid at `timestamp` and matching `metadata`.
    ///
    /// `Ok(None)` when no such object exists.
    async fn retrieve_ctp_config(
        &self,
        metadata: &Metadata,
        timestamp: TimestampMs,
    ) -> Result<Option<CtpConfiguration>, CcdbError>;

    /// Store an alias table valid over `window`.
    async fn store_trigger_aliases(
        &self,
        aliases: &TriggerAliases,
        metadata: &Metadata,
        window: ValidityWindow,
    ) -> Result<(), CcdbError>;
}
