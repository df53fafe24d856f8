use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use evsel_model::{
    CtpConfiguration, META_RUN_NUMBER, Metadata, RunDuration, RunNumber, TRIGGER_ALIASES_PATH,
    TimestampMs, TriggerAliases, ValidityWindow,
};

use crate::{errors::CcdbError, store::ConditionsStore};

/// One object written to a [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub aliases: TriggerAliases,
    pub metadata: Metadata,
    pub window: ValidityWindow,
}

/// In-process conditions store.
///
/// Configurations are looked up by the `runNumber` metadata value; the timestamp is ignored.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    durations: HashMap<RunNumber, RunDuration>,
    configs: HashMap<String, CtpConfiguration>,
    written: Vec<StoredObject>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(self, run: RunNumber, duration: RunDuration) -> Self {
        self.lock().durations.insert(run, duration);
        self
    }

    pub fn with_config(self, run: RunNumber, config: CtpConfiguration) -> Self {
        self.lock().configs.insert(run.to_string(), config);
        self
    }

    /// Make every subsequent write fail with a 500 status.
    pub fn rejecting_writes(self) -> Self {
        self.lock().reject_writes = true;
        self
    }

    /// Objects written so far, in write order.
    pub fn written(&self) -> Vec<StoredObject> {
        self.lock().written.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryStoreInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ConditionsStore for MemoryStore {
    async fn run_duration(&self, run: RunNumber) -> Result<RunDuration, CcdbError> {
        self.lock()
            .durations
            .get(&run)
            .copied()
            .ok_or_else(|| CcdbError::RunDurationUnavailable {
                run,
                reason: "run not registered".to_string(),
            })
    }

    async fn retrieve_ctp_config(
        &self,
        metadata: &Metadata,
        _timestamp: TimestampMs,
    ) -> Result<Option<CtpConfiguration>, CcdbError> {
        let Some(run) = metadata.get(META_RUN_NUMBER) else {
            return Ok(None);
        };
        Ok(self.lock().configs.get(run).cloned())
    }

    async fn store_trigger_aliases(
        &self,
        aliases: &TriggerAliases,
        metadata: &Metadata,
        window: ValidityWindow,
    ) -> Result<(), CcdbError> {
        let mut inner = self.lock();
        if inner.reject_writes {
            return Err(CcdbError::Status {
                path: TRIGGER_ALIASES_PATH.to_string(),
                status: 500,
            });
        }
        inner.written.push(StoredObject {
            aliases: aliases.clone(),
            metadata: metadata.clone(),
            window,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn config_lookup_uses_run_number_metadata() {
        let cfg = CtpConfiguration {
            run_number: 7,
            ..Default::default()
        };
        let store = MemoryStore::new().with_config(7, cfg.clone());

        let hit = store.retrieve_ctp_config(&Metadata::for_run(7), 0).await.unwrap();
        assert_eq!(hit, Some(cfg));

        let miss = store.retrieve_ctp_config(&Metadata::for_run(8), 0).await.unwrap();
        assert!(miss.is_none());

        let no_meta = store.retrieve_ctp_config(&Metadata::new(), 0).await.unwrap();
        assert!(no_meta.is_none());
    }

    #[tokio::test]
    async fn unknown_run_duration_is_an_error() {
        let store = MemoryStore::new().with_run(1, RunDuration { sor: 1, eor: 2 });
        assert_eq!(
            store.run_duration(1).await.unwrap(),
            RunDuration { sor: 1, eor: 2 }
        );
        assert!(matches!(
            store.run_duration(2).await,
            Err(CcdbError::RunDurationUnavailable { run: 2, .. })
        ));
    }

    #[tokio::test]
    async fn writes_are_recorded_or_rejected() {
        let window = ValidityWindow::new(1, 2).unwrap();
        let store = MemoryStore::new();
        store
            .store_trigger_aliases(&TriggerAliases::new(), &Metadata::for_run(3), window)
            .await
            .unwrap();
        assert_eq!(store.written().len(), 1);
        assert_eq!(store.written()[0].metadata.get("runNumber"), Some("3"));

        let rejecting = MemoryStore::new().rejecting_writes();
        let err = rejecting
            .store_trigger_aliases(&TriggerAliases::new(), &Metadata::for_run(3), window)
            .await
            .unwrap_err();
        assert!(matches!(err, CcdbError::Status { status: 500, .. }));
        assert!(rejecting.written().is_empty());
    }
}
