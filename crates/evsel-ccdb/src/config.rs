use serde::{Deserialize, Serialize};

/// Production CCDB endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://alice-ccdb.cern.ch";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcdbConfig {
    /// Base URL, without trailing path, e.g. `http://ccdb-test.cern.ch:8080`.
    pub endpoint: String,
}

impl CcdbConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}

impl Default for CcdbConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
