use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use evsel_ccdb::CcdbConfig;
use evsel_model::AliasSetKind;
use evsel_observe::LoggerConfig;

/// Run list read when nothing else is configured.
pub const DEFAULT_RUNS_FILE: &str = "runs.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    pub ccdb: CcdbConfig,
    /// Whitespace-separated list of run numbers.
    pub runs_file: PathBuf,
    /// Alias definition applied to every run of the batch.
    pub alias_set: AliasSetKind,
    /// Also store the run-independent (empty) alias object before the runs.
    pub upload_default_object: bool,
    pub logger: LoggerConfig,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            ccdb: CcdbConfig::default(),
            runs_file: PathBuf::from(DEFAULT_RUNS_FILE),
            alias_set: AliasSetKind::Default,
            upload_default_object: false,
            logger: LoggerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use evsel_observe::LoggerFormat;

    use super::*;

    #[test]
    fn defaults_log_text_at_info() {
        let cfg = UploadConfig::default();
        assert_eq!(cfg.logger.format, LoggerFormat::Text);
        assert_eq!(cfg.logger.level.as_str(), "info");
        assert_eq!(cfg.runs_file, PathBuf::from(DEFAULT_RUNS_FILE));
        assert!(!cfg.upload_default_object);
    }

    #[test]
    fn logger_section_is_validated_on_load() {
        let mut doc = serde_json::to_value(UploadConfig::default()).unwrap();
        doc["logger"]["format"] = "json".into();
        doc["logger"]["level"] = "info,evsel_core::resolver=debug".into();
        let cfg: UploadConfig = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(cfg.logger.format, LoggerFormat::Json);
        assert_eq!(cfg.logger.level.as_str(), "info,evsel_core::resolver=debug");

        doc["logger"]["level"] = "evsel_core=loud".into();
        assert!(serde_json::from_value::<UploadConfig>(doc).is_err());
    }
}
