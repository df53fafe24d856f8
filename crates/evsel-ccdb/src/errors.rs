use thiserror::Error;

use evsel_model::RunNumber;

#[derive(Error, Debug)]
pub enum CcdbError {
    #[error("http request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("ccdb returned status {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("invalid ccdb response: {0}")]
    InvalidResponse(String),

    #[error("failed to serialize object: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("run duration unavailable for run {run}: {reason}")]
    RunDurationUnavailable { run: RunNumber, reason: String },
}
