use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("failed to read run list {path}: {source}")]
    RunList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ccdb error: {0}")]
    Ccdb(#[from] evsel_ccdb::CcdbError),

    #[error("model error: {0}")]
    Model(#[from] evsel_model::ModelError),
}
