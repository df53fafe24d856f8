pub mod config;
pub use config::UploadConfig;

pub mod error;
pub use error::CoreError;

pub mod pipeline;
pub use pipeline::{RunOutcome, UploadReport, Uploader};

pub mod resolver;
pub use resolver::AliasResolver;

pub mod runs;
pub use runs::{RunFilter, SkipReason, read_runs, read_runs_file};
