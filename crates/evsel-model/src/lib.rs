//! Domain types for the trigger alias upload workflow.
//!
//! Everything here is plain data: alias definitions, the CTP configuration snapshot
//! of a run, the per-run alias table and its validity window.

mod alias;
pub use alias::{AliasId, AliasSet, AliasSetKind};

mod constants;
pub use constants::*;

mod ctp;
pub use ctp::{CtpClass, CtpConfiguration};

mod error;
pub use error::ModelError;

mod metadata;
pub use metadata::Metadata;

mod trigger_aliases;
pub use trigger_aliases::TriggerAliases;

mod window;
pub use window::{RunDuration, ValidityWindow};

/// Physics run number.
pub type RunNumber = i32;

/// Milliseconds since the Unix epoch.
pub type TimestampMs = u64;
