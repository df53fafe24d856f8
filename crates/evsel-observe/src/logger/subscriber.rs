use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::{fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

/// Install the global `tracing` subscriber described by `cfg`.
///
/// Exactly one of the text and json layers is active. Fails with
/// [`LoggerError::AlreadyInitialized`] when a global subscriber already exists.
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = cfg.level.to_filter()?;

    let (text, json) = match cfg.format {
        LoggerFormat::Text => (
            Some(
                fmt::layer()
                    .with_ansi(cfg.use_color())
                    .with_target(cfg.with_targets)
                    .with_timer(local_timer()),
            ),
            None,
        ),
        LoggerFormat::Json => (
            None,
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(cfg.with_targets)
                    .with_timer(local_timer()),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

fn local_timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}
