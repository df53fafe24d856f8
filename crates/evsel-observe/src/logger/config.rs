use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::{format::LoggerFormat, level::LoggerLevel};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    /// Print the emitting module (`evsel_core::pipeline`, ...) with each event.
    #[serde(default)]
    pub with_targets: bool,
    /// ANSI colors for text output; `None` enables them when stdout is a terminal.
    #[serde(default)]
    pub color: Option<bool>,
}

impl LoggerConfig {
    pub(crate) fn use_color(&self) -> bool {
        self.format == LoggerFormat::Text
            && self.color.unwrap_or_else(|| std::io::stdout().is_terminal())
    }
}
