use serde::{Deserialize, Serialize};

use crate::{
    EOR_TOLERANCE_MS, ModelError, RunNumber, SOR_OVERRIDE_MS, SOR_OVERRIDE_RUN, SOR_TOLERANCE_MS,
    TimestampMs,
};

/// Start and end of run as recorded in the run-condition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDuration {
    pub sor: TimestampMs,
    pub eor: TimestampMs,
}

/// Validity interval of an uploaded object. Always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct ValidityWindow {
    start: TimestampMs,
    end: TimestampMs,
}

#[derive(Deserialize)]
struct RawWindow {
    start: TimestampMs,
    end: TimestampMs,
}

impl TryFrom<RawWindow> for ValidityWindow {
    type Error = ModelError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl ValidityWindow {
    pub fn new(start: TimestampMs, end: TimestampMs) -> Result<Self, ModelError> {
        if start > end {
            return Err(ModelError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window of the alias table for `run`: SOR moved 1 s earlier, EOR 10 s later.
    ///
    /// Run 529414 uses a fixed SOR instead of the recorded one.
    pub fn for_run(run: RunNumber, duration: RunDuration) -> Result<Self, ModelError> {
        let sor = if run == SOR_OVERRIDE_RUN {
            SOR_OVERRIDE_MS
        } else {
            duration.sor
        };
        Self::new(
            sor.saturating_sub(SOR_TOLERANCE_MS),
            duration.eor.saturating_add(EOR_TOLERANCE_MS),
        )
    }

    #[inline]
    pub fn start(&self) -> TimestampMs {
        self.start
    }

    #[inline]
    pub fn end(&self) -> TimestampMs {
        self.end
    }
}
