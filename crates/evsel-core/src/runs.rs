//! Run list input and the fixed run exclusions.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use evsel_model::RunNumber;

use crate::error::CoreError;

/// First run with CTP configuration in the conditions database.
pub const FIRST_RUN_WITH_CTP_INFO: RunNumber = 519_903;

/// Later runs that nevertheless lack a CTP configuration.
pub const RUNS_WITHOUT_CTP_INFO: [RunNumber; 4] = [527_349, 527_963, 528_537, 528_543];

/// Why a run produced no upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// Run predates CTP information in the conditions database.
    BeforeCtpInfo,
    /// Run is on the fixed exclusion list.
    Excluded,
    /// No CTP configuration object exists for the run.
    MissingConfiguration,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::BeforeCtpInfo => "no CTP info before run 519903",
            SkipReason::Excluded => "run has no CTP info",
            SkipReason::MissingConfiguration => "no CTP configuration found",
        };
        f.write_str(s)
    }
}

/// Hard-coded selection of runs that can be processed.
#[derive(Debug, Clone)]
pub struct RunFilter {
    first_run: RunNumber,
    excluded: BTreeSet<RunNumber>,
}

impl RunFilter {
    /// Reason to skip `run` before any remote call, if any.
    pub fn check(&self, run: RunNumber) -> Option<SkipReason> {
        if run < self.first_run {
            Some(SkipReason::BeforeCtpInfo)
        } else if self.excluded.contains(&run) {
            Some(SkipReason::Excluded)
        } else {
            None
        }
    }
}

impl Default for RunFilter {
    fn default() -> Self {
        Self {
            first_run: FIRST_RUN_WITH_CTP_INFO,
            excluded: RUNS_WITHOUT_CTP_INFO.into_iter().collect(),
        }
    }
}

enum Token {
    /// The whole token is a number.
    Whole(RunNumber),
    /// A number followed by trailing garbage.
    Prefix(RunNumber),
    Invalid,
}

fn scan_token(token: &[u8]) -> Token {
    let sign = usize::from(matches!(token.first(), Some(b'+' | b'-')));
    let digits = token[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Token::Invalid;
    }

    let end = sign + digits;
    let Ok(number) = std::str::from_utf8(&token[..end]) else {
        return Token::Invalid;
    };
    match number.parse::<RunNumber>() {
        Ok(run) if end == token.len() => Token::Whole(run),
        Ok(run) => Token::Prefix(run),
        Err(_) => Token::Invalid,
    }
}

/// Read run numbers from whitespace-separated text.
///
/// Reading stops at the first token that is not a number; a token such as
/// `"123abc"` still yields `123` and then stops. Bytes that are not UTF-8 end
/// the list like any other non-numeric token.
pub fn read_runs<R: Read>(mut reader: R) -> std::io::Result<Vec<RunNumber>> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    let mut runs = Vec::new();
    let tokens = raw
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty());
    for token in tokens {
        match scan_token(token) {
            Token::Whole(run) => runs.push(run),
            Token::Prefix(run) => {
                runs.push(run);
                debug!(token = %String::from_utf8_lossy(token), "run list truncated after numeric prefix");
                break;
            }
            Token::Invalid => {
                debug!(token = %String::from_utf8_lossy(token), "run list truncated at non-numeric token");
                break;
            }
        }
    }
    Ok(runs)
}

pub fn read_runs_file(path: impl AsRef<Path>) -> Result<Vec<RunNumber>, CoreError> {
    let path = path.as_ref();
    let list_err = |source| CoreError::RunList {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(list_err)?;
    read_runs(file).map_err(list_err)
}
