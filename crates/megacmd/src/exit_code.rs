//! Exit code classification for MEGAcmd.
//!
//! MEGAcmd reports semantic outcomes through specific non-zero exit codes
//! rather than through its text output, so callers branch on these values
//! instead of treating every non-zero status as a generic failure.

use serde::{Deserialize, Serialize};

/// A classified MEGAcmd exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitCode {
    /// Command succeeded (0)
    Ok,
    /// Wrong arguments, also used for "not a file" (51)
    WrongArguments,
    /// Invalid email (52)
    InvalidEmail,
    /// Remote node not found (53)
    NotFound,
    /// Invalid state, also used for local path errors (54)
    InvalidState,
    /// Invalid type or destination (55)
    InvalidType,
    /// Operation not permitted (56)
    NotPermitted,
    /// Not logged in (57)
    NotLoggedIn,
    /// Nodes not fetched yet (58)
    NoFetch,
    /// Unexpected failure (59)
    Unexpected,
    /// Confirmation required (60)
    RequiresConfirmation,
    /// String input required (61)
    RequiresString,
    /// Partial output (62)
    PartialOutput,
    /// Partial error (63)
    PartialError,
    /// Target already exists (64)
    AlreadyExists,
    /// Restart required (71)
    RequiresRestart,
    /// Any code MEGAcmd does not document
    Other(i32),
}

impl ExitCode {
    /// Classify a raw process exit status.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            51 => Self::WrongArguments,
            52 => Self::InvalidEmail,
            53 => Self::NotFound,
            54 => Self::InvalidState,
            55 => Self::InvalidType,
            56 => Self::NotPermitted,
            57 => Self::NotLoggedIn,
            58 => Self::NoFetch,
            59 => Self::Unexpected,
            60 => Self::RequiresConfirmation,
            61 => Self::RequiresString,
            62 => Self::PartialOutput,
            63 => Self::PartialError,
            64 => Self::AlreadyExists,
            71 => Self::RequiresRestart,
            other => Self::Other(other),
        }
    }

    /// The raw numeric code.
    pub fn code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::WrongArguments => 51,
            Self::InvalidEmail => 52,
            Self::NotFound => 53,
            Self::InvalidState => 54,
            Self::InvalidType => 55,
            Self::NotPermitted => 56,
            Self::NotLoggedIn => 57,
            Self::NoFetch => 58,
            Self::Unexpected => 59,
            Self::RequiresConfirmation => 60,
            Self::RequiresString => 61,
            Self::PartialOutput => 62,
            Self::PartialError => 63,
            Self::AlreadyExists => 64,
            Self::RequiresRestart => 71,
            Self::Other(code) => *code,
        }
    }

    /// Returns true for a zero exit status
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ok => "ok",
            Self::WrongArguments => "wrong arguments",
            Self::InvalidEmail => "invalid email",
            Self::NotFound => "not found",
            Self::InvalidState => "invalid state",
            Self::InvalidType => "invalid type",
            Self::NotPermitted => "not permitted",
            Self::NotLoggedIn => "not logged in",
            Self::NoFetch => "nodes not fetched",
            Self::Unexpected => "unexpected failure",
            Self::RequiresConfirmation => "confirmation required",
            Self::RequiresString => "input required",
            Self::PartialOutput => "partial output",
            Self::PartialError => "partial error",
            Self::AlreadyExists => "already exists",
            Self::RequiresRestart => "restart required",
            Self::Other(_) => "unknown",
        };
        write!(f, "{name} ({})", self.code())
    }
}
