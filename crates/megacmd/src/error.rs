//! Error types for MEGAcmd operations.
//!
//! Errors fall into three families: the binary could not be started
//! (configuration), MEGAcmd reported a known semantic failure through its
//! exit code (domain), or MEGAcmd succeeded but printed something none of
//! the decoders recognise (format). The last one is never recovered from;
//! it usually means the installed MEGAcmd changed its output.

use std::path::PathBuf;
use thiserror::Error;

use crate::exit_code::ExitCode;

/// Categories of MEGAcmd errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The external binary is missing or cannot be executed
    Configuration,
    /// MEGAcmd reported a known failure through its exit code
    Domain,
    /// MEGAcmd output did not match any known shape
    Format,
    /// The caller passed an invalid combination of arguments
    Usage,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Get a user-friendly description of this error category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Configuration => "MEGAcmd not available",
            Self::Domain => "MEGAcmd reported a failure",
            Self::Format => "Unrecognised MEGAcmd output",
            Self::Usage => "Invalid arguments",
            Self::Other => "Unexpected error",
        }
    }

    /// Get actionable advice for resolving this error category.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Configuration => {
                "Install MEGAcmd from https://mega.io/cmd or point the binary path at mega-exec"
            }
            Self::Domain => "Check the remote path and that you are logged in",
            Self::Format => "Check that your MEGAcmd version is supported",
            Self::Usage => "Check the arguments passed to the command",
            Self::Other => "Check the error details for more information",
        }
    }
}

/// Errors that can occur while running MEGAcmd.
#[derive(Debug, Error)]
pub enum Error {
    /// The MEGAcmd executable could not be found
    #[error("MEGAcmd executable not found at path: {}", .0.display())]
    BinaryNotFound(PathBuf),

    /// Remote path does not exist (exit code 53)
    #[error("remote path not found: {target}")]
    NotFound {
        /// Remote path(s) the command was run against
        target: String,
    },

    /// Remote path is not a file (exit code 51)
    #[error("remote path is not a file: {target}")]
    NotAFile {
        /// Remote path(s) the command was run against
        target: String,
    },

    /// Local path could not be used (exit code 54)
    #[error("local path error for {target}: {stderr}")]
    LocalPath {
        /// Path involved in the transfer
        target: String,
        /// Standard error output from MEGAcmd
        stderr: String,
    },

    /// Destination folder is invalid or does not exist (exit code 55)
    #[error("invalid destination for {target}: {stderr}")]
    InvalidDestination {
        /// Path involved in the transfer
        target: String,
        /// Standard error output from MEGAcmd
        stderr: String,
    },

    /// Command exited with a status that has no specific meaning here
    #[error("{command} failed with exit code {exit_code}: {stderr}")]
    CommandFailed {
        /// MEGAcmd sub-command that failed
        command: String,
        /// Raw process exit code
        exit_code: i32,
        /// Standard error output from MEGAcmd
        stderr: String,
    },

    /// Invalid combination of arguments
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Output did not match any known format
    #[error("unexpected output from {command}:\n{output}")]
    UnexpectedOutput {
        /// MEGAcmd sub-command that produced the output
        command: String,
        /// The offending output (a line, or the whole stdout)
        output: String,
    },

    /// IO error while spawning the process
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::BinaryNotFound(_) => ErrorCategory::Configuration,
            Error::NotFound { .. }
            | Error::NotAFile { .. }
            | Error::LocalPath { .. }
            | Error::InvalidDestination { .. }
            | Error::CommandFailed { .. } => ErrorCategory::Domain,
            Error::UnexpectedOutput { .. } => ErrorCategory::Format,
            Error::InvalidArguments(_) => ErrorCategory::Usage,
            Error::Io(_) => ErrorCategory::Other,
        }
    }

    /// The MEGAcmd exit code behind this error, if there is one.
    pub fn exit_code(&self) -> Option<ExitCode> {
        match self {
            Error::NotFound { .. } => Some(ExitCode::NotFound),
            Error::NotAFile { .. } => Some(ExitCode::WrongArguments),
            Error::LocalPath { .. } => Some(ExitCode::InvalidState),
            Error::InvalidDestination { .. } => Some(ExitCode::InvalidType),
            Error::CommandFailed { exit_code, .. } => Some(ExitCode::from_code(*exit_code)),
            _ => None,
        }
    }

    /// Whether this error means the remote path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub(crate) fn unexpected(command: &str, output: impl Into<String>) -> Self {
        Error::UnexpectedOutput {
            command: command.to_string(),
            output: output.into(),
        }
    }
}

/// Result type for MEGAcmd operations.
pub type Result<T> = std::result::Result<T, Error>;
