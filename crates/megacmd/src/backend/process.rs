//! Subprocess backend.
//!
//! Executes the configured MEGAcmd binary (usually `mega-exec`) with the
//! sub-command as its first argument and captures everything it prints.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::types::CommandResult;

const REDACTED: &str = "***";

/// Arguments whose value must never reach the logs.
const SECRET_FLAGS: &[&str] = &["--password=", AUTH_CODE_FLAG];

const AUTH_CODE_FLAG: &str = "--auth-code=";

/// Backend that executes the real MEGAcmd binary.
#[derive(Debug, Clone)]
pub struct ProcessBackend {
    /// Path to the MEGAcmd executable
    binary: PathBuf,
}

impl ProcessBackend {
    /// Create a backend for the given executable.
    ///
    /// The path is not checked here; a missing binary surfaces as
    /// [`Error::BinaryNotFound`] on the first run.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Backend for ProcessBackend {
    fn run(&self, args: &[String]) -> Result<CommandResult> {
        log::info!(
            "Running command: {} {}",
            self.binary.display(),
            redact_args(args).join(" ")
        );

        let output = Command::new(&self.binary).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::BinaryNotFound(self.binary.clone())
            } else {
                Error::Io(e)
            }
        })?;

        let result = CommandResult::new(
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
            output.status.code().unwrap_or(-1),
        );
        log::debug!("Command returned {result:?}");
        Ok(result)
    }

    fn binary(&self) -> &Path {
        &self.binary
    }
}

/// Mask secrets in an argument vector before logging it.
///
/// Hides `--password=` and `--auth-code=` values. For `login` the secret
/// is found by position, never by shape: index 2 holds the password of a
/// credential login, index 1 the session of a session login.
pub fn redact_args(args: &[String]) -> Vec<String> {
    let mut redacted: Vec<String> = args
        .iter()
        .map(|arg| {
            SECRET_FLAGS
                .iter()
                .find(|flag| arg.starts_with(*flag))
                .map_or_else(|| arg.clone(), |flag| format!("{flag}{REDACTED}"))
        })
        .collect();

    if args.first().map(String::as_str) == Some("login") {
        let credentials = args
            .get(2)
            .is_some_and(|arg| !arg.starts_with(AUTH_CODE_FLAG));
        let secret = if credentials { 2 } else { 1 };
        if let Some(slot) = redacted.get_mut(secret) {
            *slot = REDACTED.to_string();
        }
    }

    redacted
}
