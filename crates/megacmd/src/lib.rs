//! # megacmd
//!
//! A Rust library for driving [MEGAcmd](https://mega.io/cmd), the command
//! line client for MEGA cloud storage.
//!
//! Every operation runs the `mega-exec` binary once, waits for it, and
//! turns its exit code and printed output into typed results. MEGAcmd
//! keeps its own state (login session, current remote and local folders)
//! in a background server, so that state is shared with any other
//! MEGAcmd client on the machine.
//!
//! ## Example
//!
//! ```no_run
//! use megacmd::{Client, MegaCmd};
//!
//! let client = Client::locate(true).expect("MEGAcmd not installed");
//!
//! if client.whoami().expect("whoami failed").is_some() {
//!     for entry in client.ls("/").expect("ls failed") {
//!         println!("{} {}", entry.handle, entry.name);
//!     }
//! }
//! ```
//!
//! ## Errors
//!
//! Exit codes with a specific meaning for a command become either a plain
//! return value (`cd` into a missing folder returns `false`) or a dedicated
//! [`Error`] variant (`cat` of a missing file is [`Error::NotFound`]).
//! Output that no decoder recognises is always [`Error::UnexpectedOutput`].
//!
//! ## Backends
//!
//! [`Client`] talks to MEGAcmd through a [`backend::Backend`]. The default
//! is a subprocess; tests inject a scripted one with
//! [`Client::with_backend`].

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

/// Process runner abstraction.
pub mod backend;
/// The wrapped MEGAcmd commands.
pub mod commands;
/// Decoders for MEGAcmd output.
pub mod decode;
/// Error types for MEGAcmd operations.
pub mod error;
/// MEGAcmd exit codes.
pub mod exit_code;
/// Remote and local path normalisation.
pub mod paths;
/// Data types returned by MEGAcmd operations.
pub mod types;

pub use commands::MegaCmd;
pub use error::{Error, ErrorCategory, Result};
pub use exit_code::ExitCode;
pub use types::{
    CommandResult, DirectoryEntry, DiskFreeReport, DiskUsageEntry, DiskUsageReport, ExportEntry,
    ExportOutcome, ExportRequest, FindOptions, GetOptions, LoginMethod, LogoutOutcome,
};

use backend::Backend;
use std::path::{Path, PathBuf};

/// Name of the MEGAcmd executable.
pub const BINARY_NAME: &str = "mega-exec";

/// Places MEGAcmd installers put the executable, checked after `PATH`.
pub const FALLBACK_LOCATIONS: &[&str] = &[
    "/usr/bin/mega-exec",
    "/usr/local/bin/mega-exec",
    "/opt/homebrew/bin/mega-exec",
    "/Applications/MEGAcmd.app/Contents/MacOS/mega-exec",
];

/// Locate the MEGAcmd executable.
///
/// Searches `PATH` first, then [`FALLBACK_LOCATIONS`].
pub fn find_binary() -> Result<PathBuf> {
    if let Ok(path) = which::which(BINARY_NAME) {
        log::debug!("Found {BINARY_NAME} on PATH: {}", path.display());
        return Ok(path);
    }

    FALLBACK_LOCATIONS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
        .inspect(|path| log::debug!("Found {BINARY_NAME} at {}", path.display()))
        .ok_or_else(|| Error::BinaryNotFound(PathBuf::from(BINARY_NAME)))
}

/// High-level client for MEGAcmd.
///
/// Holds no state of its own beyond the backend; every call is a fresh
/// MEGAcmd invocation. All operations live on the [`MegaCmd`] trait.
pub struct Client {
    backend: Box<dyn Backend>,
}

impl Client {
    /// Create a client for the MEGAcmd binary at `binary`.
    ///
    /// With `check_binary`, MEGAcmd is run once (`version`) so a missing or
    /// broken binary fails here instead of on first use.
    pub fn new(binary: impl Into<PathBuf>, check_binary: bool) -> Result<Self> {
        let client = Self::with_backend(Box::new(backend::process::ProcessBackend::new(binary)));
        if check_binary {
            client.check()?;
        }
        Ok(client)
    }

    /// Create a client for the MEGAcmd binary found by [`find_binary`].
    pub fn locate(check_binary: bool) -> Result<Self> {
        Self::new(find_binary()?, check_binary)
    }

    /// Create a client with a custom backend (useful for testing).
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Path of the MEGAcmd binary in use.
    pub fn binary(&self) -> &Path {
        self.backend.binary()
    }

    fn check(&self) -> Result<()> {
        let version = self.version()?;
        log::debug!("Using MEGAcmd at {}: {version}", self.binary().display());
        Ok(())
    }
}
