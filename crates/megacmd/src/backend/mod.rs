//! Process runner abstraction.
//!
//! The [`Backend`] trait is the only place where MEGAcmd is actually
//! executed, allowing for different implementations (real subprocess,
//! scripted mock for testing).
//!
//! Use [`MockBackend`] to exercise a [`Client`](crate::Client) without
//! MEGAcmd installed:
//!
//! ```
//! use megacmd::backend::MockBackend;
//! use megacmd::{Client, CommandResult, MegaCmd};
//!
//! let mock = MockBackend::new();
//! mock.push(CommandResult::new("/Documents", "", 0));
//!
//! let client = Client::with_backend(Box::new(mock.clone()));
//! assert_eq!(client.pwd().unwrap(), "/Documents");
//! assert_eq!(mock.calls(), vec![vec!["pwd".to_string()]]);
//! ```

pub mod process;

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;
use crate::types::CommandResult;

/// Runs the MEGAcmd binary.
///
/// Implementations must not treat a non-zero exit status as an error: the
/// exit code is returned in [`CommandResult`] and classified by the caller.
pub trait Backend: Send + Sync {
    /// Run MEGAcmd with the given arguments and wait for it to finish.
    fn run(&self, args: &[String]) -> Result<CommandResult>;

    /// Path of the binary being executed.
    fn binary(&self) -> &Path;
}

/// Mock backend for testing without MEGAcmd.
///
/// Replays queued results in order and records every argument vector it
/// receives. Clones share the same queue and call log, so a test can keep
/// one clone after handing another to a [`Client`](crate::Client).
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    replies: Arc<Mutex<VecDeque<CommandResult>>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    binary: PathBuf,
}

impl MockBackend {
    /// Create a new mock backend with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("mock-mega-exec"),
            ..Self::default()
        }
    }

    /// Queue the result of the next invocation.
    pub fn push(&self, result: CommandResult) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(result);
    }

    /// Argument vectors received so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Backend for MockBackend {
    /// Returns an empty successful result once the queue runs dry.
    fn run(&self, args: &[String]) -> Result<CommandResult> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(args.to_vec());
        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        Ok(reply.unwrap_or_else(|| CommandResult::new("", "", 0)))
    }

    fn binary(&self) -> &Path {
        &self.binary
    }
}
