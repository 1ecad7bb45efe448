use serde::{Deserialize, Serialize};

use crate::exit_code::ExitCode;

/// Captured result of a single MEGAcmd invocation.
///
/// Both streams are trimmed. A non-zero exit code is data, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Process exit code (-1 if terminated by a signal)
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a new CommandResult, trimming both streams
    pub fn new(stdout: impl AsRef<str>, stderr: impl AsRef<str>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.as_ref().trim().to_string(),
            stderr: stderr.as_ref().trim().to_string(),
            exit_code,
        }
    }

    /// Classified exit status
    pub fn exit(&self) -> ExitCode {
        ExitCode::from_code(self.exit_code)
    }

    /// Returns true if the process exited with status 0
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A file or folder reported by `ls` or `find`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Name of the file or folder (`find` reports the path)
    pub name: String,
    /// Node handle, e.g. `H:AbCdEfGh`
    pub handle: String,
    /// Whether this is a folder
    pub is_directory: bool,
    /// Entry flags, e.g. `d---` or `-ep-` (`ls` only)
    pub flags: Option<String>,
    /// Modification date as printed by MEGAcmd (`ls` only)
    pub date: Option<String>,
    /// Human-readable size (files only)
    pub size: Option<String>,
    /// Public link if the node is exported (`find` only)
    pub link: Option<String>,
}

impl DirectoryEntry {
    /// Create an entry with only the mandatory fields set
    pub fn new(name: impl Into<String>, handle: impl Into<String>, is_directory: bool) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            is_directory,
            flags: None,
            date: None,
            size: None,
            link: None,
        }
    }

    /// Set the size
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the exported link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Returns true if the entry has a public link
    pub fn is_exported(&self) -> bool {
        self.link.is_some()
    }
}

/// Storage usage reported by `df`. All sizes in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskFreeReport {
    /// Bytes used in the cloud drive
    pub cloud_drive_used: u64,
    /// Files in the cloud drive
    pub cloud_drive_files: u64,
    /// Folders in the cloud drive
    pub cloud_drive_folders: u64,
    /// Bytes used in the inbox
    pub inbox_used: u64,
    /// Files in the inbox
    pub inbox_files: u64,
    /// Folders in the inbox
    pub inbox_folders: u64,
    /// Bytes used in the rubbish bin
    pub rubbish_bin_used: u64,
    /// Files in the rubbish bin
    pub rubbish_bin_files: u64,
    /// Folders in the rubbish bin
    pub rubbish_bin_folders: u64,
    /// Bytes used in total
    pub total_used_storage: u64,
    /// Used storage percentage, 0.0 to 100.0
    pub used_storage_percentage: f64,
    /// Total storage available to the account
    pub total_storage: u64,
    /// Bytes taken up by file versions
    pub size_file_versions: u64,
}

impl DiskFreeReport {
    /// Bytes still available
    pub fn free_storage(&self) -> u64 {
        self.total_storage.saturating_sub(self.total_used_storage)
    }
}

/// One path reported by `du --versions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskUsageEntry {
    /// Remote path
    pub remote_path: String,
    /// Size in bytes
    pub size: u64,
    /// Size in bytes including file versions
    pub size_with_versions: u64,
}

/// Disk usage reported by `du --versions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskUsageReport {
    /// Entries in the order MEGAcmd printed them
    pub entries: Vec<DiskUsageEntry>,
    /// Total size in bytes
    pub size_total: u64,
    /// Total size in bytes including file versions
    pub size_total_with_versions: u64,
}

/// An exported (publicly linked) file or folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    /// Remote path of the exported node
    pub remote_path: String,
    /// Public link
    pub link: String,
    /// Human-readable size (files listed by `export` only)
    pub size: Option<String>,
    /// Whether the node is a folder
    pub is_folder: bool,
    /// Auth token for writable folder links
    pub auth_token: Option<String>,
}

/// How to log in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMethod {
    /// Email and password, with an optional two-factor code
    Credentials {
        /// Account email
        email: String,
        /// Account password
        password: String,
        /// Two-factor authentication code
        auth_code: Option<String>,
    },
    /// Resume a previously saved session
    Session(String),
}

/// Result of `logout`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutOutcome {
    /// Whether logout succeeded
    pub success: bool,
    /// Session id, when the session was kept
    pub session: Option<String>,
}

/// Filters for `find`.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Remote folder to search from (current remote folder if None)
    pub remote_path: Option<String>,
    /// Name pattern
    pub pattern: Option<String>,
    /// Modification time constraint, e.g. `-1d`
    pub mtime: Option<String>,
    /// Size constraint, e.g. `+10M`
    pub size: Option<String>,
}

/// Options for `get`.
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Local destination (current local folder if None)
    pub local_path: Option<String>,
    /// Password for password-protected links
    pub password: Option<String>,
    /// Merge a downloaded folder into an existing local folder
    pub merge: bool,
}

/// An `export` sub-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRequest {
    /// Create a link
    Add {
        /// Remote path to export
        remote_path: String,
        /// Writable folder link
        writable: bool,
        /// Link password (PRO accounts only)
        password: Option<String>,
    },
    /// Remove a link
    Delete {
        /// Remote path to stop exporting
        remote_path: String,
    },
    /// List links under a remote folder
    List {
        /// Remote folder (current remote folder if None)
        remote_path: Option<String>,
    },
}

/// Result of an [`ExportRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportOutcome {
    /// Link created, or None if MEGAcmd refused
    Added(Option<ExportEntry>),
    /// Whether the link was removed
    Deleted(bool),
    /// Existing links
    Listed(Vec<ExportEntry>),
}
