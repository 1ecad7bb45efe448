use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "megactl")]
#[command(version)]
#[command(about = "Drive MEGA cloud storage through MEGAcmd", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the MEGAcmd executable (mega-exec)
    #[arg(long, env = "MEGACTL_BINARY", global = true)]
    pub binary: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List a remote folder
    Ls {
        /// Remote folder
        #[arg(default_value = "/")]
        path: String,
    },

    /// Search the remote tree
    Find(FindArgs),

    /// Print the remote tree
    Tree {
        /// Remote folder (current remote folder if omitted)
        path: Option<String>,
    },

    /// Show account storage usage
    Df,

    /// Show storage used by remote paths, including versions
    Du {
        /// Remote files or folders
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Manage public links
    #[command(subcommand)]
    Export(ExportCommand),

    /// Print remote files
    Cat {
        /// Remote files
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Download a remote file or folder
    Get(GetArgs),

    /// Upload local files or folders
    Put {
        /// Local files or folders
        #[arg(required = true)]
        local_paths: Vec<String>,

        /// Remote destination (required for several local paths)
        #[arg(long = "to")]
        remote: Option<String>,
    },

    /// Import an exported link into the account
    Import {
        /// Exported link
        link: String,

        /// Remote destination
        #[arg(long = "to")]
        remote: Option<String>,

        /// Link password
        #[arg(long)]
        password: Option<String>,
    },

    /// Change the current remote folder
    Cd {
        /// Remote folder
        path: String,
    },

    /// Change the current local folder
    Lcd {
        /// Local folder
        path: String,
    },

    /// Print the current remote folder
    Pwd,

    /// Print the current local folder
    Lpwd,

    /// Log in with credentials or a saved session
    Login(LoginArgs),

    /// Log out
    Logout {
        /// Keep the session so it can be resumed with `login --session`
        #[arg(long)]
        keep_session: bool,
    },

    /// Show the logged in account
    Whoami,

    /// Show the current session
    Session,

    /// Show the MEGAcmd version
    Version,

    /// Inspect megactl configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Listing
// ============================================================================

#[derive(Args)]
pub struct FindArgs {
    /// Remote folder to search from
    pub path: Option<String>,

    /// Name pattern, e.g. "*.pdf"
    #[arg(long)]
    pub pattern: Option<String>,

    /// Modification time constraint, e.g. "-1d"
    #[arg(long)]
    pub mtime: Option<String>,

    /// Size constraint, e.g. "+10M"
    #[arg(long)]
    pub size: Option<String>,
}

// ============================================================================
// Export
// ============================================================================

#[derive(Subcommand)]
pub enum ExportCommand {
    /// Create a public link
    Add {
        /// Remote file or folder
        path: String,

        /// Make a folder link writable
        #[arg(long)]
        writable: bool,

        /// Protect the link with a password (PRO accounts only)
        #[arg(long)]
        password: Option<String>,
    },

    /// Remove a public link
    Delete {
        /// Remote file or folder
        path: String,
    },

    /// List public links
    List {
        /// Remote folder (current remote folder if omitted)
        path: Option<String>,
    },
}

// ============================================================================
// Transfers
// ============================================================================

#[derive(Args)]
pub struct GetArgs {
    /// Remote file or folder
    pub remote: String,

    /// Local destination (current local folder if omitted)
    pub local: Option<String>,

    /// Merge a folder into an existing local folder
    #[arg(short, long)]
    pub merge: bool,

    /// Link password
    #[arg(long)]
    pub password: Option<String>,
}

// ============================================================================
// Session
// ============================================================================

#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(requires = "password", conflicts_with = "session")]
    pub email: Option<String>,

    /// Account password
    pub password: Option<String>,

    /// Two-factor authentication code
    #[arg(long, requires = "email")]
    pub auth_code: Option<String>,

    /// Resume a saved session instead
    #[arg(long, required_unless_present = "email")]
    pub session: Option<String>,
}

// ============================================================================
// Config
// ============================================================================

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,
}
