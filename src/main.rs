mod cli;
mod commands;
mod config;
mod paths;
mod ui;

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command, ConfigCommand, ExportCommand};
use config::{Config, OutputFormat};
use megacmd::Client;
use std::io;
use std::path::PathBuf;

/// Global context for the application
pub struct Context {
    pub quiet: bool,
    pub json: bool,
    /// `--binary` flag or `MEGACTL_BINARY`
    pub binary: Option<PathBuf>,
    pub config: Config,
}

impl Context {
    /// Binary chosen by flag, env or config file, before discovery.
    pub fn binary_override(&self) -> Option<PathBuf> {
        self.binary.clone().or_else(|| self.config.binary_path())
    }

    /// Create a MEGAcmd client for the configured or discovered binary.
    pub fn client(&self) -> Result<Client> {
        let check = self.config.check_binary;
        match self.binary_override() {
            Some(path) => Client::new(&path, check)
                .with_context(|| format!("Failed to use MEGAcmd at {}", path.display())),
            None => Client::locate(check).context("Failed to locate MEGAcmd"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    // Neither needs a readable config file
    match cli.command {
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "megactl", &mut io::stdout());
            return Ok(());
        }
        Command::Config(ConfigCommand::Path) => return commands::config::path(),
        _ => {}
    }

    let config = Config::load()?;
    let ctx = Context {
        quiet: cli.quiet,
        json: cli.json || config.output == OutputFormat::Json,
        binary: cli.binary,
        config,
    };

    let result = run(&ctx, cli.command);
    if let Err(err) = &result
        && let Some(mega_err) = err.downcast_ref::<megacmd::Error>()
    {
        ui::error(mega_err.category().description());
        ui::hint(mega_err.category().advice());
    }
    result
}

fn run(ctx: &Context, command: Command) -> Result<()> {
    match command {
        Command::Ls { path } => commands::listing::ls(ctx, &path),
        Command::Find(args) => commands::listing::find(ctx, args),
        Command::Tree { path } => commands::listing::tree(ctx, path.as_deref()),
        Command::Df => commands::storage::df(ctx),
        Command::Du { paths } => commands::storage::du(ctx, &paths),
        Command::Export(cmd) => match cmd {
            ExportCommand::Add {
                path,
                writable,
                password,
            } => commands::export::add(ctx, &path, writable, password.as_deref()),
            ExportCommand::Delete { path } => commands::export::delete(ctx, &path),
            ExportCommand::List { path } => commands::export::list(ctx, path.as_deref()),
        },
        Command::Cat { paths } => commands::transfer::cat(ctx, &paths),
        Command::Get(args) => commands::transfer::get(ctx, args),
        Command::Put {
            local_paths,
            remote,
        } => commands::transfer::put(ctx, &local_paths, remote.as_deref()),
        Command::Import {
            link,
            remote,
            password,
        } => commands::transfer::import(ctx, &link, remote.as_deref(), password.as_deref()),
        Command::Cd { path } => commands::nav::cd(ctx, &path),
        Command::Lcd { path } => commands::nav::lcd(ctx, &path),
        Command::Pwd => commands::nav::pwd(ctx),
        Command::Lpwd => commands::nav::lpwd(ctx),
        Command::Login(args) => commands::session::login(ctx, args),
        Command::Logout { keep_session } => commands::session::logout(ctx, keep_session),
        Command::Whoami => commands::session::whoami(ctx),
        Command::Session => commands::session::session(ctx),
        Command::Version => commands::session::version(ctx),
        Command::Config(ConfigCommand::Show) => commands::config::show(ctx),
        Command::Config(ConfigCommand::Path) => commands::config::path(),
        Command::Completions { .. } => Ok(()),
    }
}
