//! megactl configuration commands

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::Context;
use crate::config::OutputFormat;
use crate::paths;
use crate::ui;

/// Configuration after flags, env and config file are merged.
#[derive(Debug, Serialize)]
struct Effective {
    config_file: PathBuf,
    config_file_exists: bool,
    binary: Option<PathBuf>,
    binary_source: &'static str,
    check_binary: bool,
    output: OutputFormat,
}

pub fn path() -> Result<()> {
    println!("{}", paths::config_file()?.display());
    Ok(())
}

pub fn show(ctx: &Context) -> Result<()> {
    let config_file = paths::config_file()?;
    let (binary, binary_source) = if let Some(flag) = &ctx.binary {
        (Some(flag.clone()), "--binary / MEGACTL_BINARY")
    } else if let Some(configured) = ctx.config.binary_path() {
        (Some(configured), "config")
    } else {
        (megacmd::find_binary().ok(), "discovery")
    };

    let effective = Effective {
        config_file_exists: config_file.exists(),
        config_file,
        binary,
        binary_source,
        check_binary: ctx.config.check_binary,
        output: if ctx.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        },
    };

    if ctx.json {
        return ui::json(&effective);
    }

    ui::header("megactl configuration");
    let file_note = if effective.config_file_exists {
        ""
    } else {
        " (not found, using defaults)"
    };
    ui::kv(
        "Config file",
        &format!("{}{file_note}", effective.config_file.display()),
    );
    match &effective.binary {
        Some(binary) => ui::kv(
            "Binary",
            &format!("{} (from {})", binary.display(), effective.binary_source),
        ),
        None => ui::kv("Binary", "not found"),
    }
    ui::kv("Check binary", &effective.check_binary.to_string());
    ui::kv("Output", "human");
    Ok(())
}
