//! Remote listing commands
//!
//! Commands:
//! - ls: Contents of a remote folder
//! - find: Search the remote tree
//! - tree: Remote tree as MEGAcmd draws it

use anyhow::{Context as _, Result};
use colored::Colorize;
use megacmd::{DirectoryEntry, FindOptions, MegaCmd};

use crate::Context;
use crate::cli::FindArgs;
use crate::ui;

pub fn ls(ctx: &Context, path: &str) -> Result<()> {
    let client = ctx.client()?;
    let entries = client
        .ls(path)
        .with_context(|| format!("Failed to list {path}"))?;

    if ctx.json {
        return ui::json(&entries);
    }

    if entries.is_empty() {
        ui::dim("Empty folder");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{} {:>10} {} {} {}",
            entry.flags.as_deref().unwrap_or("").dimmed(),
            entry.size.as_deref().unwrap_or("-"),
            entry.date.as_deref().unwrap_or(""),
            entry.handle.dimmed(),
            display_name(entry)
        );
    }
    Ok(())
}

pub fn find(ctx: &Context, args: FindArgs) -> Result<()> {
    let client = ctx.client()?;
    let options = FindOptions {
        remote_path: args.path,
        pattern: args.pattern,
        mtime: args.mtime,
        size: args.size,
    };
    let entries = client.find(&options).context("Failed to search")?;

    if ctx.json {
        return ui::json(&entries);
    }

    if entries.is_empty() {
        ui::dim("No matches");
        return Ok(());
    }

    for entry in &entries {
        let mut line = format!("{} {}", display_name(entry), entry.handle.dimmed());
        if let Some(size) = &entry.size {
            line.push_str(&format!(" ({size})"));
        }
        if let Some(link) = &entry.link {
            line.push_str(&format!(" {}", link.cyan()));
        }
        println!("{line}");
    }

    if !ctx.quiet {
        println!();
        ui::dim(&format!("{} matches", entries.len()));
    }
    Ok(())
}

pub fn tree(ctx: &Context, path: Option<&str>) -> Result<()> {
    let client = ctx.client()?;
    let tree = client.tree(path).context("Failed to print tree")?;

    if ctx.json {
        return ui::json(&tree);
    }
    println!("{tree}");
    Ok(())
}

fn display_name(entry: &DirectoryEntry) -> String {
    if entry.is_directory {
        format!("{}/", entry.name).blue().bold().to_string()
    } else {
        entry.name.clone()
    }
}
