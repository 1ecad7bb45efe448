//! Public link commands

use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use megacmd::{ExportEntry, MegaCmd};

use crate::Context;
use crate::ui;

pub fn add(ctx: &Context, path: &str, writable: bool, password: Option<&str>) -> Result<()> {
    let client = ctx.client()?;
    let Some(entry) = client
        .export_add(path, writable, password)
        .with_context(|| format!("Failed to export {path}"))?
    else {
        bail!("MEGAcmd refused to export {path} (run with -v for details)");
    };

    if ctx.json {
        return ui::json(&entry);
    }

    ui::success(&format!("Exported {}", entry.remote_path));
    ui::kv("Link", &entry.link);
    if let Some(token) = &entry.auth_token {
        ui::kv("AuthToken", token);
    }
    Ok(())
}

pub fn delete(ctx: &Context, path: &str) -> Result<()> {
    let client = ctx.client()?;
    let deleted = client
        .export_delete(path)
        .with_context(|| format!("Failed to remove link for {path}"))?;

    if !deleted {
        bail!("MEGAcmd refused to remove the link for {path}");
    }
    if ctx.json {
        return ui::json(&deleted);
    }
    ui::success(&format!("Removed link for {path}"));
    Ok(())
}

pub fn list(ctx: &Context, path: Option<&str>) -> Result<()> {
    let client = ctx.client()?;
    let entries = client.export_list(path).context("Failed to list links")?;

    if ctx.json {
        return ui::json(&entries);
    }

    if entries.is_empty() {
        ui::dim("No exported files or folders");
        return Ok(());
    }

    ui::header("Public links");
    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

fn print_entry(entry: &ExportEntry) {
    let kind = if entry.is_folder {
        "folder".to_string()
    } else {
        entry.size.clone().unwrap_or_else(|| "file".to_string())
    };
    println!("  {} {}", entry.remote_path.bold(), format!("({kind})").dimmed());
    println!("    {}", entry.link.cyan());
    if let Some(token) = &entry.auth_token {
        println!("    {} {token}", "AuthToken:".dimmed());
    }
}
