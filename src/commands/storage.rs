//! Storage usage commands

use anyhow::{Context as _, Result};
use colored::Colorize;
use megacmd::MegaCmd;

use crate::Context;
use crate::ui;

pub fn df(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let report = client.df().context("Failed to read storage usage")?;

    if ctx.json {
        return ui::json(&report);
    }

    ui::header("MEGA Storage");
    let area = |name: &str, used: u64, files: u64, folders: u64| {
        ui::kv(
            name,
            &format!("{} in {files} files and {folders} folders", ui::format_size(used)),
        );
    };
    area(
        "Cloud drive",
        report.cloud_drive_used,
        report.cloud_drive_files,
        report.cloud_drive_folders,
    );
    area(
        "Inbox",
        report.inbox_used,
        report.inbox_files,
        report.inbox_folders,
    );
    area(
        "Rubbish bin",
        report.rubbish_bin_used,
        report.rubbish_bin_files,
        report.rubbish_bin_folders,
    );
    println!();

    let percentage = format!("{:.2}%", report.used_storage_percentage);
    let percentage = if report.used_storage_percentage >= 90.0 {
        percentage.red().bold()
    } else {
        percentage.normal()
    };
    ui::kv(
        "Used",
        &format!(
            "{} of {} ({percentage})",
            ui::format_size(report.total_used_storage),
            ui::format_size(report.total_storage)
        ),
    );
    ui::kv("Free", &ui::format_size(report.free_storage()));
    ui::kv("Versions", &ui::format_size(report.size_file_versions));
    Ok(())
}

pub fn du(ctx: &Context, paths: &[String]) -> Result<()> {
    let client = ctx.client()?;
    let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
    let report = client
        .du(&paths)
        .context("Failed to read disk usage")?;

    if ctx.json {
        return ui::json(&report);
    }

    for entry in &report.entries {
        println!(
            "{:>10} {:>10}  {}",
            ui::format_size(entry.size),
            ui::format_size(entry.size_with_versions).dimmed(),
            entry.remote_path
        );
    }
    println!(
        "{:>10} {:>10}  {}",
        ui::format_size(report.size_total).bold(),
        ui::format_size(report.size_total_with_versions).dimmed(),
        "total".bold()
    );
    Ok(())
}
