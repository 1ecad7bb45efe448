//! `df` decoder.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{number, pattern};
use crate::error::{Error, Result};
use crate::types::DiskFreeReport;

static CLOUD: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^Cloud drive:\s+(\d+) in\s+(\d+) file\(s\) and\s+(\d+) folder\(s\)")
});
static INBOX: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^Inbox:\s+(\d+) in\s+(\d+) file\(s\) and\s+(\d+) folder\(s\)"));
static BIN: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^Rubbish bin:\s+(\d+) in\s+(\d+) file\(s\) and\s+(\d+) folder\(s\)")
});
static TOTAL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^USED STORAGE:\s+(\d+)\s+([\d\.]+)% of\s+(\d+)"));
static VERSIONS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^Total size taken up by file versions:\s+(\d+)"));

/// Decode the output of `df`.
///
/// Storage areas that are not reported stay at zero, and lines for areas
/// this decoder does not know (vaults, backups, incoming shares) are
/// skipped. The `USED STORAGE` line is mandatory.
pub fn decode_df(stdout: &str) -> Result<DiskFreeReport> {
    let mut report = DiskFreeReport::default();
    let mut saw_total = false;

    for line in stdout.lines().map(str::trim) {
        if let Some(caps) = CLOUD.captures(line) {
            (
                report.cloud_drive_used,
                report.cloud_drive_files,
                report.cloud_drive_folders,
            ) = area(&caps)?;
        } else if let Some(caps) = INBOX.captures(line) {
            (report.inbox_used, report.inbox_files, report.inbox_folders) = area(&caps)?;
        } else if let Some(caps) = BIN.captures(line) {
            (
                report.rubbish_bin_used,
                report.rubbish_bin_files,
                report.rubbish_bin_folders,
            ) = area(&caps)?;
        } else if let Some(caps) = TOTAL.captures(line) {
            report.total_used_storage = number("df", &caps[1])?;
            report.used_storage_percentage = caps[2]
                .parse()
                .map_err(|_| Error::unexpected("df", line))?;
            report.total_storage = number("df", &caps[3])?;
            saw_total = true;
        } else if let Some(caps) = VERSIONS.captures(line) {
            report.size_file_versions = number("df", &caps[1])?;
        } else if !line.is_empty() {
            log::debug!("Skipping df line: {line}");
        }
    }

    if !saw_total {
        return Err(Error::unexpected("df", stdout));
    }
    Ok(report)
}

fn area(caps: &Captures<'_>) -> Result<(u64, u64, u64)> {
    Ok((
        number("df", &caps[1])?,
        number("df", &caps[2])?,
        number("df", &caps[3])?,
    ))
}
