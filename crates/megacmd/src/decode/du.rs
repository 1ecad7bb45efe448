//! `du --versions` decoder.

use std::sync::LazyLock;

use regex::Regex;

use super::{is_separator, number, pattern};
use crate::error::{Error, Result};
use crate::types::{DiskUsageEntry, DiskUsageReport};

static TOTAL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^Total storage used:\s+(\d+)\s+(\d+)$"));
// Greedy so that paths containing ':' keep everything up to the last one.
static ENTRY: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(.+):\s+(\d+)\s+(\d+)$"));

const HEADER_PREFIX: &str = "FILENAME";

/// Decode the output of `du --versions`.
///
/// The column header and separator rules are skipped; every other line
/// must be an entry or the totals line.
pub fn decode_du(stdout: &str) -> Result<DiskUsageReport> {
    let mut report = DiskUsageReport::default();

    for line in stdout.lines().map(str::trim) {
        if line.is_empty() || is_separator(line) || line.starts_with(HEADER_PREFIX) {
            continue;
        }

        if let Some(caps) = TOTAL.captures(line) {
            report.size_total = number("du", &caps[1])?;
            report.size_total_with_versions = number("du", &caps[2])?;
        } else if let Some(caps) = ENTRY.captures(line) {
            report.entries.push(DiskUsageEntry {
                remote_path: caps[1].to_string(),
                size: number("du", &caps[2])?,
                size_with_versions: number("du", &caps[3])?,
            });
        } else {
            return Err(Error::unexpected("du", line));
        }
    }

    Ok(report)
}
