//! `find -l --show-handles` decoder.

use std::sync::LazyLock;

use regex::Regex;

use super::pattern;
use crate::error::{Error, Result};
use crate::types::DirectoryEntry;

// Folder shapes are tried first: "(folder, ...)" would otherwise be read
// as a file whose size is "folder".
static FOLDER_EXPORTED: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^([^<]+) <([\w:]+)> \(folder, [^:]+: (.+)\)$"));
static FOLDER: LazyLock<Regex> = LazyLock::new(|| pattern(r"^([^<]+) <([\w:]+)> \(folder\)$"));
static FILE_EXPORTED: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^([^<]+) <([\w:]+)> \(([^,)]+),[^:]+: (.+)\)$"));
static FILE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^([^<]+) <([\w:]+)> \(([^)]+)\)$"));

/// Decode the output of `find -l --show-handles`.
///
/// Flags and dates are never present in `find` output. Sizes are only
/// reported for files; links only for exported nodes.
pub fn decode_find(stdout: &str) -> Result<Vec<DirectoryEntry>> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(decode_line)
        .collect()
}

fn decode_line(line: &str) -> Result<DirectoryEntry> {
    if let Some(caps) = FOLDER_EXPORTED.captures(line) {
        return Ok(DirectoryEntry::new(&caps[1], &caps[2], true).with_link(&caps[3]));
    }
    if let Some(caps) = FOLDER.captures(line) {
        return Ok(DirectoryEntry::new(&caps[1], &caps[2], true));
    }
    if let Some(caps) = FILE_EXPORTED.captures(line) {
        return Ok(DirectoryEntry::new(&caps[1], &caps[2], false)
            .with_size(&caps[3])
            .with_link(&caps[4]));
    }
    if let Some(caps) = FILE.captures(line) {
        return Ok(DirectoryEntry::new(&caps[1], &caps[2], false).with_size(&caps[3]));
    }
    Err(Error::unexpected("find", line))
}
