//! `export` decoders.

use std::sync::LazyLock;

use regex::Regex;

use super::pattern;
use crate::error::{Error, Result};
use crate::types::ExportEntry;

static LIST_FILE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^(.+) \(([^,]+), shared as exported permanent file link: ([^)]+)\)$")
});
static LIST_FOLDER: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^(.+) \(folder, shared as exported permanent folder link: ([^)]+)\)$")
});
static LIST_AUTH_TOKEN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(.+) AuthToken=(.+?)$"));
static ADD_FOLDER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^Exported (.+?): (ht.+?)\n\s+AuthToken = (.+)$"));
static ADD_FILE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^Exported (.+?): (ht.+?)$"));

/// Decode the output of `export -f -a <path>`.
///
/// Only writable folder links carry an auth token, and that token is the
/// only way to tell a folder from a file here. Sizes are never reported.
pub fn decode_export_add(stdout: &str) -> Result<ExportEntry> {
    if let Some(caps) = ADD_FOLDER.captures(stdout) {
        return Ok(ExportEntry {
            remote_path: caps[1].to_string(),
            link: caps[2].to_string(),
            size: None,
            is_folder: true,
            auth_token: Some(caps[3].to_string()),
        });
    }
    if let Some(caps) = ADD_FILE.captures(stdout) {
        return Ok(ExportEntry {
            remote_path: caps[1].to_string(),
            link: caps[2].to_string(),
            size: None,
            is_folder: false,
            auth_token: None,
        });
    }
    Err(Error::unexpected("export", stdout))
}

/// Decode the output of `export [path]`, one exported node per line.
pub fn decode_export_list(stdout: &str) -> Result<Vec<ExportEntry>> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(decode_list_line)
        .collect()
}

fn decode_list_line(line: &str) -> Result<ExportEntry> {
    let (remote_path, size, is_folder, raw_link) = if let Some(caps) = LIST_FILE.captures(line) {
        (caps[1].to_string(), Some(caps[2].to_string()), false, caps[3].to_string())
    } else if let Some(caps) = LIST_FOLDER.captures(line) {
        (caps[1].to_string(), None, true, caps[2].to_string())
    } else {
        return Err(Error::unexpected("export", line));
    };

    let (link, auth_token) = match LIST_AUTH_TOKEN.captures(&raw_link) {
        Some(caps) => (caps[1].to_string(), Some(caps[2].to_string())),
        None => (raw_link, None),
    };

    Ok(ExportEntry {
        remote_path,
        link,
        size,
        is_folder,
        auth_token,
    })
}
