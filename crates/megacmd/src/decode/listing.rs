//! `ls -hal --show-handles` decoder.
//!
//! The listing is a fixed-width table. Columns are cut at character
//! offsets, never split on whitespace, because names and dates contain
//! spaces:
//!
//! ```text
//! FLAGS VERS    SIZE          DATE       HANDLE NAME
//! d---    -            - 07Jan2024 13:45:10 H:AbCdEfGh Documents
//! -ep-    1      1.50 MB 07Jan2024 13:45:10 H:QwErTyUi report final.pdf
//! ```

use crate::error::{Error, Result};
use crate::types::DirectoryEntry;

const FLAGS: (usize, usize) = (0, 4);
const SIZE: (usize, usize) = (9, 22);
const DATE: (usize, usize) = (22, 41);
const HANDLE: (usize, usize) = (41, 52);
const NAME_START: usize = 52;

/// Decode the output of `ls -hal --show-handles`.
///
/// The first line is the column header and is skipped. Blank lines are
/// ignored.
pub fn decode_ls(stdout: &str) -> Result<Vec<DirectoryEntry>> {
    stdout
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(decode_line)
        .collect()
}

fn decode_line(line: &str) -> Result<DirectoryEntry> {
    if line.chars().count() <= NAME_START {
        return Err(Error::unexpected("ls", line));
    }

    let flags = column(line, FLAGS.0, Some(FLAGS.1));
    let name = column(line, NAME_START, None);
    if flags.is_empty() || name.is_empty() {
        return Err(Error::unexpected("ls", line));
    }

    let size = column(line, SIZE.0, Some(SIZE.1));
    let size = (size != "-" && !size.is_empty()).then(|| size.to_string());

    Ok(DirectoryEntry {
        name: name.to_string(),
        handle: column(line, HANDLE.0, Some(HANDLE.1)).to_string(),
        is_directory: flags.starts_with('d'),
        flags: Some(flags.to_string()),
        date: Some(column(line, DATE.0, Some(DATE.1)).to_string()),
        size,
        link: None,
    })
}

/// Slice `line` by character offsets and trim the result.
///
/// Offsets past the end yield an empty string.
fn column(line: &str, start: usize, end: Option<usize>) -> &str {
    let byte_at = |n: usize| line.char_indices().nth(n).map_or(line.len(), |(i, _)| i);
    let from = byte_at(start);
    let to = end.map_or(line.len(), byte_at).max(from);
    line[from..to].trim()
}
