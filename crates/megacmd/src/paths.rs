//! Normalisation of paths before they are handed to MEGAcmd.

/// Clean a remote path.
///
/// Strips leading spaces and newlines and a leading `./`. With
/// `ensure_trailing_slash`, the result ends with `/` (MEGAcmd treats such a
/// destination as a folder).
pub fn clean_remote_path(remote_path: &str, ensure_trailing_slash: bool) -> String {
    let trimmed = remote_path.trim_start_matches([' ', '\n']);
    let mut path = trimmed.strip_prefix("./").unwrap_or(trimmed).to_string();
    if ensure_trailing_slash && !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Clean a local path.
///
/// Strips leading spaces and newlines and any trailing `/`. The filesystem
/// root is kept as `/`.
pub fn clean_local_path(local_path: &str, ensure_trailing_slash: bool) -> String {
    let trimmed = local_path.trim_start_matches([' ', '\n']);
    let mut path = trimmed.trim_end_matches('/').to_string();
    if path.is_empty() && trimmed.starts_with('/') {
        path.push('/');
    }
    if ensure_trailing_slash && !path.ends_with('/') {
        path.push('/');
    }
    path
}
