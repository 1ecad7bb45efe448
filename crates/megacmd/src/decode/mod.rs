//! Decoders for MEGAcmd's human-readable output.
//!
//! Each decoder understands exactly the shapes one MEGAcmd command prints
//! and fails with [`Error::UnexpectedOutput`](crate::Error::UnexpectedOutput)
//! on anything else. There is no fuzzy recovery: an unknown line means the
//! output format changed and the decoder needs updating.

pub mod account;
pub mod df;
pub mod du;
pub mod export;
pub mod find;
pub mod listing;

pub use account::{decode_logout_session, decode_session, decode_whoami};
pub use df::decode_df;
pub use du::decode_du;
pub use export::{decode_export_add, decode_export_list};
pub use find::decode_find;
pub use listing::decode_ls;

use regex::Regex;

/// Compile a pattern that is known to be valid.
fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("valid decoder regex")
}

/// Returns true for purely decorative lines (rules made of dashes).
fn is_separator(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '-')
}

/// Parse a captured run of digits.
///
/// Only fails when the value overflows, which is reported as unexpected
/// output for `command`.
fn number(command: &str, digits: &str) -> crate::Result<u64> {
    digits
        .parse()
        .map_err(|_| crate::Error::unexpected(command, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_separator() {
        assert!(is_separator("-----------"));
        assert!(!is_separator(""));
        assert!(!is_separator("--- x ---"));
    }

    #[test]
    fn test_number_overflow_is_unexpected() {
        assert_eq!(number("df", "42").unwrap(), 42);
        let err = number("df", "99999999999999999999999").unwrap_err();
        assert_eq!(err.category(), crate::ErrorCategory::Format);
    }
}
