//! Decoders for account and session commands.

use std::sync::LazyLock;

use regex::Regex;

use super::pattern;

static WHOAMI_EMAIL: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)Account e-mail: (.+?)$"));
static LOGOUT_SESSION: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)session id: (.+?)$"));
static SESSION: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^Your \(secret\) session is:\s+(.+)$"));

/// Extract the account email from `whoami` output.
pub fn decode_whoami(stdout: &str) -> Option<String> {
    capture(&WHOAMI_EMAIL, stdout)
}

/// Extract the session from `session` output.
pub fn decode_session(stdout: &str) -> Option<String> {
    capture(&SESSION, stdout)
}

/// Extract the kept session id from `logout --keep-session` output.
pub fn decode_logout_session(stdout: &str) -> Option<String> {
    capture(&LOGOUT_SESSION, stdout)
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .map(|caps| caps[1].trim_end_matches('\r').to_string())
}
