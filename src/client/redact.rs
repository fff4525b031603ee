const VISIBLE_PREFIX: usize = 6;
const VISIBLE_SUFFIX: usize = 5;
const REVEAL_THRESHOLD: usize = 10;
const PLACEHOLDER: &str = "<redacted>";

/// Shortens a secret for diagnostics: the first 6 and last 5 characters joined by `...`.
///
/// Tokens of 10 characters or fewer would be mostly revealed, so they are replaced entirely.
pub fn redact_token(token: &str) -> String {
    let characters: Vec<char> = token.chars().collect();

    if characters.len() <= REVEAL_THRESHOLD {
        return PLACEHOLDER.to_string();
    }

    let prefix: String = characters[..VISIBLE_PREFIX].iter().collect();
    let suffix: String = characters[characters.len() - VISIBLE_SUFFIX..].iter().collect();

    format!("{prefix}...{suffix}")
}

pub fn unauthorized_diagnostic(token: &str, help_message: &str) -> String {
    format!(
        "Unauthorized response, the token ({}) was rejected or has expired. {}",
        redact_token(token),
        help_message
    )
}
