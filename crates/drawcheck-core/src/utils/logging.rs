/// Logging setup plus redaction helpers for secrets and PII
///
/// Recipient addresses and the provider credential must never reach the log
/// stream in clear text.
use crate::constants::DEFAULT_LOG_FILTER;
use regex::Regex;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

// Credential query parameter regex
static API_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(api_key=)[^&\s]*").unwrap());

/// Installs the JSON tracing subscriber used by the Lambda
///
/// The level comes from `RUST_LOG`, falling back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .init();
}

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use drawcheck_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("Sent to test@acme.com"), "Sent to ***@acme.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            if let Some(at_pos) = email.find('@') {
                format!("***{}", &email[at_pos..])
            } else {
                "***@***".to_string()
            }
        })
        .to_string()
}

/// Masks the `api_key` query value in URLs and error messages
///
/// # Examples
/// ```
/// use drawcheck_core::utils::logging::redact_api_key;
///
/// assert_eq!(
///     redact_api_key("https://x.test/r?api_key=abc&game=g"),
///     "https://x.test/r?api_key=***&game=g"
/// );
/// ```
pub fn redact_api_key(text: &str) -> String {
    API_KEY_PATTERN.replace_all(text, "${1}***").to_string()
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_email() {
        assert_eq!(redact_email("user@example.com"), "***@example.com");
        assert_eq!(
            redact_email("From: alice@foo.com To: bob@bar.com"),
            "From: ***@foo.com To: ***@bar.com"
        );
        assert_eq!(redact_email("no address here"), "no address here");
    }

    #[test]
    fn test_redact_email_rejects_pipe_in_tld() {
        assert_eq!(redact_email("user@host.c|m"), "user@host.c|m");
        assert_eq!(
            redact_email("user@host.com|user@host.org"),
            "***@host.com|***@host.org"
        );
    }

    #[test]
    fn test_redact_api_key() {
        assert_eq!(
            redact_api_key("error sending request for url (https://www.magayo.com/api/results.php?api_key=s3cr3t&game=us_pa_pick3_eve)"),
            "error sending request for url (https://www.magayo.com/api/results.php?api_key=***&game=us_pa_pick3_eve)"
        );
        assert_eq!(redact_api_key("API_KEY=abc"), "API_KEY=***");
        assert_eq!(redact_api_key("game=x"), "game=x");
    }

    #[test]
    fn test_redact_body() {
        assert_eq!(redact_body("Hello world"), "[11 bytes]");
        assert_eq!(redact_body(""), "[0 bytes]");
    }
}
