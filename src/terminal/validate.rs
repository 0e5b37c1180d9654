use regex::Regex;
use std::sync::OnceLock;
use url::Url;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Permissive `local@domain.tld` check; not RFC 5322.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

pub fn is_valid_absolute_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}
