//! Common types shared across the monitor.

use std::fmt;

/// Outcome of probing one configured site.
///
/// Every request-level failure (DNS, connect, TLS, an actual timeout) is
/// collapsed into [`Status::Timeout`]; the underlying cause is only visible
/// in debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Response received with HTTP 200.
    Ok,
    /// Response received with any other status code, carried verbatim.
    Http(u16),
    /// The request itself failed.
    Timeout,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Http(code) => write!(f, "{}", code),
            Status::Timeout => write!(f, "TIMEOUT"),
        }
    }
}

/// The result of checking a single site during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub site: String,
    pub url: String,
    pub status: Status,
}

impl CheckResult {
    pub fn new(site: impl Into<String>, url: impl Into<String>, status: Status) -> Self {
        Self {
            site: site.into(),
            url: url.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_matches_report_vocabulary() {
        assert_eq!(Status::Ok.to_string(), "OK");
        assert_eq!(Status::Http(404).to_string(), "404");
        assert_eq!(Status::Http(503).to_string(), "503");
        assert_eq!(Status::Timeout.to_string(), "TIMEOUT");
    }

    #[test]
    fn only_ok_is_ok() {
        assert!(Status::Ok.is_ok());
        assert!(!Status::Http(200).is_ok());
        assert!(!Status::Http(404).is_ok());
        assert!(!Status::Timeout.is_ok());
    }
}
