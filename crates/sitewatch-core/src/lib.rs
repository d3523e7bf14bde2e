//! Sitewatch Core - sequential website checking and reporting.
//!
//! One monitoring pass loads a JSON configuration, issues one GET per site
//! in name order, prints a status line per site, and optionally mails an
//! HTML summary. The HTTP and SMTP seams are traits so the whole pass can
//! run against fakes in tests.

pub mod checker;
pub mod config;
pub mod monitor;
pub mod notify;
pub mod report;
pub mod tracing_setup;
pub mod types;

pub use checker::{Fetch, HttpFetch};
pub use config::{Config, ConfigError, Sender};
pub use notify::{Mailer, NotifyError, SmtpMailer};
pub use types::{CheckResult, Status};
