//! One full monitoring pass: check every site, then optionally mail the
//! summary.

use crate::checker::{self, Fetch};
use crate::config::Config;
use crate::notify::{Mailer, NotifyError};
use crate::report;
use crate::types::CheckResult;
use chrono::Local;

/// Timestamp format used for the console header and the mail subject.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Run one monitoring pass.
///
/// Prints the run timestamp, checks every configured site in name order, and,
/// when a mailer is supplied, sends the HTML summary. A recoverable notify
/// failure is printed and swallowed; a structural one is returned to the
/// caller. The collected results are returned either way on the success path.
pub async fn run<F: Fetch, M: Mailer>(
    config: &Config,
    fetch: &F,
    mailer: Option<&M>,
) -> Result<Vec<CheckResult>, NotifyError> {
    let now = Local::now();
    println!("{}", now.format(TIMESTAMP_FORMAT));

    let results = checker::check_sites(&config.websites, fetch).await;

    if let Some(mailer) = mailer {
        let subject = format!("Website daily check - {}", now.format(TIMESTAMP_FORMAT));
        let body = report::html_document(&results);
        match mailer.send_html(&subject, &body).await {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => println!("{}", e),
            Err(e) => return Err(e),
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::FetchError;
    use crate::types::Status;
    use lettre::Message;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct AlwaysOk;

    impl Fetch for AlwaysOk {
        async fn get(&self, _url: &str) -> Result<u16, FetchError> {
            Ok(200)
        }
    }

    /// Records sent messages; optionally fails every send with a scripted
    /// error.
    struct FakeMailer {
        sent: Mutex<Vec<(String, String)>>,
        fail_with: Option<fn() -> NotifyError>,
    }

    impl FakeMailer {
        fn recording() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(fail_with: fn() -> NotifyError) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: Some(fail_with),
            }
        }
    }

    impl Mailer for FakeMailer {
        async fn send_html(&self, subject: &str, html_body: &str) -> Result<(), NotifyError> {
            if let Some(fail) = self.fail_with {
                return Err(fail());
            }
            self.sent
                .lock()
                .unwrap()
                .push((subject.to_string(), html_body.to_string()));
            Ok(())
        }
    }

    fn config(entries: &[(&str, &str)]) -> Config {
        Config {
            websites: entries
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect::<BTreeMap<_, _>>(),
            sender: None,
            recipients: Vec::new(),
        }
    }

    #[tokio::test]
    async fn without_a_mailer_nothing_is_sent() {
        let config = config(&[("a", "http://a.test/"), ("b", "http://b.test/")]);

        let results = run(&config, &AlwaysOk, None::<&FakeMailer>).await.unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.status == Status::Ok));
    }

    #[tokio::test]
    async fn with_a_mailer_one_summary_is_sent() {
        let config = config(&[("a", "http://a.test/"), ("b", "http://b.test/")]);
        let mailer = FakeMailer::recording();

        run(&config, &AlwaysOk, Some(&mailer)).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (subject, body) = &sent[0];
        assert!(subject.starts_with("Website daily check - "));
        assert_eq!(body.matches("<tr style=\"height: 30px;\">").count(), 2);
    }

    #[tokio::test]
    async fn transport_failure_is_swallowed() {
        let config = config(&[("a", "http://a.test/")]);
        let mailer =
            FakeMailer::failing(|| NotifyError::Transport("535 authentication failed".into()));

        let results = run(&config, &AlwaysOk, Some(&mailer)).await.unwrap();

        // the run still completes with its results
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn structural_failure_propagates() {
        let config = config(&[("a", "http://a.test/")]);
        let mailer = FakeMailer::failing(|| {
            Message::builder()
                .subject("x")
                .body(String::from("y"))
                .unwrap_err()
                .into()
        });

        let err = run(&config, &AlwaysOk, Some(&mailer)).await.unwrap_err();
        assert!(!err.is_recoverable());
    }
}
