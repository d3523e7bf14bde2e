//! Email notification over SMTP.
//!
//! The failure policy is deliberately asymmetric: transport-level SMTP
//! failures (connect, auth, send) are recoverable and the caller swallows
//! them after printing, while structural failures (bad addresses, message
//! assembly) propagate and abort the run.

use crate::config::Sender;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::error::Error;
use std::fmt;
use tracing::info;

#[derive(Debug)]
pub enum NotifyError {
    /// SMTP transport or authentication failure. Recoverable.
    Transport(String),
    /// Unparseable sender or recipient address. Propagates.
    Address(lettre::address::AddressError),
    /// Message assembly failure. Propagates.
    Message(lettre::error::Error),
}

impl NotifyError {
    /// Whether the caller should log this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NotifyError::Transport(_))
    }
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Transport(e) => write!(f, "SMTP error: {}", e),
            NotifyError::Address(e) => write!(f, "Address error: {}", e),
            NotifyError::Message(e) => write!(f, "Message error: {}", e),
        }
    }
}

impl Error for NotifyError {}

impl From<lettre::transport::smtp::Error> for NotifyError {
    fn from(err: lettre::transport::smtp::Error) -> NotifyError {
        NotifyError::Transport(err.to_string())
    }
}

impl From<lettre::address::AddressError> for NotifyError {
    fn from(err: lettre::address::AddressError) -> NotifyError {
        NotifyError::Address(err)
    }
}

impl From<lettre::error::Error> for NotifyError {
    fn from(err: lettre::error::Error) -> NotifyError {
        NotifyError::Message(err)
    }
}

/// The mail seam: deliver one HTML message.
///
/// Injectable so the run orchestration can be exercised without a mail
/// relay.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send_html(&self, subject: &str, html_body: &str) -> Result<(), NotifyError>;
}

/// Production [`Mailer`] backed by lettre.
///
/// Plain SMTP session against the sender's host, credentials sent via LOGIN,
/// matching the relay setup the configuration describes.
pub struct SmtpMailer {
    sender: Sender,
    recipients: Vec<String>,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(sender: Sender, recipients: Vec<String>) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&sender.host)
            .credentials(Credentials::new(
                sender.account.clone(),
                sender.password.clone(),
            ))
            .build();

        Self {
            sender,
            recipients,
            transport,
        }
    }
}

impl Mailer for SmtpMailer {
    async fn send_html(&self, subject: &str, html_body: &str) -> Result<(), NotifyError> {
        let mut builder = Message::builder()
            .from(self.sender.account.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML);
        for recipient in &self.recipients {
            builder = builder.to(recipient.parse()?);
        }
        let message = builder.body(html_body.to_string())?;

        self.transport.send(message).await?;
        info!(
            "Summary email sent to {} recipient(s) via {}",
            self.recipients.len(),
            self.sender.host
        );
        Ok(())
    }
}
