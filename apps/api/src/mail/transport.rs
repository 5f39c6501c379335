//! SMTP dispatch. One STARTTLS session per call: connect, authenticate, send
//! one message, quit. The crate is built without lettre's `pool` feature, so
//! nothing is reused across requests.

use std::fmt;

use async_trait::async_trait;
use lettre::address::AddressError;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::{Category, Code, Detail, Severity};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::mail::message::OutboundEmail;

pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("SMTP Authentication failed. Please check email credentials.")]
    Authentication,

    #[error("SMTP Error: {0}")]
    Smtp(String),

    #[error("Invalid email address: {0}")]
    Address(#[from] AddressError),

    #[error("Failed to build email message: {0}")]
    Message(String),
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Authentication => AppError::Unauthorized(err.to_string()),
            DispatchError::Smtp(_) | DispatchError::Address(_) => AppError::upstream(err.to_string()),
            DispatchError::Message(_) => AppError::Internal(anyhow::Error::new(err)),
        }
    }
}

/// Where and as whom to send. Built per request from caller-supplied fields.
#[derive(Clone)]
pub struct SmtpRelay {
    pub host: String,
    pub port: u16,
    pub username: String,
    password: String,
}

impl SmtpRelay {
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> Self {
        SmtpRelay {
            host: host.to_string(),
            port,
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for SmtpRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpRelay")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The mail transport trait. `AppState` carries an `Arc<dyn MailTransport>`
/// so tests can swap in a recording fake.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, relay: &SmtpRelay, email: OutboundEmail) -> Result<(), DispatchError>;
}

/// Production transport backed by lettre's tokio SMTP client.
pub struct LettreMailer;

#[async_trait]
impl MailTransport for LettreMailer {
    async fn send(&self, relay: &SmtpRelay, email: OutboundEmail) -> Result<(), DispatchError> {
        let message = email.to_message()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&relay.host)
            .map_err(classify)?
            .port(relay.port)
            .credentials(Credentials::new(
                relay.username.clone(),
                relay.password().to_string(),
            ))
            .build();

        debug!("Connecting to SMTP server {}:{}", relay.host, relay.port);

        transport.send(message).await.map_err(|e| {
            warn!("SMTP send via {}:{} failed: {e}", relay.host, relay.port);
            classify(e)
        })?;

        Ok(())
    }
}

fn classify(err: lettre::transport::smtp::Error) -> DispatchError {
    match err.status() {
        Some(code) if is_auth_rejection(&code) => DispatchError::Authentication,
        _ => DispatchError::Smtp(err.to_string()),
    }
}

/// 530 (auth required), 534 (mechanism too weak), 535 (credentials invalid).
fn is_auth_rejection(code: &Code) -> bool {
    code.severity == Severity::PermanentNegativeCompletion
        && code.category == Category::Unspecified3
        && matches!(code.detail, Detail::Zero | Detail::Four | Detail::Five)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn code(severity: Severity, category: Category, detail: Detail) -> Code {
        Code {
            severity,
            category,
            detail,
        }
    }

    #[test]
    fn test_535_is_auth_rejection() {
        let c = code(
            Severity::PermanentNegativeCompletion,
            Category::Unspecified3,
            Detail::Five,
        );
        assert!(is_auth_rejection(&c));
    }

    #[test]
    fn test_mailbox_errors_are_not_auth() {
        // 550 mailbox unavailable
        let c = code(
            Severity::PermanentNegativeCompletion,
            Category::MailSystem,
            Detail::Zero,
        );
        assert!(!is_auth_rejection(&c));
        // 454 temporary auth failure is transient, reported as an SMTP error
        let c = code(
            Severity::TransientNegativeCompletion,
            Category::MailSystem,
            Detail::Four,
        );
        assert!(!is_auth_rejection(&c));
    }

    #[test]
    fn test_dispatch_error_mapping() {
        let auth: AppError = DispatchError::Authentication.into();
        assert_eq!(auth.kind().status(), StatusCode::UNAUTHORIZED);

        let smtp: AppError = DispatchError::Smtp("554 rejected".into()).into();
        assert_eq!(smtp.kind().status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(smtp.to_string(), "Upstream error: \"SMTP Error: 554 rejected\"");

        let build: AppError = DispatchError::Message("bad header".into()).into();
        assert_eq!(build.kind().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unreachable_smtp_server_is_upstream() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let relay = SmtpRelay::new("127.0.0.1", port, "a@x.com", "pw");
        let email = OutboundEmail::html("a@x.com", "b@y.com", "Hi", "<p>Hi</p>".to_string());
        let err = LettreMailer.send(&relay, email).await.unwrap_err();

        assert!(matches!(err, DispatchError::Smtp(_)), "unexpected error: {err:?}");
        let app_err: AppError = err.into();
        assert_eq!(app_err.kind().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unparseable_address_is_upstream() {
        let relay = SmtpRelay::new("127.0.0.1", 25, "not-an-address", "pw");
        let email = OutboundEmail::html("not-an-address", "b@y.com", "Hi", String::new());
        let err = LettreMailer.send(&relay, email).await.unwrap_err();

        assert!(matches!(err, DispatchError::Address(_)));
        let app_err: AppError = err.into();
        assert_eq!(app_err.kind().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_relay_debug_redacts_password() {
        let relay = SmtpRelay::new("smtp.example.com", 587, "a@x.com", "hunter2");
        let rendered = format!("{relay:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("smtp.example.com"));
    }
}
