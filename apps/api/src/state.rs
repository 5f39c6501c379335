use std::sync::Arc;

use crate::config::Config;
use crate::linkedin::JobPublisher;
use crate::mail::transport::MailTransport;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; the collaborators are trait objects so tests can
/// substitute fakes.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Opens one SMTP session per send.
    pub mailer: Arc<dyn MailTransport>,
    pub publisher: Arc<dyn JobPublisher>,
}
