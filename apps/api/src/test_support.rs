//! Recording fakes for the mail transport and the job publisher.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::linkedin::{JobPublisher, PublishedPost, RelayError};
use crate::mail::message::OutboundEmail;
use crate::mail::transport::{DispatchError, MailTransport, SmtpRelay};
use crate::state::AppState;

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(SmtpRelay, OutboundEmail)>>,
    failure: Option<fn() -> DispatchError>,
}

impl RecordingMailer {
    pub fn failing(failure: fn() -> DispatchError) -> Self {
        RecordingMailer {
            sent: Mutex::default(),
            failure: Some(failure),
        }
    }

    pub fn sent(&self) -> Vec<(SmtpRelay, OutboundEmail)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailer {
    async fn send(&self, relay: &SmtpRelay, email: OutboundEmail) -> Result<(), DispatchError> {
        self.sent.lock().unwrap().push((relay.clone(), email));
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(()),
        }
    }
}

pub struct FakePublisher {
    pub calls: Mutex<Vec<(String, String)>>,
    outcome: fn() -> Result<PublishedPost, RelayError>,
}

impl FakePublisher {
    pub fn returning(outcome: fn() -> Result<PublishedPost, RelayError>) -> Self {
        FakePublisher {
            calls: Mutex::default(),
            outcome,
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for FakePublisher {
    fn default() -> Self {
        FakePublisher::returning(|| {
            Ok(PublishedPost {
                id: Some("post123".to_string()),
            })
        })
    }
}

#[async_trait]
impl JobPublisher for FakePublisher {
    async fn publish(&self, access_token: &str, text: &str) -> Result<PublishedPost, RelayError> {
        self.calls
            .lock()
            .unwrap()
            .push((access_token.to_string(), text.to_string()));
        (self.outcome)()
    }
}

pub fn test_state(mailer: Arc<RecordingMailer>, publisher: Arc<FakePublisher>) -> AppState {
    AppState {
        config: Config::default(),
        mailer,
        publisher,
    }
}
