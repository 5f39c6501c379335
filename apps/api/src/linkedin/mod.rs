//! LinkedIn relay: wraps post text in a UGC share and publishes it with the
//! caller's bearer token. One POST per request, no retries.
//!
//! The author URN is fixed by configuration rather than resolved from the
//! token's identity.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::AppError;

pub mod formatter;
pub mod handlers;

const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";
/// Header LinkedIn uses to echo the created entity's id.
const RESTLI_ID_HEADER: &str = "x-restli-id";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LinkedIn API error (status {status}): {body}")]
    Api { status: u16, body: Value },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Api { status, body } => AppError::Upstream {
                error: body,
                status_code: Some(status),
            },
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

#[derive(Debug, Serialize)]
struct UgcPost<'a> {
    author: &'a str,
    #[serde(rename = "lifecycleState")]
    lifecycle_state: &'static str,
    #[serde(rename = "specificContent")]
    specific_content: SpecificContent<'a>,
    visibility: Visibility,
}

#[derive(Debug, Serialize)]
struct SpecificContent<'a> {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    share_content: ShareContent<'a>,
}

#[derive(Debug, Serialize)]
struct ShareContent<'a> {
    #[serde(rename = "shareCommentary")]
    share_commentary: ShareCommentary<'a>,
    #[serde(rename = "shareMediaCategory")]
    share_media_category: &'static str,
}

#[derive(Debug, Serialize)]
struct ShareCommentary<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    member_network_visibility: &'static str,
}

impl<'a> UgcPost<'a> {
    fn public_text(author: &'a str, text: &'a str) -> Self {
        UgcPost {
            author,
            lifecycle_state: "PUBLISHED",
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text },
                    share_media_category: "NONE",
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC",
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    id: Option<Value>,
}

/// A post the provider accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedPost {
    pub id: Option<String>,
}

/// Seam for the outbound relay. `AppState` holds an `Arc<dyn JobPublisher>`.
#[async_trait]
pub trait JobPublisher: Send + Sync {
    async fn publish(&self, access_token: &str, text: &str) -> Result<PublishedPost, RelayError>;
}

#[derive(Clone)]
pub struct LinkedInClient {
    client: Client,
    endpoint: String,
    author_urn: String,
}

impl LinkedInClient {
    pub fn new(endpoint: String, author_urn: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            author_urn,
        }
    }
}

#[async_trait]
impl JobPublisher for LinkedInClient {
    async fn publish(&self, access_token: &str, text: &str) -> Result<PublishedPost, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(access_token)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .json(&UgcPost::public_text(&self.author_urn, text))
            .send()
            .await?;

        let status = response.status();
        let header_id = response
            .headers()
            .get(RESTLI_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        debug!("LinkedIn API responded {}", status);

        if status.is_success() {
            let body_id = if body.trim().is_empty() {
                None
            } else {
                serde_json::from_str::<CreatedPost>(&body)?.id
            };
            let id = body_id
                .map(|id| match id {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .or(header_id);
            return Ok(PublishedPost { id });
        }

        warn!("LinkedIn API returned {}: {}", status, body);
        let error = serde_json::from_str::<Value>(&body).unwrap_or_else(|_| json!({ "message": body }));
        Err(RelayError::Api {
            status: status.as_u16(),
            body: error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::post,
        Json, Router,
    };
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

    /// Serves `status` + `body` on a random local port and records each request.
    async fn stub_provider(status: StatusCode, body: &'static str) -> (String, Captured) {
        let captured: Captured = Arc::default();
        let sink = captured.clone();
        let app = Router::new().route(
            "/v2/ugcPosts",
            post(move |headers: HeaderMap, Json(payload): Json<Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().unwrap().push((headers, payload));
                    (status, body).into_response()
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/v2/ugcPosts"), captured)
    }

    fn client(endpoint: String) -> LinkedInClient {
        LinkedInClient::new(endpoint, "urn:li:person:test".into())
    }

    #[test]
    fn test_ugc_envelope_shape() {
        let payload = serde_json::to_value(UgcPost::public_text("urn:li:person:abc", "hello")).unwrap();
        assert_eq!(
            payload,
            json!({
                "author": "urn:li:person:abc",
                "lifecycleState": "PUBLISHED",
                "specificContent": {
                    "com.linkedin.ugc.ShareContent": {
                        "shareCommentary": {"text": "hello"},
                        "shareMediaCategory": "NONE"
                    }
                },
                "visibility": {"com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"}
            })
        );
    }

    #[tokio::test]
    async fn test_created_post_returns_id_and_sends_headers() {
        let (url, captured) = stub_provider(StatusCode::CREATED, r#"{"id":"post123"}"#).await;
        let post = client(url).publish("tok-abc", "We're hiring").await.unwrap();
        assert_eq!(post.id.as_deref(), Some("post123"));

        let requests = captured.lock().unwrap();
        let (headers, payload) = &requests[0];
        assert_eq!(headers["authorization"], "Bearer tok-abc");
        assert_eq!(headers["x-restli-protocol-version"], "2.0.0");
        assert_eq!(
            payload["specificContent"]["com.linkedin.ugc.ShareContent"]["shareCommentary"]["text"],
            "We're hiring"
        );
        assert_eq!(payload["author"], "urn:li:person:test");
    }

    #[tokio::test]
    async fn test_json_error_body_is_passed_through() {
        let (url, _) = stub_provider(
            StatusCode::UNAUTHORIZED,
            r#"{"status":401,"message":"Invalid access token"}"#,
        )
        .await;
        let err = client(url).publish("expired", "text").await.unwrap_err();
        match err {
            RelayError::Api { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body["message"], "Invalid access token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_wrapped() {
        let (url, _) = stub_provider(StatusCode::BAD_GATEWAY, "upstream unavailable").await;
        let err = client(url).publish("tok", "text").await.unwrap_err();
        let app_err: AppError = err.into();
        match app_err {
            AppError::Upstream { error, status_code } => {
                assert_eq!(status_code, Some(502));
                assert_eq!(error, json!({"message": "upstream unavailable"}));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_internal() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}/v2/ugcPosts"))
            .publish("tok", "text")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Http(_)));
        let app_err: AppError = err.into();
        assert_eq!(app_err.kind(), crate::errors::ErrorKind::Internal);
    }
}
