pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::linkedin::handlers::handle_post_job;
use crate::mail::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Templated email
        .route("/api/send-email", post(handlers::handle_send_welcome))
        .route(
            "/api/send-recruitment-email",
            post(handlers::handle_send_recruitment),
        )
        .route("/api/send-job-offer", post(handlers::handle_send_job_offer))
        .route(
            "/api/send-interview-invitation",
            post(handlers::handle_send_interview_invitation),
        )
        .route(
            "/api/send-email-with-attachment",
            post(handlers::handle_send_with_attachment).layer(upload_limit),
        )
        .route(
            "/api/payslip",
            post(handlers::handle_send_payslip).layer(upload_limit),
        )
        // LinkedIn relay
        .route("/api/post-job", post(handle_post_job))
        .with_state(state)
}
