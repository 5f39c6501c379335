use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::linkedin::formatter::format_job_post;
use crate::models::job::{JobData, JobPostRequest, JobPostedResponse};
use crate::models::non_blank;
use crate::state::AppState;

/// POST /api/post-job
///
/// Formats the job record and relays it to LinkedIn with the caller's token.
/// Provider rejections come back as 422 with the provider's status attached.
pub async fn handle_post_job(
    State(state): State<AppState>,
    payload: Result<Json<JobPostRequest>, JsonRejection>,
) -> Result<Json<JobPostedResponse>, AppError> {
    let Json(request) = payload?;

    // Any non-empty object counts as a job record, even if no field is recognised.
    let record = request.job_data.filter(|record| !record.is_empty());
    let (record, access_token) = match (record, non_blank(&request.access_token)) {
        (Some(record), Some(token)) => (record, token),
        _ => {
            return Err(AppError::Validation(
                "Missing jobData or accessToken".to_string(),
            ))
        }
    };
    let job = JobData::from_record(record)
        .map_err(|e| AppError::Validation(format!("Invalid jobData: {e}")))?;

    let application_url = non_blank(&request.application_url)
        .map(str::to_string)
        .unwrap_or_else(|| state.config.default_application_url.clone());

    let text = format_job_post(&job, &application_url);
    info!(
        "Relaying job post '{}' ({} chars) to LinkedIn",
        job.title.as_deref().unwrap_or_default(),
        text.chars().count()
    );

    let post = state.publisher.publish(access_token, &text).await?;
    info!("LinkedIn post created: {:?}", post.id);

    Ok(Json(JobPostedResponse {
        success: true,
        post_id: post.id,
        message: "Successfully posted to LinkedIn",
        application_url,
    }))
}
