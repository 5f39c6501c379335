//! Axum route handlers for the email endpoints.

use axum::{
    extract::multipart::{Field, MultipartRejection},
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::mail::kind::EmailKind;
use crate::mail::service::{
    send_payslip, send_templated_email, send_with_attachments, AttachmentForm, PayslipForm,
};
use crate::models::email::{
    AttachmentEmailResponse, AttachmentFile, EmailRequest, EmailSentResponse, PayslipSentResponse,
};
use crate::state::AppState;

async fn dispatch(
    state: &AppState,
    kind: EmailKind,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<EmailSentResponse>, AppError> {
    let Json(request) = payload?;
    let response = send_templated_email(state.mailer.as_ref(), kind, request).await?;
    Ok(Json(response))
}

/// POST /api/send-email
pub async fn handle_send_welcome(
    State(state): State<AppState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<EmailSentResponse>, AppError> {
    dispatch(&state, EmailKind::Welcome, payload).await
}

/// POST /api/send-recruitment-email
pub async fn handle_send_recruitment(
    State(state): State<AppState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<EmailSentResponse>, AppError> {
    dispatch(&state, EmailKind::RecruitmentExam, payload).await
}

/// POST /api/send-job-offer
pub async fn handle_send_job_offer(
    State(state): State<AppState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<EmailSentResponse>, AppError> {
    dispatch(&state, EmailKind::JobOffer, payload).await
}

/// POST /api/send-interview-invitation
pub async fn handle_send_interview_invitation(
    State(state): State<AppState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<EmailSentResponse>, AppError> {
    dispatch(&state, EmailKind::InterviewInvitation, payload).await
}

/// POST /api/send-email-with-attachment
///
/// Multipart form: text fields plus one or more file parts named `attachments`.
/// Unknown fields are ignored.
pub async fn handle_send_with_attachment(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AttachmentEmailResponse>, AppError> {
    let mut multipart = multipart?;
    let mut form = AttachmentForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "attachments" => form.attachments.push(read_file(field).await?),
            "senderEmail" => form.sender_email = Some(field.text().await?),
            "senderPassword" => form.sender_password = Some(field.text().await?),
            "recipientEmail" => form.recipient_email = Some(field.text().await?),
            "subject" => form.subject = Some(field.text().await?),
            "messageBody" => form.message_body = Some(field.text().await?),
            "smtpServer" => form.smtp_server = Some(field.text().await?),
            "smtpPort" => form.smtp_port = Some(field.text().await?),
            _ => {}
        }
    }

    let response = send_with_attachments(state.mailer.as_ref(), form).await?;
    Ok(Json(response))
}

/// POST /api/payslip
///
/// Multipart form: employee and sender fields plus a single file part named
/// `payslip`, which is attached as a PDF.
pub async fn handle_send_payslip(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PayslipSentResponse>, AppError> {
    let mut multipart = multipart?;
    let mut form = PayslipForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "payslip" => form.payslip = Some(read_file(field).await?),
            "employeeName" => form.employee_name = Some(field.text().await?),
            "employeeEmail" => form.employee_email = Some(field.text().await?),
            "companyName" => form.company_name = Some(field.text().await?),
            "payPeriod" => form.pay_period = Some(field.text().await?),
            "senderEmail" => form.sender_email = Some(field.text().await?),
            "senderPassword" => form.sender_password = Some(field.text().await?),
            "smtpServer" => form.smtp_server = Some(field.text().await?),
            "smtpPort" => form.smtp_port = Some(field.text().await?),
            _ => {}
        }
    }

    let response = send_payslip(state.mailer.as_ref(), form).await?;
    Ok(Json(response))
}

async fn read_file(field: Field<'_>) -> Result<AttachmentFile, AppError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let content_type = field.content_type().map(str::to_string);
    let content: Bytes = field.bytes().await?;
    Ok(AttachmentFile {
        filename,
        content,
        content_type,
    })
}
