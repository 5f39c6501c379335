//! validate → render → build → dispatch, shared by every email route.

use chrono::{Datelike, NaiveDate, Utc};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::mail::kind::EmailKind;
use crate::mail::message::OutboundEmail;
use crate::mail::template::{has_unresolved_placeholders, render};
use crate::mail::transport::{MailTransport, SmtpRelay, DEFAULT_SMTP_PORT, DEFAULT_SMTP_SERVER};
use crate::models::email::{
    required_parties, AttachmentEmailResponse, AttachmentFile, AttachmentInfo, EmailRequest,
    EmailSentResponse, PayslipSentResponse, TemplateData, MISSING_PARTIES,
};
use crate::models::{non_blank, text_value};

const MISSING_SMTP: &str = "Missing smtpServer or smtpPort";
const DEFAULT_ATTACHMENT_SUBJECT: &str = "Email with Attachment";
const DEFAULT_ATTACHMENT_BODY: &str = "Please find the attached file.";
const MISSING_PAYSLIP_FIELDS: &str =
    "Missing required fields: employeeName, employeeEmail, senderEmail, or senderPassword";
const PAYSLIP_SENDER_NAME: &str = "HR Department";
const PDF: &str = "application/pdf";

/// Sends one templated email of the given kind.
pub async fn send_templated_email(
    mailer: &dyn MailTransport,
    kind: EmailKind,
    request: EmailRequest,
) -> Result<EmailSentResponse, AppError> {
    let parties = required_parties(
        &request.sender_email,
        &request.sender_password,
        &request.recipient_email,
    )
    .ok_or_else(|| AppError::Validation(MISSING_PARTIES.to_string()))?;

    let (host, port) = match (non_blank(&request.smtp_server), request.smtp_port) {
        (Some(host), Some(port)) => (host, port),
        _ if kind.requires_explicit_smtp() => {
            return Err(AppError::Validation(MISSING_SMTP.to_string()))
        }
        (host, port) => (
            host.unwrap_or(DEFAULT_SMTP_SERVER),
            port.unwrap_or(DEFAULT_SMTP_PORT),
        ),
    };
    let relay = SmtpRelay::new(host, port, parties.sender_email, parties.sender_password);

    let data = kind.resolve_data(request.template_data);
    let subject = non_blank(&request.subject)
        .map(str::to_string)
        .unwrap_or_else(|| kind.default_subject(&data));
    let html = render(kind.template(), &data);
    if has_unresolved_placeholders(&html) {
        debug!("{} template rendered with unfilled placeholders", kind.label());
    }

    info!(
        "Sending {} email to {} via {}:{}",
        kind.label(),
        parties.recipient_email,
        relay.host,
        relay.port
    );

    let email = OutboundEmail::html(
        parties.sender_email,
        parties.recipient_email,
        &subject,
        html,
    );
    mailer.send(&relay, email).await?;

    info!("{} email sent to {}", kind.label(), parties.recipient_email);

    Ok(EmailSentResponse {
        success: true,
        message: kind.success_message(),
        recipient: parties.recipient_email.to_string(),
        candidate_name: match kind {
            EmailKind::InterviewInvitation => data.get("candidate_name").map(text_value),
            _ => None,
        },
        subject: kind.echoes_subject().then_some(subject),
    })
}

/// Fields collected from the multipart form of the attachment endpoint.
#[derive(Default)]
pub struct AttachmentForm {
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
    pub recipient_email: Option<String>,
    pub subject: Option<String>,
    pub message_body: Option<String>,
    pub smtp_server: Option<String>,
    pub smtp_port: Option<String>,
    pub attachments: Vec<AttachmentFile>,
}

/// Sends a plain-text email carrying every uploaded file.
pub async fn send_with_attachments(
    mailer: &dyn MailTransport,
    form: AttachmentForm,
) -> Result<AttachmentEmailResponse, AppError> {
    let parties = required_parties(
        &form.sender_email,
        &form.sender_password,
        &form.recipient_email,
    )
    .ok_or_else(|| AppError::Validation(MISSING_PARTIES.to_string()))?;

    let attachments: Vec<AttachmentFile> = form
        .attachments
        .into_iter()
        .filter(|file| !file.filename.is_empty())
        .collect();
    if attachments.is_empty() {
        return Err(AppError::Validation("No files uploaded".to_string()));
    }

    let relay = form_relay(
        &form.smtp_server,
        &form.smtp_port,
        parties.sender_email,
        parties.sender_password,
    )?;

    let subject = non_blank(&form.subject).unwrap_or(DEFAULT_ATTACHMENT_SUBJECT);
    let text = non_blank(&form.message_body).unwrap_or(DEFAULT_ATTACHMENT_BODY);
    let attachment_info: Vec<AttachmentInfo> = attachments.iter().map(AttachmentInfo::from).collect();

    for file in &attachment_info {
        debug!("Attaching {} ({} bytes)", file.filename, file.size);
    }
    info!(
        "Sending email with {} attachment(s) to {} via {}:{}",
        attachment_info.len(),
        parties.recipient_email,
        relay.host,
        relay.port
    );

    let email = OutboundEmail::with_attachments(
        parties.sender_email,
        parties.recipient_email,
        subject,
        text,
        attachments,
    );
    mailer.send(&relay, email).await?;

    Ok(AttachmentEmailResponse {
        success: true,
        message: "Email with attachments sent successfully",
        recipient: parties.recipient_email.to_string(),
        subject: subject.to_string(),
        total_attachments: attachment_info.len(),
        attachments: attachment_info,
    })
}

/// Relay for a multipart form, where the port arrives as text.
fn form_relay(
    smtp_server: &Option<String>,
    smtp_port: &Option<String>,
    username: &str,
    password: &str,
) -> Result<SmtpRelay, AppError> {
    let port = match non_blank(smtp_port) {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| AppError::Validation(format!("Invalid smtpPort: {raw}")))?,
        None => DEFAULT_SMTP_PORT,
    };
    let host = non_blank(smtp_server).unwrap_or(DEFAULT_SMTP_SERVER);
    Ok(SmtpRelay::new(host, port, username, password))
}

/// Fields collected from the multipart form of the payslip endpoint.
#[derive(Default)]
pub struct PayslipForm {
    pub employee_name: Option<String>,
    pub employee_email: Option<String>,
    pub company_name: Option<String>,
    pub pay_period: Option<String>,
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
    pub smtp_server: Option<String>,
    pub smtp_port: Option<String>,
    pub payslip: Option<AttachmentFile>,
}

/// Sends the payslip notification to one employee with the PDF attached.
pub async fn send_payslip(
    mailer: &dyn MailTransport,
    form: PayslipForm,
) -> Result<PayslipSentResponse, AppError> {
    let kind = EmailKind::Payslip;
    let missing = || AppError::Validation(MISSING_PAYSLIP_FIELDS.to_string());
    let employee_name = non_blank(&form.employee_name).ok_or_else(missing)?;
    let employee_email = non_blank(&form.employee_email).ok_or_else(missing)?;
    let parties = required_parties(&form.sender_email, &form.sender_password, &form.employee_email)
        .ok_or_else(missing)?;

    let pay_period = non_blank(&form.pay_period)
        .ok_or_else(|| AppError::Validation("Missing payPeriod".to_string()))?;
    let pdf = form
        .payslip
        .filter(|file| !file.content.is_empty())
        .ok_or_else(|| AppError::Validation("PDF file is required".to_string()))?;

    let relay = form_relay(
        &form.smtp_server,
        &form.smtp_port,
        parties.sender_email,
        parties.sender_password,
    )?;

    let company_name = non_blank(&form.company_name);
    let data = kind.resolve_data(payslip_data(
        employee_name,
        pay_period,
        company_name,
        Utc::now().date_naive(),
    ));
    let subject = kind.default_subject(&data);
    let html = render(kind.template(), &data);

    let attachment = AttachmentFile {
        filename: payslip_filename(employee_name, pay_period),
        content: pdf.content,
        content_type: Some(PDF.to_string()),
    };
    let attachment_info = AttachmentInfo::from(&attachment);

    info!(
        "Sending {} email for {} to {} via {}:{}",
        kind.label(),
        pay_period,
        employee_email,
        relay.host,
        relay.port
    );

    let email = OutboundEmail::html(parties.sender_email, employee_email, &subject, html)
        .sender_name(company_name.unwrap_or(PAYSLIP_SENDER_NAME))
        .attach(attachment);
    mailer.send(&relay, email).await?;

    Ok(PayslipSentResponse {
        success: true,
        message: kind.success_message(),
        recipient: employee_email.to_string(),
        pay_period: pay_period.to_string(),
        attachment: attachment_info,
    })
}

fn payslip_data(
    employee_name: &str,
    pay_period: &str,
    company_name: Option<&str>,
    today: NaiveDate,
) -> TemplateData {
    let mut data = TemplateData::new();
    data.insert("employee_name".into(), Value::from(employee_name));
    data.insert("pay_period".into(), Value::from(pay_period));
    if let Some(company) = company_name {
        data.insert("company_name".into(), Value::from(company));
    }
    data.insert(
        "generated_date".into(),
        Value::from(today.format("%-m/%-d/%Y").to_string()),
    );
    data.insert("year".into(), Value::from(today.year()));
    data
}

/// `Payslip_<name>_<period>.pdf`, whitespace runs collapsed to `_`.
fn payslip_filename(employee_name: &str, pay_period: &str) -> String {
    let underscored = |s: &str| s.split_whitespace().collect::<Vec<_>>().join("_");
    format!(
        "Payslip_{}_{}.pdf",
        underscored(employee_name),
        underscored(pay_period)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payslip_filename_collapses_whitespace() {
        assert_eq!(
            payslip_filename("Ada  Lovelace", "March 2025"),
            "Payslip_Ada_Lovelace_March_2025.pdf"
        );
    }

    #[test]
    fn test_payslip_data_dates() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let data = payslip_data("Ada", "March 2025", None, today);
        assert_eq!(data["generated_date"], "3/7/2025");
        assert_eq!(data["year"], 2025);
        assert!(!data.contains_key("company_name"));

        let data = payslip_data("Ada", "March 2025", Some("Acme"), today);
        assert_eq!(data["company_name"], "Acme");
    }
}
