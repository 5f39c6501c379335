use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{non_blank, null_as_default, optional_port, optional_text};

/// Flat placeholder map substituted into an email template.
pub type TemplateData = BTreeMap<String, Value>;

/// JSON body shared by every templated email endpoint.
/// Deliberately not `Debug`: it carries the sender's SMTP password.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    #[serde(default, deserialize_with = "optional_text")]
    pub sender_email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub sender_password: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub smtp_server: Option<String>,
    #[serde(default, deserialize_with = "optional_port")]
    pub smtp_port: Option<u16>,
    #[serde(default, deserialize_with = "optional_text")]
    pub recipient_email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub template_data: TemplateData,
}

/// Sender/recipient triple that must be present before any network call.
pub struct Parties<'a> {
    pub sender_email: &'a str,
    pub sender_password: &'a str,
    pub recipient_email: &'a str,
}

pub const MISSING_PARTIES: &str =
    "Missing required fields: senderEmail, senderPassword, or recipientEmail";

/// Returns the three required fields, or `None` if any is missing or blank.
pub fn required_parties<'a>(
    sender_email: &'a Option<String>,
    sender_password: &'a Option<String>,
    recipient_email: &'a Option<String>,
) -> Option<Parties<'a>> {
    Some(Parties {
        sender_email: non_blank(sender_email)?,
        sender_password: sender_password.as_deref().filter(|p| !p.is_empty())?,
        recipient_email: non_blank(recipient_email)?,
    })
}

/// One uploaded file from the attachment endpoint.
#[derive(Debug, Clone)]
pub struct AttachmentFile {
    pub filename: String,
    pub content: Bytes,
    pub content_type: Option<String>,
}

/// Per-file summary echoed back to the caller after a successful send.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttachmentInfo {
    pub filename: String,
    pub size: usize,
    pub content_type: Option<String>,
}

impl From<&AttachmentFile> for AttachmentInfo {
    fn from(file: &AttachmentFile) -> Self {
        AttachmentInfo {
            filename: file.filename.clone(),
            size: file.content.len(),
            content_type: file.content_type.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmailSentResponse {
    pub success: bool,
    pub message: &'static str,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AttachmentEmailResponse {
    pub success: bool,
    pub message: &'static str,
    pub recipient: String,
    pub subject: String,
    pub attachments: Vec<AttachmentInfo>,
    pub total_attachments: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipSentResponse {
    pub success: bool,
    pub message: &'static str,
    pub recipient: String,
    pub pay_period: String,
    pub attachment: AttachmentInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_request_accepts_string_port_and_null_template_data() {
        let req: EmailRequest = serde_json::from_value(json!({
            "senderEmail": "a@x.com",
            "senderPassword": "pw",
            "recipientEmail": "b@y.com",
            "smtpPort": "465",
            "templateData": null
        }))
        .unwrap();
        assert_eq!(req.smtp_port, Some(465));
        assert!(req.template_data.is_empty());
        assert!(req.smtp_server.is_none());
    }

    #[test]
    fn test_email_request_rejects_bad_port() {
        let parsed = serde_json::from_value::<EmailRequest>(json!({"smtpPort": "smtp"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_required_parties_rejects_blank_fields() {
        let email = Some("a@x.com".to_string());
        let password = Some("pw".to_string());
        let blank = Some("  ".to_string());
        assert!(required_parties(&email, &password, &email).is_some());
        assert!(required_parties(&email, &password, &blank).is_none());
        assert!(required_parties(&None, &password, &email).is_none());
        assert!(required_parties(&email, &Some(String::new()), &email).is_none());
    }

    #[test]
    fn test_welcome_response_omits_optional_fields() {
        let response = EmailSentResponse {
            success: true,
            message: "Email sent successfully",
            recipient: "b@y.com".into(),
            subject: None,
            candidate_name: None,
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"success": true, "message": "Email sent successfully", "recipient": "b@y.com"})
        );
    }
}
