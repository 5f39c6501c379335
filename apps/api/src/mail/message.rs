//! Outbound message assembly. Handlers produce an `OutboundEmail`; the lettre
//! transport turns it into a MIME `Message` right before sending.

use lettre::message::header::{ContentTransferEncoding, ContentType};
use lettre::message::{Attachment, Body, Mailbox, MultiPart, SinglePart};
use lettre::Address;
use lettre::Message;

use crate::mail::transport::DispatchError;
use crate::models::email::AttachmentFile;

const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub enum MailBody {
    /// Rendered template. Alone it is sent as `multipart/alternative` with one
    /// HTML part; with attachments that part is nested in `multipart/mixed`.
    Html(String),
    /// Plain text, followed by the attachments in `multipart/mixed`.
    Text(String),
}

#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: String,
    /// Display name for the `From` header.
    pub sender_name: Option<String>,
    pub to: String,
    pub subject: String,
    pub body: MailBody,
    /// Sent as base64 `Content-Disposition: attachment` parts.
    pub attachments: Vec<AttachmentFile>,
}

impl OutboundEmail {
    pub fn html(from: &str, to: &str, subject: &str, html: String) -> Self {
        OutboundEmail {
            from: from.to_string(),
            sender_name: None,
            to: to.to_string(),
            subject: subject.to_string(),
            body: MailBody::Html(html),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachments(
        from: &str,
        to: &str,
        subject: &str,
        text: &str,
        attachments: Vec<AttachmentFile>,
    ) -> Self {
        OutboundEmail {
            from: from.to_string(),
            sender_name: None,
            to: to.to_string(),
            subject: subject.to_string(),
            body: MailBody::Text(text.to_string()),
            attachments,
        }
    }

    pub fn sender_name(mut self, name: &str) -> Self {
        self.sender_name = Some(name.to_string());
        self
    }

    pub fn attach(mut self, file: AttachmentFile) -> Self {
        self.attachments.push(file);
        self
    }

    /// Builds the MIME message. Addresses are only parsed here, so a malformed
    /// address surfaces as a dispatch failure rather than a validation error.
    pub fn to_message(&self) -> Result<Message, DispatchError> {
        let from = Mailbox::new(self.sender_name.clone(), self.from.parse::<Address>()?);
        let builder = Message::builder()
            .from(from)
            .to(self.to.parse::<Mailbox>()?)
            .subject(self.subject.as_str());

        let mut multipart = match (&self.body, self.attachments.is_empty()) {
            (MailBody::Html(html), true) => {
                MultiPart::alternative().singlepart(SinglePart::html(html.clone()))
            }
            (MailBody::Html(html), false) => MultiPart::mixed().multipart(
                MultiPart::alternative().singlepart(SinglePart::html(html.clone())),
            ),
            (MailBody::Text(text), _) => MultiPart::mixed().singlepart(SinglePart::plain(text.clone())),
        };
        for file in &self.attachments {
            multipart = multipart.singlepart(attachment_part(file)?);
        }

        builder
            .multipart(multipart)
            .map_err(|e| DispatchError::Message(e.to_string()))
    }
}

fn attachment_part(file: &AttachmentFile) -> Result<SinglePart, DispatchError> {
    let declared = file
        .content_type
        .as_deref()
        .and_then(|declared| ContentType::parse(declared).ok());
    let content_type = match declared {
        Some(content_type) => content_type,
        None => ContentType::parse(OCTET_STREAM)
            .map_err(|e| DispatchError::Message(e.to_string()))?,
    };

    let body = Body::new_with_encoding(file.content.to_vec(), ContentTransferEncoding::Base64)
        .map_err(|_| {
            DispatchError::Message(format!("could not base64-encode {}", file.filename))
        })?;

    Ok(Attachment::new(file.filename.clone()).body(body, content_type))
}
