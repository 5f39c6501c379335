use serde_json::Value;

use crate::mail::templates::{
    INTERVIEW_INVITATION_TEMPLATE, JOB_OFFER_TEMPLATE, PAYSLIP_TEMPLATE,
    RECRUITMENT_EXAM_TEMPLATE, WELCOME_TEMPLATE,
};
use crate::models::email::TemplateData;
use crate::models::text_value;

/// The templated emails this service sends. The JSON routes are thin wrappers
/// that pick one of these and hand it to `service::send_templated_email`;
/// `Payslip` goes through `service::send_payslip` with its PDF attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    Welcome,
    RecruitmentExam,
    JobOffer,
    InterviewInvitation,
    Payslip,
}

impl EmailKind {
    pub fn template(self) -> &'static str {
        match self {
            EmailKind::Welcome => WELCOME_TEMPLATE,
            EmailKind::RecruitmentExam => RECRUITMENT_EXAM_TEMPLATE,
            EmailKind::JobOffer => JOB_OFFER_TEMPLATE,
            EmailKind::InterviewInvitation => INTERVIEW_INVITATION_TEMPLATE,
            EmailKind::Payslip => PAYSLIP_TEMPLATE,
        }
    }

    /// Values filled in when the caller leaves a key out of `templateData`.
    pub fn template_defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            EmailKind::InterviewInvitation => &[
                ("candidate_name", "Candidate"),
                ("message_body", "We would like to invite you for an interview."),
            ],
            EmailKind::Payslip => &[("company_name", "Your Company")],
            _ => &[],
        }
    }

    /// Subject used when the request does not carry one.
    pub fn default_subject(self, data: &TemplateData) -> String {
        match self {
            EmailKind::Welcome => "Welcome - Your Account Credentials".to_string(),
            EmailKind::RecruitmentExam => "Campus Recruitment Exam Invitation".to_string(),
            EmailKind::JobOffer => format!(
                "Job Offer - {} Position at {}",
                lookup(data, "job_title").unwrap_or_else(|| "Job Position".to_string()),
                lookup(data, "company_name").unwrap_or_else(|| "Our Company".to_string()),
            ),
            EmailKind::InterviewInvitation => format!(
                "Interview Invitation - {}",
                lookup(data, "candidate_name").unwrap_or_else(|| "Candidate".to_string()),
            ),
            EmailKind::Payslip => format!(
                "Payslip for {} - {}",
                lookup(data, "pay_period").unwrap_or_default(),
                lookup(data, "employee_name").unwrap_or_default(),
            ),
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            EmailKind::Welcome => "Email sent successfully",
            EmailKind::RecruitmentExam => "Campus recruitment email sent successfully",
            EmailKind::JobOffer => "Job offer email sent successfully",
            EmailKind::InterviewInvitation => "Interview invitation sent successfully",
            EmailKind::Payslip => "Payslip sent successfully",
        }
    }

    /// Interview invitations carry no SMTP defaults; host and port must be sent.
    pub fn requires_explicit_smtp(self) -> bool {
        matches!(self, EmailKind::InterviewInvitation)
    }

    /// Whether the success envelope echoes the resolved subject.
    pub fn echoes_subject(self) -> bool {
        matches!(self, EmailKind::JobOffer | EmailKind::InterviewInvitation)
    }

    pub fn label(self) -> &'static str {
        match self {
            EmailKind::Welcome => "welcome",
            EmailKind::RecruitmentExam => "recruitment_exam",
            EmailKind::JobOffer => "job_offer",
            EmailKind::InterviewInvitation => "interview_invitation",
            EmailKind::Payslip => "payslip",
        }
    }

    /// Merges the kind's defaults under the caller's data.
    pub fn resolve_data(self, mut data: TemplateData) -> TemplateData {
        for (key, value) in self.template_defaults() {
            data.entry(key.to_string())
                .or_insert_with(|| Value::String(value.to_string()));
        }
        data
    }
}

fn lookup(data: &TemplateData, key: &str) -> Option<String> {
    data.get(key).filter(|v| !v.is_null()).map(text_value)
}
