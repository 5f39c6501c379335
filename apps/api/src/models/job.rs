use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::optional_text;

/// Job record relayed to LinkedIn. Both the extended field names
/// (`job_description`, `key_responsibilities`, ...) and the short ones
/// (`description`, `responsibilities`, ...) are read; when a record carries
/// both, the non-blank extended value wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "JobRecord")]
pub struct JobData {
    pub title: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_range: Option<String>,
    pub description: Option<String>,
    pub responsibilities: Option<String>,
    pub qualifications: Option<String>,
    pub skills: Option<Skills>,
    pub benefits: Option<String>,
}

/// Wire shape of `jobData`, one slot per spelling. Unknown keys are ignored.
#[derive(Deserialize)]
struct JobRecord {
    #[serde(default, deserialize_with = "optional_text")]
    job_title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    location: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    department: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    employment_type: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    experience_level: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    salary_range: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    job_description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    key_responsibilities: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    responsibilities: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    qualification_requirements: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    qualifications: Option<String>,
    #[serde(default)]
    required_skills: Option<Skills>,
    #[serde(default)]
    skills: Option<Skills>,
    #[serde(default, deserialize_with = "optional_text")]
    additional_benefits: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    benefits: Option<String>,
}

impl From<JobRecord> for JobData {
    fn from(r: JobRecord) -> Self {
        JobData {
            title: prefer_text(r.job_title, r.title),
            location: r.location,
            department: r.department,
            employment_type: r.employment_type,
            experience_level: r.experience_level,
            salary_range: r.salary_range,
            description: prefer_text(r.job_description, r.description),
            responsibilities: prefer_text(r.key_responsibilities, r.responsibilities),
            qualifications: prefer_text(r.qualification_requirements, r.qualifications),
            skills: prefer(r.required_skills, r.skills, Skills::is_blank),
            benefits: prefer_text(r.additional_benefits, r.benefits),
        }
    }
}

fn prefer<T>(extended: Option<T>, short: Option<T>, is_blank: impl Fn(&T) -> bool) -> Option<T> {
    match extended {
        Some(value) if !is_blank(&value) => Some(value),
        other => short.or(other),
    }
}

fn prefer_text(extended: Option<String>, short: Option<String>) -> Option<String> {
    prefer(extended, short, |s: &String| s.trim().is_empty())
}

impl JobData {
    /// Parses the raw `jobData` object.
    pub fn from_record(record: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(record))
    }
}

/// Skills arrive either as a list or as one preformatted string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    List(Vec<String>),
    Text(String),
}

impl Skills {
    pub fn is_blank(&self) -> bool {
        match self {
            Skills::List(items) => items.iter().all(|item| item.trim().is_empty()),
            Skills::Text(text) => text.trim().is_empty(),
        }
    }

    /// Lists are joined with ", "; strings are used verbatim.
    pub fn to_text(&self) -> String {
        match self {
            Skills::List(items) => items.join(", "),
            Skills::Text(text) => text.clone(),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostRequest {
    /// Kept as the raw object: any non-empty object counts as supplied.
    #[serde(default)]
    pub job_data: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "optional_text")]
    pub access_token: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub application_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostedResponse {
    pub success: bool,
    pub post_id: Option<String>,
    pub message: &'static str,
    pub application_url: String,
}
