//! Job post text for LinkedIn.
//!
//! Line order is fixed. The four summary fields fall back to "Not specified";
//! salary and the responsibilities/qualifications/skills/benefits blocks only
//! appear when they hold text. The closing hashtag line is built from the
//! department and title with whitespace removed.

use crate::models::job::JobData;

const NOT_SPECIFIED: &str = "Not specified";
const NO_DESCRIPTION: &str = "No description available";

pub fn format_job_post(job: &JobData, application_url: &str) -> String {
    let mut post = String::new();

    post.push_str(&format!(
        "🚀 We're Hiring: {}\n\n",
        job.title.as_deref().unwrap_or(NOT_SPECIFIED)
    ));
    post.push_str(&format!("📍 Location: {}\n", or_not_specified(&job.location)));
    post.push_str(&format!("🏢 Department: {}\n", or_not_specified(&job.department)));
    post.push_str(&format!(
        "💼 Employment Type: {}\n",
        or_not_specified(&job.employment_type)
    ));
    post.push_str(&format!(
        "⭐ Experience Level: {}\n",
        or_not_specified(&job.experience_level)
    ));

    if let Some(salary) = present(&job.salary_range) {
        post.push_str(&format!("💰 Salary Range: {salary}\n"));
    }

    post.push_str(&format!(
        "\n📋 Job Description:\n{}\n\n",
        job.description.as_deref().unwrap_or(NO_DESCRIPTION)
    ));

    if let Some(responsibilities) = present(&job.responsibilities) {
        post.push_str(&format!("🎯 Key Responsibilities:\n{responsibilities}\n\n"));
    }
    if let Some(qualifications) = present(&job.qualifications) {
        post.push_str(&format!("✅ Qualifications:\n{qualifications}\n\n"));
    }
    if let Some(skills) = job.skills.as_ref().map(|s| s.to_text()).filter(|s| !s.is_empty()) {
        post.push_str(&format!("🛠️ Skills Required:\n{skills}\n\n"));
    }
    if let Some(benefits) = present(&job.benefits) {
        post.push_str(&format!("🎁 Benefits:\n{benefits}\n\n"));
    }

    post.push_str(&format!(
        "📧 Ready to join our team? Apply now: {application_url}\n\n"
    ));
    post.push_str(&format!(
        "#Hiring #Jobs #{} #{}",
        hashtag(job.department.as_deref()),
        hashtag(job.title.as_deref())
    ));

    post
}

fn or_not_specified(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_SPECIFIED)
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn hashtag(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Skills;

    const URL: &str = "https://careers.example.com/apply/42";

    fn job() -> JobData {
        JobData {
            title: Some("Senior Backend Engineer".into()),
            location: Some("Remote".into()),
            department: Some("Platform Engineering".into()),
            employment_type: Some("Full-time".into()),
            experience_level: Some("Senior".into()),
            description: Some("Build the billing pipeline.".into()),
            ..JobData::default()
        }
    }

    #[test]
    fn test_skills_list_is_comma_joined() {
        let mut j = job();
        j.skills = Some(Skills::List(vec!["Go".into(), "Rust".into()]));
        let post = format_job_post(&j, URL);
        assert!(post.contains("🛠️ Skills Required:\nGo, Rust\n\n"));
    }

    #[test]
    fn test_skills_string_used_verbatim() {
        let mut j = job();
        j.skills = Some(Skills::Text("Go".into()));
        let post = format_job_post(&j, URL);
        assert!(post.contains("🛠️ Skills Required:\nGo\n\n"));
    }

    #[test]
    fn test_empty_skills_block_suppressed() {
        let mut j = job();
        j.skills = Some(Skills::List(vec![]));
        assert!(!format_job_post(&j, URL).contains("Skills Required"));
    }

    #[test]
    fn test_salary_line_only_when_present() {
        let post = format_job_post(&job(), URL);
        assert!(!post.contains("Salary Range"));

        let mut j = job();
        j.salary_range = Some("$150k - $180k".into());
        let post = format_job_post(&j, URL);
        assert_eq!(post.matches("Salary Range").count(), 1);
        assert!(post.contains("💰 Salary Range: $150k - $180k\n"));
    }

    #[test]
    fn test_missing_summary_fields_default() {
        let post = format_job_post(&JobData::default(), URL);
        assert!(post.contains("📍 Location: Not specified\n"));
        assert!(post.contains("🏢 Department: Not specified\n"));
        assert!(post.contains("💼 Employment Type: Not specified\n"));
        assert!(post.contains("⭐ Experience Level: Not specified\n"));
        assert!(post.contains("📋 Job Description:\nNo description available\n\n"));
    }

    #[test]
    fn test_full_post_layout() {
        let mut j = job();
        j.responsibilities = Some("Own services".into());
        j.qualifications = Some("5+ years".into());
        j.benefits = Some("Equity".into());
        let post = format_job_post(&j, URL);
        let expected = "🚀 We're Hiring: Senior Backend Engineer\n\n\
            📍 Location: Remote\n\
            🏢 Department: Platform Engineering\n\
            💼 Employment Type: Full-time\n\
            ⭐ Experience Level: Senior\n\
            \n📋 Job Description:\nBuild the billing pipeline.\n\n\
            🎯 Key Responsibilities:\nOwn services\n\n\
            ✅ Qualifications:\n5+ years\n\n\
            🎁 Benefits:\nEquity\n\n\
            📧 Ready to join our team? Apply now: https://careers.example.com/apply/42\n\n\
            #Hiring #Jobs #PlatformEngineering #SeniorBackendEngineer";
        assert_eq!(post, expected);
    }

    #[test]
    fn test_hashtag_strips_whitespace() {
        assert_eq!(hashtag(Some(" Data  Science\t")), "DataScience");
        assert_eq!(hashtag(None), "");
    }
}
