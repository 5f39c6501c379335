use anyhow::{Context, Result};

const DEFAULT_LINKEDIN_UGC_POSTS_URL: &str = "https://api.linkedin.com/v2/ugcPosts";
const DEFAULT_LINKEDIN_AUTHOR_URN: &str = "urn:li:person:DWYai5SUO4";
const DEFAULT_APPLICATION_URL: &str = "http://localhost:5173/job-application";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Single allowed origin. `None` allows any origin.
    pub cors_allowed_origin: Option<String>,
    pub linkedin_ugc_posts_url: String,
    pub linkedin_author_urn: String,
    pub default_application_url: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            linkedin_ugc_posts_url: env_or("LINKEDIN_UGC_POSTS_URL", DEFAULT_LINKEDIN_UGC_POSTS_URL),
            linkedin_author_urn: env_or("LINKEDIN_AUTHOR_URN", DEFAULT_LINKEDIN_AUTHOR_URN),
            default_application_url: env_or("DEFAULT_APPLICATION_URL", DEFAULT_APPLICATION_URL),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5000,
            rust_log: "info".to_string(),
            cors_allowed_origin: None,
            linkedin_ugc_posts_url: DEFAULT_LINKEDIN_UGC_POSTS_URL.to_string(),
            linkedin_author_urn: DEFAULT_LINKEDIN_AUTHOR_URN.to_string(),
            default_application_url: DEFAULT_APPLICATION_URL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.linkedin_ugc_posts_url, "https://api.linkedin.com/v2/ugcPosts");
        assert_eq!(config.default_application_url, "http://localhost:5173/job-application");
        assert!(config.cors_allowed_origin.is_none());
    }

    #[test]
    fn test_env_or_falls_back() {
        assert_eq!(env_or("RECRUIT_RELAY_TEST_UNSET_VAR", "fallback"), "fallback");
    }
}
