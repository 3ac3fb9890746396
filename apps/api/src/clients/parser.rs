use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::AppError;

/// Parsed résumé data as the core consumes it: both lists always present,
/// possibly empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedResume {
    pub skills: Vec<String>,
    pub projects: Vec<String>,
}

/// Wire shape of the parser response. Either field may be absent;
/// `into_parsed` is the one place that normalizes absence to empty lists.
#[derive(Debug, Deserialize)]
struct ParseResponseBody {
    skills: Option<Vec<String>>,
    projects: Option<Vec<String>>,
}

impl ParseResponseBody {
    fn into_parsed(self) -> ParsedResume {
        ParsedResume {
            skills: self.skills.unwrap_or_default(),
            projects: self.projects.unwrap_or_default(),
        }
    }
}

/// Seam for the résumé parser boundary. Carried in `AppState` as
/// `Arc<dyn ResumeParser>` so handlers can be exercised without a live
/// upstream.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    async fn parse(&self, filename: String, data: Bytes) -> Result<ParsedResume, AppError>;
}

/// HTTP implementation against `{base_url}/upload`.
pub struct HttpResumeParser {
    client: Client,
    base_url: String,
}

impl HttpResumeParser {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl ResumeParser for HttpResumeParser {
    async fn parse(&self, filename: String, data: Bytes) -> Result<ParsedResume, AppError> {
        let part = Part::bytes(data.to_vec()).file_name(filename);
        let form = Form::new().part("resume", part);

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Parser service returned {status}");
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body: ParseResponseBody = response.json().await?;
        let parsed = body.into_parsed();
        debug!(
            "Resume parsed: {} skills, {} projects",
            parsed.skills.len(),
            parsed.projects.len()
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_default_to_empty_lists() {
        let body: ParseResponseBody = serde_json::from_str("{}").unwrap();
        let parsed = body.into_parsed();
        assert!(parsed.skills.is_empty());
        assert!(parsed.projects.is_empty());
    }

    #[test]
    fn test_skills_only_response() {
        let body: ParseResponseBody =
            serde_json::from_str(r#"{"skills": ["Python", "SQL"]}"#).unwrap();
        let parsed = body.into_parsed();
        assert_eq!(parsed.skills, vec!["Python", "SQL"]);
        assert!(parsed.projects.is_empty());
    }

    #[test]
    fn test_full_response_passes_through_untouched() {
        let body: ParseResponseBody = serde_json::from_str(
            r#"{"skills": ["HTML"], "projects": ["Portfolio site"]}"#,
        )
        .unwrap();
        let parsed = body.into_parsed();
        // Raw strings are preserved as-is; normalization happens later.
        assert_eq!(parsed.skills, vec!["HTML"]);
        assert_eq!(parsed.projects, vec!["Portfolio site"]);
    }

    #[test]
    fn test_explicit_null_fields_default_to_empty() {
        let body: ParseResponseBody =
            serde_json::from_str(r#"{"skills": null, "projects": null}"#).unwrap();
        assert_eq!(body.into_parsed(), ParsedResume::default());
    }
}
