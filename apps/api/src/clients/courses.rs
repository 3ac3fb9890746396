use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::AppError;

/// A single course recommendation from the upstream service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub skill: String,
    pub title: String,
    pub platform: String,
    pub link: String,
}

/// Request body: the missing skills, already lower-cased by the caller.
#[derive(Debug, Serialize)]
struct RecommendationRequest<'a> {
    missing_skills: &'a [String],
}

/// Wire shape of the response; `courses` may be absent and defaults to
/// empty in one place.
#[derive(Debug, Deserialize)]
struct RecommendationResponseBody {
    courses: Option<Vec<Course>>,
}

impl RecommendationResponseBody {
    fn into_courses(self) -> Vec<Course> {
        self.courses.unwrap_or_default()
    }
}

/// Seam for the course recommendation boundary.
#[async_trait]
pub trait CourseProvider: Send + Sync {
    async fn recommend(&self, missing_skills: &[String]) -> Result<Vec<Course>, AppError>;
}

/// HTTP implementation against `{base_url}/course-recommendations`.
pub struct HttpCourseProvider {
    client: Client,
    base_url: String,
}

impl HttpCourseProvider {
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
impl CourseProvider for HttpCourseProvider {
    async fn recommend(&self, missing_skills: &[String]) -> Result<Vec<Course>, AppError> {
        let response = self
            .client
            .post(format!("{}/course-recommendations", self.base_url))
            .json(&RecommendationRequest { missing_skills })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Course service returned {status}");
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body: RecommendationResponseBody = response.json().await?;
        let courses = body.into_courses();
        debug!(
            "Course lookup: {} skills in, {} courses out",
            missing_skills.len(),
            courses.len()
        );
        Ok(courses)
    }
}
