//! Backend client: the HTTP source for every portfolio section.
//!
//! The backend is optional and may be absent in production. Callers decide
//! what to do with a failure; this module only reports it.
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::SourceError;
use crate::models::contact::{ContactMessage, ContactSubmission};
use crate::models::profile::{EducationEntry, ExperienceEntry, PersonalInfo};
use crate::models::project::{CategoryFilter, Project};

/// `/portfolio/complete` as sent. Skills stay raw so each group can be validated on its own.
#[derive(Debug, Deserialize)]
pub struct CompletePayload {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub skills: Value,
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    api_base: String,
    timeout: Duration,
    skills_timeout: Duration,
}

impl BackendClient {
    /// `base_url` is the backend origin; `/api` is appended.
    pub fn new(client: Client, base_url: &str, timeout: Duration, skills_timeout: Duration) -> Self {
        Self {
            client,
            api_base: format!("{}/api", base_url.trim_end_matches('/')),
            timeout,
            skills_timeout,
        }
    }

    pub async fn personal(&self) -> Result<PersonalInfo, SourceError> {
        self.get_json("/portfolio/personal", self.timeout).await
    }

    pub async fn education(&self) -> Result<Vec<EducationEntry>, SourceError> {
        self.get_json("/portfolio/education", self.timeout).await
    }

    pub async fn experience(&self) -> Result<Vec<ExperienceEntry>, SourceError> {
        self.get_json("/portfolio/experience", self.timeout).await
    }

    /// Raw payload: the caller validates each of the four groups on its own.
    pub async fn skills(&self) -> Result<Value, SourceError> {
        self.get_json("/portfolio/skills", self.skills_timeout).await
    }

    pub async fn projects(
        &self,
        filter: &CategoryFilter,
        featured_only: bool,
    ) -> Result<Vec<Project>, SourceError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(category) = filter.category() {
            query.push(("category", category.as_str()));
        }
        if featured_only {
            query.push(("featured_only", "true"));
        }
        let request = self
            .client
            .get(self.url("/portfolio/projects"))
            .query(&query)
            .header("accept", "application/json")
            .timeout(self.timeout);
        send_json(request).await
    }

    pub async fn featured_projects(&self) -> Result<Vec<Project>, SourceError> {
        self.get_json("/portfolio/projects/featured", self.timeout)
            .await
    }

    pub async fn create_projects_bulk(&self, projects: &[Project]) -> Result<Vec<Project>, SourceError> {
        self.post_json("/portfolio/projects/bulk", projects).await
    }

    pub async fn complete(&self) -> Result<CompletePayload, SourceError> {
        self.get_json("/portfolio/complete", self.timeout).await
    }

    pub async fn submit_contact(&self, submission: &ContactSubmission) -> Result<ContactMessage, SourceError> {
        self.post_json("/contact", submission).await
    }

    pub async fn contact_messages(&self) -> Result<Vec<ContactMessage>, SourceError> {
        self.get_json("/contact/messages", self.timeout).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, timeout: Duration) -> Result<T, SourceError> {
        let request = self
            .client
            .get(self.url(path))
            .header("accept", "application/json")
            .timeout(timeout);
        send_json(request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, SourceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .client
            .post(self.url(path))
            .header("accept", "application/json")
            .json(body)
            .timeout(self.timeout);
        send_json(request).await
    }
}

/// Sends a request and decodes a 2xx JSON body. Anything else is a `SourceError`.
pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, SourceError> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().path().to_string();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    debug!("{} answered {} ({} bytes)", url, status, bytes.len());
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::new(
            Client::new(),
            &server.uri(),
            Duration::from_secs(2),
            Duration::from_millis(200),
        )
    }

    #[tokio::test]
    async fn test_personal_is_read_from_api_prefix() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/portfolio/personal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Ada",
                "bio": "Engineer"
            })))
            .mount(&server)
            .await;

        let info = client_for(&server).personal().await.unwrap();
        assert_eq!(info.name, "Ada");
        assert!(info.title.is_none());
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/portfolio/education"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let err = client_for(&server).education().await.unwrap_err();
        match err {
            SourceError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_project_query_carries_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/portfolio/projects"))
            .and(query_param("category", "NLP"))
            .and(query_param("featured_only", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let filter = CategoryFilter::parse(Some("NLP"));
        let projects = client_for(&server).projects(&filter, true).await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_skills_use_the_short_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/portfolio/skills"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).skills().await.unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {err}");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = BackendClient::new(
            Client::new(),
            "https://folio.example.com/",
            Duration::from_secs(1),
            Duration::from_secs(1),
        );
        assert_eq!(
            client.url("/contact"),
            "https://folio.example.com/api/contact"
        );
    }
}
