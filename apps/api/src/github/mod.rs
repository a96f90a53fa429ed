//! GitHub repository listings turned into portfolio projects.

pub mod sync;
pub mod thumbnails;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::backend_client::send_json;
use crate::errors::SourceError;

pub const GITHUB_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("portfolio-api/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepoOwner {
    pub login: String,
}

/// The subset of GitHub's repository object the portfolio uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub owner: Option<RepoOwner>,
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    timeout: Duration,
}

impl GitHubClient {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self::with_api_url(client, GITHUB_API_URL, timeout)
    }

    pub fn with_api_url(client: Client, api_url: &str, timeout: Duration) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Up to 100 public repositories of `username`, most recently updated first.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, SourceError> {
        let request = self
            .client
            .get(format!("{}/users/{}/repos", self.api_url, username))
            .query(&[("per_page", "100"), ("sort", "updated")])
            .header("accept", "application/vnd.github+json")
            .header("user-agent", USER_AGENT)
            .timeout(self.timeout);
        send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_repos_requests_recent_hundred() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("per_page", "100"))
            .and(query_param("sort", "updated"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 1,
                    "name": "hello-world",
                    "description": null,
                    "fork": false,
                    "html_url": "https://github.com/octocat/hello-world",
                    "stargazers_count": 5,
                    "owner": { "login": "octocat" }
                }
            ])))
            .mount(&server)
            .await;

        let github =
            GitHubClient::with_api_url(Client::new(), &server.uri(), Duration::from_secs(2));
        let repos = github.list_repos("octocat").await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].stargazers_count, 5);
        assert!(repos[0].topics.is_empty());
    }

    #[tokio::test]
    async fn test_rate_limit_is_a_source_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(403).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let github =
            GitHubClient::with_api_url(Client::new(), &server.uri(), Duration::from_secs(2));
        let err = github.list_repos("octocat").await.unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 403, .. }));
    }
}
