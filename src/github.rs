use crate::error::{CollectorError, Result};
use crate::models::RepoSpec;
use crate::types::{GitHubRepo, PullRequest};
use async_trait::async_trait;
use reqwest::{Client, Response};

const API_BASE_URL: &str = "https://api.github.com";
pub const PER_PAGE: u32 = 100;

/// The slice of the GitHub REST API this tool consumes. `GitHubClient` is
/// the production implementation; tests substitute a scripted fake.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Authenticated metadata lookup for a repository.
    async fn get_repository(&self, repo: &RepoSpec) -> Result<GitHubRepo>;

    /// Star count via an unauthenticated metadata lookup.
    async fn get_star_count(&self, repo: &RepoSpec) -> Result<u32>;

    /// One page of the open pull request listing (`state=open`, fixed page size).
    async fn list_open_pulls_page(&self, repo: &RepoSpec, page: u32) -> Result<Vec<PullRequest>>;
}

pub struct GitHubClient {
    client: Client,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("github-data-collector/0.1.0")
            .build()?;

        Ok(GitHubClient { client, token })
    }

    async fn make_request(&self, url: &str, authenticated: bool) -> Result<Response> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("Cache-Control", "no-cache");

        if authenticated {
            if let Some(token) = &self.token {
                request = request.header("Authorization", format!("token {}", token));
            }
        }

        tracing::debug!("GET {}", url);
        let response = request.send().await?;

        match response.status() {
            reqwest::StatusCode::OK => Ok(response),
            reqwest::StatusCode::NOT_FOUND => {
                Err(CollectorError::NotFound(format!("Resource not found: {}", url)))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(CollectorError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_repository(&self, repo: &RepoSpec) -> Result<GitHubRepo> {
        let url = format!("{}/repos/{}/{}", API_BASE_URL, repo.owner, repo.name);
        let response = self.make_request(&url, true).await?;
        let repo_data: GitHubRepo = response.json().await?;
        Ok(repo_data)
    }

    async fn get_star_count(&self, repo: &RepoSpec) -> Result<u32> {
        // The star lookup works without elevated access, so no token is sent.
        let url = format!("{}/repos/{}/{}", API_BASE_URL, repo.owner, repo.name);
        let response = self.make_request(&url, false).await?;
        let repo_data: GitHubRepo = response.json().await?;
        Ok(repo_data.stargazers_count)
    }

    async fn list_open_pulls_page(&self, repo: &RepoSpec, page: u32) -> Result<Vec<PullRequest>> {
        let url = format!(
            "{}/repos/{}/{}/pulls?state=open&per_page={}&page={}",
            API_BASE_URL, repo.owner, repo.name, PER_PAGE, page
        );
        let response = self.make_request(&url, true).await?;
        let pulls: Vec<PullRequest> = response.json().await?;
        Ok(pulls)
    }
}
