#![allow(dead_code)]

use async_trait::async_trait;
use github_data_collector::error::{CollectorError, Result};
use github_data_collector::github::{GitHubApi, PER_PAGE};
use github_data_collector::models::RepoSpec;
use github_data_collector::types::{GitHubRepo, PullRequest};
use std::collections::HashMap;
use std::sync::Mutex;

pub struct FakeRepo {
    stars: u32,
    open_pulls: u32,
    fail_pulls_on_page: Option<u32>,
    fail_stars: bool,
}

/// Scripted stand-in for the GitHub API. Serves pull request listings in
/// pages of [`PER_PAGE`] items and records every request it receives.
#[derive(Default)]
pub struct FakeGitHub {
    repos: HashMap<String, FakeRepo>,
    metadata_requests: Mutex<u32>,
    pull_page_requests: Mutex<HashMap<String, u32>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, full_name: &str, stars: u32, open_pulls: u32) -> Self {
        self.repos.insert(
            full_name.to_string(),
            FakeRepo {
                stars,
                open_pulls,
                fail_pulls_on_page: None,
                fail_stars: false,
            },
        );
        self
    }

    /// Like `with_repo`, but the given pull listing page returns an error.
    pub fn with_failing_pull_page(
        mut self,
        full_name: &str,
        stars: u32,
        open_pulls: u32,
        page: u32,
    ) -> Self {
        self.repos.insert(
            full_name.to_string(),
            FakeRepo {
                stars,
                open_pulls,
                fail_pulls_on_page: Some(page),
                fail_stars: false,
            },
        );
        self
    }

    /// Like `with_repo`, but the star lookup returns an error.
    pub fn with_failing_stars(mut self, full_name: &str, open_pulls: u32) -> Self {
        self.repos.insert(
            full_name.to_string(),
            FakeRepo {
                stars: 0,
                open_pulls,
                fail_pulls_on_page: None,
                fail_stars: true,
            },
        );
        self
    }

    /// Total number of metadata lookups received (validation and stars).
    pub fn metadata_requests(&self) -> u32 {
        *self.metadata_requests.lock().unwrap()
    }

    /// Number of pull listing pages requested for one repository.
    pub fn pull_page_requests(&self, full_name: &str) -> u32 {
        self.pull_page_requests
            .lock()
            .unwrap()
            .get(full_name)
            .copied()
            .unwrap_or(0)
    }

    fn lookup(&self, repo: &RepoSpec) -> Result<&FakeRepo> {
        self.repos
            .get(&repo.to_string())
            .ok_or_else(|| CollectorError::NotFound(format!("Resource not found: {}", repo)))
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn get_repository(&self, repo: &RepoSpec) -> Result<GitHubRepo> {
        *self.metadata_requests.lock().unwrap() += 1;
        let fake = self.lookup(repo)?;
        Ok(GitHubRepo {
            name: repo.name.clone(),
            full_name: repo.to_string(),
            html_url: format!("https://github.com/{}", repo),
            stargazers_count: fake.stars,
        })
    }

    async fn get_star_count(&self, repo: &RepoSpec) -> Result<u32> {
        *self.metadata_requests.lock().unwrap() += 1;
        let fake = self.lookup(repo)?;
        if fake.fail_stars {
            return Err(CollectorError::ApiError(format!(
                "API request failed with status 500 for {}",
                repo
            )));
        }
        Ok(fake.stars)
    }

    async fn list_open_pulls_page(&self, repo: &RepoSpec, page: u32) -> Result<Vec<PullRequest>> {
        *self
            .pull_page_requests
            .lock()
            .unwrap()
            .entry(repo.to_string())
            .or_insert(0) += 1;

        let fake = self.lookup(repo)?;
        if fake.fail_pulls_on_page == Some(page) {
            return Err(CollectorError::ApiError(format!(
                "API request failed with status 502 on page {}",
                page
            )));
        }

        let start = (page - 1) * PER_PAGE;
        let served = fake.open_pulls.saturating_sub(start).min(PER_PAGE);
        Ok((start..start + served)
            .map(|i| PullRequest {
                number: u64::from(i) + 1,
            })
            .collect())
    }
}
