use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub stargazers_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u64,
}
