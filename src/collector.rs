use crate::error::Result;
use crate::github::{GitHubApi, PER_PAGE};
use crate::models::{RepoSpec, ResultRow};
use colored::*;

/// Checks whether a repository exists and is accessible with the configured
/// credentials. Any lookup failure counts as invalid, whatever its cause.
pub async fn is_valid_repository(api: &dyn GitHubApi, repo: &RepoSpec) -> bool {
    match api.get_repository(repo).await {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!("validation failed for {}: {}", repo, err);
            false
        }
    }
}

/// Counts open pull requests by walking the paginated listing.
///
/// Pages are fetched in order starting at 1; a page with fewer than
/// [`PER_PAGE`] items marks the end of the listing, so a total that is an
/// exact multiple of the page size costs one extra request that comes back
/// empty. A failed page aborts the whole count: the contract is an exact
/// total or nothing, never a partial sum.
pub async fn count_open_pull_requests(api: &dyn GitHubApi, repo: &RepoSpec) -> Result<u32> {
    let mut total = 0u32;
    let mut page = 1u32;

    loop {
        let pulls = api.list_open_pulls_page(repo, page).await?;
        total += pulls.len() as u32;
        if pulls.len() < PER_PAGE as usize {
            return Ok(total);
        }
        page += 1;
    }
}

/// Turns raw `owner/name` strings into result rows, one per repository that
/// passed validation and yielded both a pull request count and a star count.
///
/// Repositories are processed strictly sequentially in input order, and
/// output order matches input order. Duplicates are processed independently.
/// Failures are local: a skipped repository never aborts the rest of the run.
pub async fn collect(api: &dyn GitHubApi, requested: &[String]) -> Vec<ResultRow> {
    let mut repos = Vec::new();
    for raw in requested {
        let spec: RepoSpec = match raw.parse() {
            Ok(spec) => spec,
            Err(_) => {
                eprintln!(
                    "{}",
                    format!("Invalid repository name format: {}", raw).yellow()
                );
                continue;
            }
        };

        if !is_valid_repository(api, &spec).await {
            eprintln!(
                "{}",
                format!("Invalid owner or repository name: {}", spec).yellow()
            );
            continue;
        }

        repos.push(spec);
    }

    let mut rows = Vec::new();
    for spec in repos {
        let open_pull_requests = count_open_pull_requests(api, &spec).await;
        let stars = api.get_star_count(&spec).await;

        match (stars, open_pull_requests) {
            (Ok(stars), Ok(open_pull_requests)) => {
                rows.push(ResultRow {
                    repository: spec.to_string(),
                    stars,
                    open_pull_requests,
                });
            }
            (stars, pulls) => {
                if let Err(err) = &pulls {
                    tracing::debug!("pull request count failed for {}: {}", spec, err);
                }
                if let Err(err) = &stars {
                    tracing::debug!("star count failed for {}: {}", spec, err);
                }
                eprintln!(
                    "{}",
                    format!("Failed to obtain information for repository '{}'", spec).yellow()
                );
            }
        }
    }

    rows
}
