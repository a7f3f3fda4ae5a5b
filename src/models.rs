use crate::error::CollectorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A repository requested on the command line, in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoSpec {
    type Err = CollectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(RepoSpec {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(CollectorError::InvalidRepoSpec(s.to_string())),
        }
    }
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One output row, produced only when both lookups for a repository succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRow {
    #[serde(rename = "Repository")]
    pub repository: String,
    #[serde(rename = "Stars")]
    pub stars: u32,
    #[serde(rename = "Open Pull Requests")]
    pub open_pull_requests: u32,
}
