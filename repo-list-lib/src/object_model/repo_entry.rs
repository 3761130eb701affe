use super::repo::Repo;
use serde::Serialize;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RepoEntry {
    #[serde(rename = "full_name")]
    pub full_name: String,

    #[serde(rename = "branch")]
    pub branch: String,
}

impl From<&Repo> for RepoEntry {
    fn from(repo: &Repo) -> Self {
        Self {
            full_name: repo.full_name.clone(),
            branch: repo.default_branch.clone(),
        }
    }
}

/// Projects repositories to entries one-to-one, preserving order.
pub fn project(repos: &[Repo]) -> Vec<RepoEntry> {
    repos.iter().map(RepoEntry::from).collect()
}
