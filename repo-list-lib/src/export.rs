use crate::github_client::GitHubClient;
use crate::object_model::project;
use crate::result::RepoListResult;
use crate::writer::write_repo_list;
use std::path::Path;

/// Lists the repositories of `org`, projects them and writes the result to
/// `path`. Returns the number of entries written.
pub async fn export_org_repos<P>(client: &GitHubClient, org: &str, path: P) -> RepoListResult<usize>
where
    P: AsRef<Path>,
{
    let repos = client.list_org_repos(org).await?;
    let entries = project(&repos);
    write_repo_list(path, &entries)?;
    Ok(entries.len())
}
