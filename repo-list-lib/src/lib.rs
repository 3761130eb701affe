mod error;
mod export;
mod github_client;
mod link_urls;
mod logging_middleware;
mod object_model;
mod result;
mod writer;

pub use self::error::RepoListError;
pub use self::export::export_org_repos;
pub use self::github_client::GitHubClient;
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{project, Repo, RepoEntry};
pub use self::result::RepoListResult;
pub use self::writer::write_repo_list;
