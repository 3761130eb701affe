mod repo;
mod repo_entry;

pub use self::repo::Repo;
pub use self::repo_entry::{project, RepoEntry};
