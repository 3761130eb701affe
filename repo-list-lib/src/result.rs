use crate::error::RepoListError;

pub type RepoListResult<T> = std::result::Result<T, RepoListError>;
