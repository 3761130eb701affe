use reqwest::Url;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoListError {
    #[error("organization name must not be empty")]
    InvalidOrg,

    #[error(transparent)]
    Request(#[from] reqwest_middleware::Error),

    #[error("could not decode repositories from {url}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for RepoListError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(reqwest_middleware::Error::Reqwest(value))
    }
}
