use serde::Deserialize;

/// A repository as listed by `GET /orgs/{org}/repos`. Fields other than
/// these are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Repo {
    #[serde(rename = "full_name")]
    pub full_name: String,

    #[serde(rename = "default_branch")]
    pub default_branch: String,
}
