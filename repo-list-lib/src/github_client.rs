use crate::error::RepoListError;
use crate::link_urls::LinkUrls;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::Repo;
use crate::result::RepoListResult;
use anyhow::anyhow;
use log::{info, warn, Level};
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use serde_json::Value;

const PER_PAGE: usize = 100;

pub struct GitHubClient {
    client: ClientWithMiddleware,
    url: Url,
    token: String,
}

impl GitHubClient {
    pub fn new<U>(url: U, token: &str) -> RepoListResult<Self>
    where
        U: IntoUrl,
    {
        Ok(Self {
            client: ClientBuilder::new(Client::new())
                .with(LoggingMiddleware::new(Level::Debug))
                .build(),
            url: url.into_url()?,
            token: String::from(token),
        })
    }

    /// Lists every repository of `org` in the order the API returns them.
    ///
    /// An error payload from the API ends the listing early and returns the
    /// repositories collected so far; it is only reported as a warning.
    pub async fn list_org_repos(&self, org: &str) -> RepoListResult<Vec<Repo>> {
        let org = org.trim();
        if org.is_empty() {
            return Err(RepoListError::InvalidOrg);
        }

        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| RepoListError::Other(anyhow!("{} cannot be a base URL", self.url)))?
            .pop_if_empty()
            .extend(["orgs", org, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string());

        self.get_paged::<Repo>(url).await
    }

    async fn get_paged<T>(&self, url: Url) -> RepoListResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut all_items = Vec::new();
        let mut next_url = Some(url);

        while let Some(url) = next_url.take() {
            let Some((items, link_urls)) = self.get_items::<T>(&url).await? else {
                break
            };
            all_items.extend(items);
            next_url = link_urls.next_url()?;
        }

        Ok(all_items)
    }

    async fn get_items<T>(&self, url: &Url) -> RepoListResult<Option<(Vec<T>, LinkUrls)>>
    where
        T: DeserializeOwned,
    {
        info!("Fetching: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, "repo-list")
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(AUTHORIZATION, format!("token {}", self.token))
            .send()
            .await?;

        let status = response.status();
        let link_header = response.headers().get(LINK).cloned();
        let body = response.text().await?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str::<Value>(&body).map_err(|e| RepoListError::Decode {
            url: url.clone(),
            source: e,
        })?;

        let items = match value {
            Value::Array(items) if items.is_empty() => return Ok(None),
            Value::Array(items) => serde_json::from_value::<Vec<T>>(Value::Array(items))
                .map_err(|e| RepoListError::Decode {
                    url: url.clone(),
                    source: e,
                })?,
            Value::Object(o) if o.contains_key("message") => {
                warn!(
                    "stopping at {} ({}): {}",
                    url,
                    status,
                    o.get("message")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                );
                return Ok(None);
            }
            _ => {
                warn!("stopping at {} ({}): response is not a list", url, status);
                return Ok(None);
            }
        };

        let link_urls = LinkUrls::from_header(link_header.as_ref())?;
        Ok(Some((items, link_urls)))
    }
}
