use crate::error::RepoListError;
use crate::result::RepoListResult;
use anyhow::anyhow;
use reqwest::header::HeaderValue;
use reqwest::Url;
use std::collections::HashMap;

/// Relations parsed from a `Link` response header.
#[derive(Debug, Default)]
pub(crate) struct LinkUrls {
    links: HashMap<String, String>,
}

impl LinkUrls {
    pub(crate) fn from_header(link_header: Option<&HeaderValue>) -> RepoListResult<Self> {
        let Some(link_header) = link_header else {
            return Ok(Self::default())
        };

        Ok(Self::parse(
            link_header
                .to_str()
                .map_err(|e| RepoListError::Other(anyhow!(e)))?,
        ))
    }

    pub(crate) fn parse(s: &str) -> Self {
        fn parse_url_part(s: &str) -> Option<String> {
            s.strip_prefix('<')
                .and_then(|s0| s0.strip_suffix('>'))
                .map(|s1| s1.to_string())
        }

        fn parse_rel_part(s: &str) -> Option<String> {
            s.strip_prefix("rel=\"")
                .and_then(|s0| s0.strip_suffix('"'))
                .map(|s1| s1.to_string())
        }

        let links = s
            .split(',')
            .filter_map(|part| {
                let mut params = part.split(';');
                let url = parse_url_part(params.next()?.trim())?;
                let rel = params.find_map(|p| parse_rel_part(p.trim()))?;
                Some((rel, url))
            })
            .collect::<HashMap<_, _>>();

        Self { links }
    }

    pub(crate) fn next_url(&self) -> RepoListResult<Option<Url>> {
        self.get_link_url("next")
    }

    fn get_link_url(&self, k: &str) -> RepoListResult<Option<Url>> {
        let Some(s) = self.links.get(k) else {
            return Ok(None)
        };

        Ok(Some(
            s.parse::<Url>()
                .map_err(|e| RepoListError::Other(anyhow!(e)))?,
        ))
    }
}
