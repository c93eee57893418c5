//! GitHub organization client.
//!
//! # Design
//! `GithubOrgClient` is bound to one organization. The organization metadata
//! and the repository listing are each fetched at most once per client and
//! kept in a `Memoized` slot; `public_repos` can be called any number of
//! times with different license filters without touching the network again.
//!
//! Payloads are kept as `serde_json::Value` and navigated with
//! `access_nested_map`, so a payload missing `repos_url`, `name` or
//! `license.key` surfaces as `ApiError::MissingKey` (or, for the license
//! filter, as "no match") instead of a schema error.

use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{get_json, Transport};
use crate::memo::Memoized;
use crate::nested::access_nested_map;

/// Root of the public GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

#[derive(Debug)]
pub struct GithubOrgClient<T> {
    org_name: String,
    base_url: String,
    transport: T,
    org: Memoized<Value>,
    repos_payload: Memoized<Value>,
}

impl<T: Transport> GithubOrgClient<T> {
    pub fn new(org_name: &str, transport: T) -> Self {
        Self {
            org_name: org_name.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport,
            org: Memoized::new(),
            repos_payload: Memoized::new(),
        }
    }

    /// Point the client at a different API root, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.base_url, self.org_name)
    }

    /// Organization metadata, fetched on first call.
    pub fn org(&self) -> Result<&Value, ApiError> {
        self.org.get_or_try_init(|| {
            debug!(org = %self.org_name, "fetching organization");
            get_json(&self.transport, &self.org_url())
        })
    }

    /// The `repos_url` advertised by the organization metadata.
    pub fn public_repos_url(&self) -> Result<&str, ApiError> {
        let url = access_nested_map(self.org()?, &["repos_url"])?;
        url.as_str().ok_or_else(|| {
            ApiError::DeserializationError(format!("repos_url is not a string: {url}"))
        })
    }

    /// Repository listing, fetched on first call.
    pub fn repos_payload(&self) -> Result<&Value, ApiError> {
        self.repos_payload.get_or_try_init(|| {
            let url = self.public_repos_url()?;
            debug!(org = %self.org_name, url, "fetching repositories");
            get_json(&self.transport, url)
        })
    }

    /// Names of the organization's repositories in listing order, optionally
    /// restricted to those whose `license.key` equals `license`.
    pub fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>, ApiError> {
        let payload = self.repos_payload()?;
        let repos = payload.as_array().ok_or_else(|| {
            ApiError::DeserializationError("repository listing is not an array".to_string())
        })?;

        let mut names = Vec::new();
        for repo in repos {
            if let Some(key) = license {
                if !Self::has_license(repo, key) {
                    continue;
                }
            }
            let name = access_nested_map(repo, &["name"])?;
            match name.as_str() {
                Some(name) => names.push(name.to_string()),
                None => {
                    return Err(ApiError::DeserializationError(format!(
                        "repository name is not a string: {name}"
                    )))
                }
            }
        }
        Ok(names)
    }

    /// Whether `repo.license.key` equals `license_key`. A repository without
    /// license metadata has no license.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        access_nested_map(repo, &["license", "key"])
            .map(|key| key.as_str() == Some(license_key))
            .unwrap_or(false)
    }
}
