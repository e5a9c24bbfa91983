// src/github/fetch.rs
// =============================================================================
// This module lists and downloads repository contents through the GitHub API.
//
// Strategy:
// - Directory listings come from the contents API:
//     GET {api_base_url}/repos/{owner}/{repo}/contents/{path}?ref={ref}
// - File bodies come from the `download_url` GitHub puts on each file item
//   (raw.githubusercontent.com), fetched as plain text
// - One reqwest Client is shared by every request (connection pooling)
// - A semaphore caps how many requests are in flight at once, no matter how
//   many traversal passes are running
//
// Rust concepts:
// - Traits: GithubSource implements the RemoteSource seam
// - async/await: Every remote call is a network round-trip
// - Semaphore permits: Dropped (released) when they go out of scope
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::Semaphore;
use tracing::debug;
use url::Url;

use super::link::RepoReference;
use super::types::{ContentItem, ContentsResponse};
use crate::config::Config;
use crate::error::{RepoError, Result};
use crate::source::{Entry, RemoteSource};

pub struct GithubSource {
    client: Client,
    api_base: Url,
    permits: Semaphore,
}

impl GithubSource {
    // Creates a source from configuration
    //
    // Fails with RepoError::Config if the base URL does not parse or the
    // HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let api_base = Url::parse(&config.api_base_url)
            .map_err(|e| RepoError::Config(format!("api_base_url: {}", e)))?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RepoError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base,
            permits: Semaphore::new(config.max_concurrent_requests),
        })
    }

    // Builds the contents API URL for one directory
    //
    // Path segments are pushed one at a time so names with spaces or '#'
    // are escaped instead of changing the meaning of the URL
    fn contents_url(&self, repo: &RepoReference, path: &str) -> Result<Url> {
        let mut url = self.api_base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                RepoError::Config(format!("api_base_url cannot be a base: {}", self.api_base))
            })?;
            segments
                .pop_if_empty()
                .extend(["repos", repo.owner.as_str(), repo.repo.as_str(), "contents"])
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }

        if let Some(git_ref) = &repo.git_ref {
            url.query_pairs_mut().append_pair("ref", git_ref);
        }

        Ok(url)
    }

    // Sends a GET and maps non-success statuses to RepoError
    //
    // 404 means the path (or repository) does not exist; every other
    // failure status is treated as the source being unavailable
    async fn get(&self, url: &str, accept: &str) -> Result<reqwest::Response> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| RepoError::SourceUnavailable(e.to_string()))?;

        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(RepoError::NotFound(url.to_string())),
            status => Err(RepoError::SourceUnavailable(format!(
                "Failed to fetch {}: HTTP {}",
                url, status
            ))),
        }
    }
}

#[async_trait]
impl RemoteSource for GithubSource {
    async fn list(&self, repo: &RepoReference, path: &str) -> Result<Vec<Entry>> {
        let url = self.contents_url(repo, path)?;
        let response = self.get(url.as_str(), "application/vnd.github+json").await?;

        let body: ContentsResponse = response.json().await?;
        let entries: Vec<Entry> = body
            .into_items()
            .into_iter()
            .filter_map(|item: ContentItem| {
                let name = item.name.clone();
                let entry = item.into_entry();
                if entry.is_none() {
                    debug!("Skipping {} (neither file nor directory)", name);
                }
                entry
            })
            .collect();

        debug!("Listed {} entries under '{}'", entries.len(), path);
        Ok(entries)
    }

    async fn fetch(&self, download_location: &str) -> Result<String> {
        let response = self.get(download_location, "*/*").await?;
        let content = response.text().await?;
        Ok(content)
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why `let _permit = ...`?
//    - The permit is returned to the semaphore when it is dropped
//    - Binding it to `_permit` (not `_`) keeps it alive until the function
//      returns, i.e. until the response headers are in
//    - `let _ = ...` would drop it immediately
//
// 2. What is `path_segments_mut()`?
//    - Gives a mutable view of the URL path as a list of segments
//    - It fails for URLs like "mailto:x" that cannot have a path
//    - Each pushed segment is percent-encoded for us
//
// 3. Why `filter_map`?
//    - It maps and drops `None` in one pass
//    - Here it turns API items into Entries and drops symlinks/submodules
// -----------------------------------------------------------------------------
