// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Submodules:
// - link: Parses repository links into a RepoReference (owner/repo/ref/path)
// - fetch: GithubSource, the RemoteSource backed by the GitHub contents API
// - types: serde models of the contents API responses
// =============================================================================

mod fetch;
mod link;
mod types;

pub use fetch::GithubSource;
pub use link::{parse_repo_link, RepoReference};
