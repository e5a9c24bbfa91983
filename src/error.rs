// src/error.rs
// =============================================================================
// The error type shared by the link parser, the remote source and the walkers.
//
// Every failure is terminal for the request that hit it: nothing is retried
// and no partial document is produced.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    /// The repository link could not be turned into owner/repo
    #[error("invalid repository link: {0}")]
    InvalidReference(String),

    /// The remote reported that a path does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Network or protocol failure talking to the remote
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// Wraps whatever went wrong while visiting `path`
    #[error("traversal failed at '{path}': {source}")]
    TraversalFailed {
        path: String,
        #[source]
        source: Box<RepoError>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RepoError {
    /// Wraps an error raised while visiting `path`.
    ///
    /// Errors that are already `TraversalFailed` are passed through so the
    /// message names the innermost path only once.
    pub fn traversal(path: &str, error: RepoError) -> RepoError {
        match error {
            RepoError::TraversalFailed { .. } => error,
            other => RepoError::TraversalFailed {
                path: display_path(path).to_string(),
                source: Box::new(other),
            },
        }
    }
}

impl From<reqwest::Error> for RepoError {
    fn from(error: reqwest::Error) -> Self {
        RepoError::SourceUnavailable(error.to_string())
    }
}

// The repository root is the empty path; show it as "/" in messages
fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

pub type Result<T> = std::result::Result<T, RepoError>;
