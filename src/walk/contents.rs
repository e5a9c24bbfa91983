// src/walk/contents.rs
// =============================================================================
// Collects the text of every non-excluded file.
//
// The walk itself is the shared `traverse`, so the files collected here are
// exactly the files that appear in the tree diagram. Downloads then run as an
// ordered buffered stream: up to `max_in_flight` at once, results kept in
// traversal order, first failure aborts the whole collection.
// =============================================================================

use std::fmt;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

use super::filter::ExclusionRule;
use super::traverse::traverse;
use crate::error::{RepoError, Result};
use crate::github::RepoReference;
use crate::source::{Entry, RemoteSource};

/// One file of the final document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub path: String,
    pub content: String,
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path: {}\nContent:\n{}\n---\n", self.path, self.content)
    }
}

pub async fn collect_contents<S>(
    source: &S,
    repo: &RepoReference,
    path: &str,
    rules: &[ExclusionRule],
    max_in_flight: usize,
) -> Result<Vec<FileContent>>
where
    S: RemoteSource + ?Sized,
{
    let mut files = Vec::new();
    traverse(source, repo, path, rules, |entry, _depth| {
        if !entry.is_dir() {
            files.push(entry.clone());
        }
    })
    .await?;

    debug!("Fetching {} file(s) from {}", files.len(), repo);

    stream::iter(files)
        .map(|entry| fetch_file(source, entry))
        .buffered(max_in_flight.max(1))
        .try_collect()
        .await
}

/// Concatenates the per-file blocks in order
pub fn render_contents(files: &[FileContent]) -> String {
    files.iter().map(FileContent::to_string).collect()
}

async fn fetch_file<S>(source: &S, entry: Entry) -> Result<FileContent>
where
    S: RemoteSource + ?Sized,
{
    let location = entry.download_location.as_deref().ok_or_else(|| {
        RepoError::traversal(
            &entry.path,
            RepoError::SourceUnavailable(format!("no download location for {}", entry.path)),
        )
    })?;

    let content = source
        .fetch(location)
        .await
        .map_err(|e| RepoError::traversal(&entry.path, e))?;

    Ok(FileContent {
        path: entry.path,
        content,
    })
}
