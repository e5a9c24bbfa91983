// src/source/mod.rs
// =============================================================================
// The seam between the traversal engine and whatever hosts the repository.
//
// The walkers only ever talk to a `RemoteSource`: list one directory, fetch
// one file. The GitHub implementation lives in `crate::github`; tests use the
// in-memory source from `memory.rs`.
// =============================================================================

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::RepoReference;

/// Whether a listed entry is a file or a directory
///
/// Serialized as "file" / "dir", the names used in request and response bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "dir")]
    Directory,
}

/// One item from a single directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full path from the repository root, e.g. "src/main.rs"
    pub path: String,
    pub kind: EntryKind,
    /// Last path component, e.g. "main.rs"
    pub name: String,
    /// Where the raw file can be downloaded from (files only)
    pub download_location: Option<String>,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// A hosted repository that can be listed and read one item at a time
///
/// Implementations must return entries in the provider's order; the walkers
/// never re-sort them.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Lists the direct children of `path` (empty path = repository root)
    ///
    /// Fails with `NotFound` when the path does not exist and with
    /// `SourceUnavailable` on network or protocol errors.
    async fn list(&self, repo: &RepoReference, path: &str) -> Result<Vec<Entry>>;

    /// Downloads the raw text of a file
    async fn fetch(&self, download_location: &str) -> Result<String>;
}
