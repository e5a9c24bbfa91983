// src/source/memory.rs
// =============================================================================
// An in-memory RemoteSource for tests.
//
// Directories keep their children in insertion order, which stands in for
// "whatever order the provider returns". Every list/fetch call is recorded so
// tests can assert which remote calls a walk made (or did not make).
// =============================================================================

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Entry, EntryKind, RemoteSource};
use crate::error::{RepoError, Result};
use crate::github::RepoReference;

const SCHEME: &str = "memory://";

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

#[derive(Debug, Clone)]
pub enum MemoryNode {
    Dir(Vec<(String, MemoryNode)>),
    File(String),
}

impl MemoryNode {
    pub fn dir<N: Into<String>>(children: Vec<(N, MemoryNode)>) -> Self {
        MemoryNode::Dir(
            children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }

    pub fn file(contents: impl Into<String>) -> Self {
        MemoryNode::File(contents.into())
    }
}

#[derive(Debug)]
pub struct MemorySource {
    root: MemoryNode,
    failing_lists: HashSet<String>,
    listed: Mutex<Vec<String>>,
    fetched: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new(root: MemoryNode) -> Self {
        Self {
            root,
            failing_lists: HashSet::new(),
            listed: Mutex::new(Vec::new()),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Makes listing `path` fail with SourceUnavailable
    pub fn fail_listing(mut self, path: &str) -> Self {
        self.failing_lists.insert(path.to_string());
        self
    }

    /// Paths passed to `list`, in call order
    pub fn listed(&self) -> Vec<String> {
        self.listed.lock().unwrap().clone()
    }

    /// Paths whose contents were fetched, in call order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.listed.lock().unwrap().len() + self.fetched.lock().unwrap().len()
    }

    fn resolve(&self, path: &str) -> Option<&MemoryNode> {
        let mut node = &self.root;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            match node {
                MemoryNode::Dir(children) => {
                    node = children
                        .iter()
                        .find(|(name, _)| name == part)
                        .map(|(_, child)| child)?;
                }
                MemoryNode::File(_) => return None,
            }
        }
        Some(node)
    }
}

#[async_trait]
impl RemoteSource for MemorySource {
    async fn list(&self, _repo: &RepoReference, path: &str) -> Result<Vec<Entry>> {
        self.listed.lock().unwrap().push(path.to_string());

        if self.failing_lists.contains(path) {
            return Err(RepoError::SourceUnavailable(format!("listing {} failed", path)));
        }

        match self.resolve(path) {
            Some(MemoryNode::Dir(children)) => Ok(children
                .iter()
                .map(|(name, node)| {
                    let full = join_path(path, name);
                    match node {
                        MemoryNode::Dir(_) => Entry {
                            path: full,
                            kind: EntryKind::Directory,
                            name: name.clone(),
                            download_location: None,
                        },
                        MemoryNode::File(_) => Entry {
                            download_location: Some(format!("{}{}", SCHEME, full)),
                            path: full,
                            kind: EntryKind::File,
                            name: name.clone(),
                        },
                    }
                })
                .collect()),
            _ => Err(RepoError::NotFound(path.to_string())),
        }
    }

    async fn fetch(&self, download_location: &str) -> Result<String> {
        let path = download_location.trim_start_matches(SCHEME);
        self.fetched.lock().unwrap().push(path.to_string());

        match self.resolve(path) {
            Some(MemoryNode::File(contents)) => Ok(contents.clone()),
            _ => Err(RepoError::NotFound(download_location.to_string())),
        }
    }
}

/// Root `[a.txt, sub/]` with `sub = [b.txt]`
pub fn sample_repo() -> MemorySource {
    MemorySource::new(MemoryNode::dir(vec![
        ("a.txt", MemoryNode::file("<A>")),
        ("sub", MemoryNode::dir(vec![("b.txt", MemoryNode::file("<B>"))])),
    ]))
}

/// A deeper tree whose provider order is deliberately not alphabetical
pub fn nested_repo() -> MemorySource {
    MemorySource::new(MemoryNode::dir(vec![
        ("README.md", MemoryNode::file("# demo")),
        (
            "src",
            MemoryNode::dir(vec![
                ("main.rs", MemoryNode::file("fn main() {}")),
                (
                    "util",
                    MemoryNode::dir(vec![
                        ("strings.rs", MemoryNode::file("// strings")),
                        ("empty", MemoryNode::dir(Vec::<(String, MemoryNode)>::new())),
                    ]),
                ),
                ("lib.rs", MemoryNode::file("pub mod util;")),
            ]),
        ),
        ("docs", MemoryNode::dir(vec![("guide.md", MemoryNode::file("guide"))])),
        ("Cargo.toml", MemoryNode::file("[package]")),
    ]))
}

pub fn test_repo() -> RepoReference {
    RepoReference {
        owner: "owner".to_string(),
        repo: "repo".to_string(),
        root_path: String::new(),
        git_ref: None,
    }
}
