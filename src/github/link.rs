// src/github/link.rs
// =============================================================================
// This module turns a user-supplied GitHub link into a RepoReference.
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo
//   - https://github.com/owner/repo/tree/<ref>
//   - https://github.com/owner/repo/tree/<ref>/some/sub/path
//
// The "github.com/" marker may appear anywhere in the input, so links pasted
// with surrounding text still work. Query strings and fragments are ignored.
// =============================================================================

use std::fmt;

use crate::error::{RepoError, Result};

const GITHUB_HOST: &str = "github.com/";

/// Identifies the repository (and the sub-tree of it) a request is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    pub owner: String,
    pub repo: String,
    /// Path inside the repository to start from; empty means the root
    pub root_path: String,
    /// Branch, tag or commit taken from `/tree/<ref>/`, if the link had one
    pub git_ref: Option<String>,
}

impl fmt::Display for RepoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)?;
        if let Some(git_ref) = &self.git_ref {
            write!(f, "@{}", git_ref)?;
        }
        if !self.root_path.is_empty() {
            write!(f, ":{}", self.root_path)?;
        }
        Ok(())
    }
}

// Parses a GitHub link to extract owner, repository, ref and sub-path
//
// Returns: RepoReference, or RepoError::InvalidReference when owner and repo
// cannot be found
//
// Example:
//   "https://github.com/rust-lang/rust/tree/master/library/core"
//     -> owner "rust-lang", repo "rust", ref "master", root "library/core"
pub fn parse_repo_link(link: &str) -> Result<RepoReference> {
    let invalid = || RepoError::InvalidReference(link.to_string());

    // Everything after '?' or '#' is not part of the path
    let trimmed = link.trim().split(['?', '#']).next().unwrap_or_default();

    let start = trimmed.find(GITHUB_HOST).ok_or_else(invalid)?;
    let path = &trimmed[start + GITHUB_HOST.len()..];

    let mut parts = path.split('/');

    let owner = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let repo = parts
        .next()
        .map(|s| s.trim_end_matches(".git"))
        .filter(|s| !s.is_empty())
        .ok_or_else(invalid)?;

    // Only "/tree/<ref>/..." carries a ref and a sub-path; anything else
    // after owner/repo points at the repository root
    let (git_ref, root_path) = match parts.next() {
        Some("tree") => match parts.next().filter(|s| !s.is_empty()) {
            Some(git_ref) => {
                let sub: Vec<&str> = parts.filter(|s| !s.is_empty()).collect();
                (Some(git_ref.to_string()), sub.join("/"))
            }
            None => (None, String::new()),
        },
        _ => (None, String::new()),
    };

    Ok(RepoReference {
        owner: owner.to_string(),
        repo: repo.to_string(),
        root_path,
        git_ref,
    })
}
