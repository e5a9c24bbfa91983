// src/walk/filter.rs
// =============================================================================
// Decides which paths a traversal must skip.
//
// A rule names a path and says whether that path is a file or a directory:
// - File rule "a/b.txt": skips exactly that path
// - Dir rule "a": skips "a" itself and everything beneath it ("a/...")
//
// Matching is component-aware: a dir rule for "src" does not touch "src2".
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::source::EntryKind;

/// One entry of an ignore list, as sent in `ignoreList`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusionRule {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl ExclusionRule {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    /// True when `candidate` lies strictly beneath this rule's directory
    pub fn covers_descendant(&self, candidate: &str) -> bool {
        self.kind == EntryKind::Directory
            && candidate
                .strip_prefix(self.path.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// True when `candidate` is the path this rule names
    pub fn names(&self, candidate: &str) -> bool {
        candidate == self.path
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.names(candidate) || self.covers_descendant(candidate)
    }
}

/// Whether `candidate` has to be skipped under `rules`
///
/// Any matching rule is enough; rule order does not matter.
pub fn is_excluded(candidate: &str, rules: &[ExclusionRule]) -> bool {
    rules.iter().any(|rule| rule.matches(candidate))
}

/// Whether a directory about to be listed already sits inside an excluded
/// directory (or is one)
pub fn is_inside_excluded_dir(dir: &str, rules: &[ExclusionRule]) -> bool {
    rules
        .iter()
        .filter(|rule| rule.kind == EntryKind::Directory)
        .any(|rule| rule.matches(dir))
}
