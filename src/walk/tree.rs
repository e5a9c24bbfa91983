// src/walk/tree.rs
// =============================================================================
// The two tree-shaped outputs of a traversal.
//
// - walk_structure: flat {path, type} listing of everything, no filtering.
//   This is what a selection UI builds its ignore list from.
// - walk_tree: the filtered text diagram that heads the final document:
//
//     ├── a.txt
//     ├── sub/
//     │   ├── b.txt
// =============================================================================

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::filter::ExclusionRule;
use super::traverse::traverse;
use crate::error::Result;
use crate::github::RepoReference;
use crate::source::{EntryKind, RemoteSource};

const BRANCH: &str = "├── ";
const INDENT: &str = "│   ";

/// One row of the structural listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

pub async fn walk_structure<S>(
    source: &S,
    repo: &RepoReference,
    path: &str,
) -> Result<Vec<StructureEntry>>
where
    S: RemoteSource + ?Sized,
{
    let mut listing = Vec::new();

    traverse(source, repo, path, &[], |entry, _depth| {
        listing.push(StructureEntry {
            path: entry.path.clone(),
            kind: entry.kind,
        });
    })
    .await?;

    Ok(listing)
}

/// Renders the filtered diagram of everything under `path`
///
/// Every line starts with `indent_prefix`; each nesting level adds `│   `.
/// An empty directory renders as an empty string.
pub async fn walk_tree<S>(
    source: &S,
    repo: &RepoReference,
    path: &str,
    rules: &[ExclusionRule],
    indent_prefix: &str,
) -> Result<String>
where
    S: RemoteSource + ?Sized,
{
    let mut tree = String::new();

    traverse(source, repo, path, rules, |entry, depth| {
        let suffix = if entry.is_dir() { "/" } else { "" };
        // Writing to a String cannot fail
        let _ = writeln!(
            tree,
            "{}{}{}{}{}",
            indent_prefix,
            INDENT.repeat(depth),
            BRANCH,
            entry.name,
            suffix
        );
    })
    .await?;

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::{nested_repo, sample_repo, test_repo, MemoryNode, MemorySource};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_tree_without_rules() {
        let source = sample_repo();
        let tree = walk_tree(&source, &test_repo(), "", &[], "").await.unwrap();
        assert_eq!(tree, "├── a.txt\n├── sub/\n│   ├── b.txt\n");
    }

    #[tokio::test]
    async fn test_tree_with_excluded_dir() {
        let source = sample_repo();
        let rules = vec![ExclusionRule::dir("sub")];
        let tree = walk_tree(&source, &test_repo(), "", &rules, "").await.unwrap();

        assert_eq!(tree, "├── a.txt\n");
        assert_eq!(source.listed(), vec![""]);
    }

    #[tokio::test]
    async fn test_tree_with_excluded_file() {
        let source = nested_repo();
        let rules = vec![ExclusionRule::file("src/main.rs")];
        let tree = walk_tree(&source, &test_repo(), "", &rules, "").await.unwrap();

        let expected = "\
├── README.md
├── src/
│   ├── util/
│   │   ├── strings.rs
│   │   ├── empty/
│   ├── lib.rs
├── docs/
│   ├── guide.md
├── Cargo.toml
";
        assert_eq!(tree, expected);
    }

    #[tokio::test]
    async fn test_tree_from_sub_path_with_prefix() {
        let source = nested_repo();
        let tree = walk_tree(&source, &test_repo(), "src/util", &[], "> ")
            .await
            .unwrap();
        assert_eq!(tree, "> ├── strings.rs\n> ├── empty/\n");
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let source = MemorySource::new(MemoryNode::dir(Vec::<(String, MemoryNode)>::new()));
        let tree = walk_tree(&source, &test_repo(), "", &[], "").await.unwrap();
        assert_eq!(tree, "");
        let listing = walk_structure(&source, &test_repo(), "").await.unwrap();
        assert!(listing.is_empty());
    }

    #[tokio::test]
    async fn test_structure_is_unfiltered_pre_order() {
        let source = sample_repo();
        let listing = walk_structure(&source, &test_repo(), "").await.unwrap();

        assert_eq!(
            listing,
            vec![
                StructureEntry { path: "a.txt".to_string(), kind: EntryKind::File },
                StructureEntry { path: "sub".to_string(), kind: EntryKind::Directory },
                StructureEntry { path: "sub/b.txt".to_string(), kind: EntryKind::File },
            ]
        );
        // The structural walk never downloads file bodies
        assert!(source.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_same_request_twice_is_identical() {
        let source = nested_repo();
        let rules = vec![ExclusionRule::dir("docs")];
        let first = walk_tree(&source, &test_repo(), "", &rules, "").await.unwrap();
        let second = walk_tree(&source, &test_repo(), "", &rules, "").await.unwrap();
        assert_eq!(first, second);
    }
}
