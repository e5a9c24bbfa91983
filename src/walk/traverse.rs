// src/walk/traverse.rs
// =============================================================================
// The one traversal both passes are built on.
//
// How it works:
// 1. List the starting directory (unless it is already excluded)
// 2. Keep a stack of "entries left to visit" per open directory
// 3. Take the next entry from the innermost directory:
//    - excluded: skip it (a directory is skipped without being listed)
//    - otherwise: hand it to the visitor, and if it is a directory, list it
//      and push its entries so they are visited before its next sibling
// 4. An exhausted directory is popped; the walk ends when the stack is empty
//
// That is a depth-first pre-order walk in provider order, without async
// recursion. The tree diagram and the content collector differ only in their
// visitor, so they always see the same set of paths.
// =============================================================================

use tracing::debug;

use super::filter::{is_excluded, is_inside_excluded_dir, ExclusionRule};
use crate::error::{RepoError, Result};
use crate::github::RepoReference;
use crate::source::{Entry, RemoteSource};

/// Walks everything under `root`, calling `visit(entry, depth)` for every
/// entry that survives `rules`. Entries directly under `root` have depth 0.
///
/// Any listing failure aborts the walk with `TraversalFailed`.
pub async fn traverse<S, F>(
    source: &S,
    repo: &RepoReference,
    root: &str,
    rules: &[ExclusionRule],
    mut visit: F,
) -> Result<()>
where
    S: RemoteSource + ?Sized,
    F: FnMut(&Entry, usize),
{
    if is_inside_excluded_dir(root, rules) {
        debug!("'{}' is excluded, not listing it", root);
        return Ok(());
    }

    let mut stack = vec![list_dir(source, repo, root).await?.into_iter()];

    while let Some(frame) = stack.last_mut() {
        let Some(entry) = frame.next() else {
            stack.pop();
            continue;
        };
        let depth = stack.len() - 1;

        if is_excluded(&entry.path, rules) {
            debug!("Excluded {}", entry.path);
            continue;
        }

        visit(&entry, depth);

        if entry.is_dir() {
            let children = list_dir(source, repo, &entry.path).await?;
            stack.push(children.into_iter());
        }
    }

    Ok(())
}

async fn list_dir<S>(source: &S, repo: &RepoReference, path: &str) -> Result<Vec<Entry>>
where
    S: RemoteSource + ?Sized,
{
    source
        .list(repo, path)
        .await
        .map_err(|e| RepoError::traversal(path, e))
}
