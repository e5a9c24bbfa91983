// src/api.rs
// =============================================================================
// The two request operations and their JSON bodies.
//
// - Query structure:   {"repoLink"}                -> {"tree": [{path, type}]}
// - Process repository: {"repoLink", "ignoreList"?} -> {"output": "..."}
// - Any failure:                                      {"error": "..."}
//
// Both operations parse the link first, so a malformed link never reaches the
// remote source.
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{RepoError, Result};
use crate::github::parse_repo_link;
use crate::source::RemoteSource;
use crate::walk::{
    collect_contents, format_document, render_contents, walk_structure, walk_tree,
    ExclusionRule, StructureEntry,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub repo_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub tree: Vec<StructureEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub repo_link: String,
    #[serde(default)]
    pub ignore_list: Vec<ExclusionRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&RepoError> for ErrorResponse {
    fn from(error: &RepoError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Lists the whole repository (or sub-tree) with no filtering
pub async fn query_structure<S>(source: &S, request: &QueryRequest) -> Result<QueryResponse>
where
    S: RemoteSource + ?Sized,
{
    let repo = parse_repo_link(&request.repo_link)?;
    info!("Querying structure of {}", repo);

    let tree = walk_structure(source, &repo, &repo.root_path).await?;
    info!("Found {} entries", tree.len());

    Ok(QueryResponse { tree })
}

/// Builds the tree-plus-contents document
///
/// The diagram pass and the content pass run concurrently; if either fails
/// the whole request fails and no document is produced.
pub async fn process_repository<S>(
    source: &S,
    request: &ProcessRequest,
    max_in_flight: usize,
) -> Result<ProcessResponse>
where
    S: RemoteSource + ?Sized,
{
    let repo = parse_repo_link(&request.repo_link)?;
    let rules = &request.ignore_list;
    info!("Processing {} with {} ignore rule(s)", repo, rules.len());

    let (tree, files) = tokio::try_join!(
        walk_tree(source, &repo, &repo.root_path, rules, ""),
        collect_contents(source, &repo, &repo.root_path, rules, max_in_flight),
    )?;
    info!("Collected {} file(s)", files.len());

    let output = format_document(&tree, &render_contents(&files));
    Ok(ProcessResponse { output })
}
