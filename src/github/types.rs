// src/github/types.rs
// =============================================================================
// Payloads of the GitHub contents API.
//
// `GET /repos/{owner}/{repo}/contents/{path}` returns an array of items for a
// directory and a single item when the path names a file.
// =============================================================================

use serde::Deserialize;

use crate::source::{Entry, EntryKind};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentsResponse {
    Listing(Vec<ContentItem>),
    Single(ContentItem),
}

impl ContentsResponse {
    pub fn into_items(self) -> Vec<ContentItem> {
        match self {
            ContentsResponse::Listing(items) => items,
            ContentsResponse::Single(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContentItem {
    pub name: String,
    pub path: String,
    /// "file", "dir", "symlink" or "submodule"
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ContentItem {
    /// Converts to an Entry; symlinks and submodules have no Entry form
    pub fn into_entry(self) -> Option<Entry> {
        let kind = match self.item_type.as_str() {
            "file" => EntryKind::File,
            "dir" => EntryKind::Directory,
            _ => return None,
        };

        Some(Entry {
            path: self.path,
            kind,
            name: self.name,
            download_location: match kind {
                EntryKind::File => self.download_url,
                EntryKind::Directory => None,
            },
        })
    }
}
