// src/walk/mod.rs
// =============================================================================
// The traversal engine: filtering, walking and rendering.
//
// Submodules:
// - filter: ExclusionRule and the is_excluded decision
// - traverse: the shared depth-first walk both passes run on
// - tree: structural listing and the text tree diagram
// - contents: file downloads rendered as "Path/Content" blocks
// - output: the final tree + contents document
//
// The tree pass and the content pass never share state; each one lists the
// repository on its own using the same rules.
// =============================================================================

mod contents;
mod filter;
mod output;
mod traverse;
mod tree;

pub use contents::{collect_contents, render_contents};
pub use filter::ExclusionRule;
pub use output::format_document;
pub use tree::{walk_structure, walk_tree, StructureEntry};
