// src/walk/output.rs
// =============================================================================
// Joins the tree diagram and the file blocks into the final document.
// =============================================================================

const SEPARATOR: &str = "\n---\n";

pub fn format_document(tree: &str, contents: &str) -> String {
    let mut document = String::with_capacity(tree.len() + SEPARATOR.len() + contents.len());
    document.push_str(tree);
    document.push_str(SEPARATOR);
    document.push_str(contents);
    document
}
