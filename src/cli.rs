// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The two subcommands are the two request operations:
// - tree:    list the repository structure (what an ignore list is built from)
// - process: produce the tree + contents document, minus ignored entries
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "repoflat",
    version,
    about = "Flatten a GitHub repository into one tree-plus-contents text document",
    long_about = "repoflat walks a GitHub repository through the contents API and prints a tree \
                  diagram followed by the contents of every file, so a whole repository can be \
                  fed to a text pipeline as a single document."
)]
pub struct Cli {
    /// Configuration file (defaults to ./repoflat.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every file and directory in a repository, unfiltered
    ///
    /// Example: repoflat tree https://github.com/rust-lang/rust/tree/master/library/core
    Tree {
        /// GitHub repository link, optionally with /tree/<ref>/<path>
        repo_link: String,

        /// Print the {"tree": [...]} JSON response instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Print the tree diagram followed by the contents of every file
    ///
    /// Example: repoflat process https://github.com/user/repo --exclude-dir target
    Process {
        /// GitHub repository link, optionally with /tree/<ref>/<path>
        repo_link: String,

        /// JSON file holding an ignore list: [{"path": "...", "type": "file"|"dir"}]
        #[arg(long, value_name = "FILE")]
        ignore_list: Option<PathBuf>,

        /// Skip a directory and everything beneath it (repeatable)
        #[arg(long, value_name = "PATH")]
        exclude_dir: Vec<String>,

        /// Skip a single file (repeatable)
        #[arg(long, value_name = "PATH")]
        exclude_file: Vec<String>,

        /// Write the document to FILE instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the {"output": "..."} JSON response instead of the raw document
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub fn json(&self) -> bool {
        match self {
            Commands::Tree { json, .. } | Commands::Process { json, .. } => *json,
        }
    }
}
