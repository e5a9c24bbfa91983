// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr) and parse command-line arguments using clap
// 2. Load configuration and build the GitHub source
// 3. Dispatch to the appropriate subcommand handler
// 4. Print the result, or the error, and exit (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: Every directory listing and file download is a network call
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod api;       // src/api.rs - request/response bodies and the two operations
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - layered configuration
mod error;     // src/error.rs - RepoError
mod github;    // src/github/ - link parsing and the GitHub contents API
mod logger;    // src/logger.rs - tracing setup
mod source;    // src/source/ - the RemoteSource trait
mod walk;      // src/walk/ - filtering, traversal and rendering

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use api::{ErrorResponse, ProcessRequest, QueryRequest};
use cli::{Cli, Commands};
use github::GithubSource;
use source::EntryKind;
use walk::ExclusionRule;

#[tokio::main]
async fn main() {
    logger::init_logger();

    let cli = Cli::parse();
    let json = cli.command.json();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            report_error(&e, json);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let source = GithubSource::new(&config)?;

    match cli.command {
        Commands::Tree { repo_link, json } => handle_tree(&source, repo_link, json).await,
        Commands::Process {
            repo_link,
            ignore_list,
            exclude_dir,
            exclude_file,
            output,
            json,
        } => {
            let mut rules = match ignore_list {
                Some(path) => read_ignore_list(&path)?,
                None => Vec::new(),
            };
            rules.extend(exclude_dir.iter().map(|p| ExclusionRule::dir(normalize(p))));
            rules.extend(exclude_file.iter().map(|p| ExclusionRule::file(normalize(p))));

            let request = ProcessRequest {
                repo_link,
                ignore_list: rules,
            };
            handle_process(&source, &request, config.max_concurrent_requests, output.as_deref(), json)
                .await
        }
    }
}

// Handles the 'tree' subcommand
async fn handle_tree(source: &GithubSource, repo_link: String, json: bool) -> Result<()> {
    let response = api::query_structure(source, &QueryRequest { repo_link }).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for entry in &response.tree {
            let label = match entry.kind {
                EntryKind::Directory => "dir",
                EntryKind::File => "file",
            };
            println!("{:<4} {}", label, entry.path);
        }
    }

    Ok(())
}

// Handles the 'process' subcommand
async fn handle_process(
    source: &GithubSource,
    request: &ProcessRequest,
    max_in_flight: usize,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let response = api::process_repository(source, request, max_in_flight).await?;

    let text = if json {
        serde_json::to_string_pretty(&response)?
    } else {
        response.output
    };

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

// Reads an ignore list in the same shape as the "ignoreList" request field
fn read_ignore_list(path: &Path) -> Result<Vec<ExclusionRule>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore list {}", path.display()))?;
    let rules = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid ignore list {}", path.display()))?;
    Ok(rules)
}

// Paths typed on the command line may carry a leading "./" or a trailing "/"
fn normalize(path: &str) -> String {
    path.trim_start_matches("./").trim_matches('/').to_string()
}

// Prints an error either as the {"error": ...} body or as a plain message
fn report_error(error: &anyhow::Error, json: bool) {
    let message = format!("{:#}", error);
    if json {
        let body = ErrorResponse { error: message.clone() };
        match serde_json::to_string_pretty(&body) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("Error: {}", message),
        }
    } else {
        eprintln!("Error: {}", message);
    }
}
