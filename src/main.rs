//! Org CLI application entry point
//!
//! Org keeps notes, todos and events as plain files inside marked project
//! subdirectories and browses them in an interactive terminal session.
//!
//! # Usage
//!
//! ```bash
//! # Scaffold the working directory and marked projects
//! org init
//!
//! # Browse everything (default command)
//! org
//!
//! # Browse one kind, optionally pre-filtered
//! org view todos
//! org view todos s title milk     # fuzzy search by title
//! org view todos es status open   # exact search by status
//! org view events o date          # sort ascending by date
//! org view events r date          # sort descending by date
//!
//! # Check record files without browsing
//! org val
//! ```
//!
//! # Configuration
//!
//! `org init` writes `.org/config.toml` into the working directory; the
//! `--dir` flag points commands at a different root.

use org::{
    OrgError,
    cli::{Cli, Commands, KindArg, ViewRequest},
    commands,
};
use std::env;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, OrgError>;

/// Main entry point for the org CLI
///
/// Parses command-line arguments, resolves the working directory root and
/// dispatches to the appropriate command handler. No subcommand opens the
/// browser over all record kinds.
///
/// # Errors
///
/// Returns `OrgError` if the root cannot be resolved or any command handler
/// returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let root = match cli.dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };
    let root = normalize_root(root);

    match cli.command {
        Some(Commands::Init) => commands::init(&root, cli.quiet),
        Some(Commands::View {
            kind,
            directive,
            property,
            term,
        }) => {
            let request = ViewRequest::from_args(kind, directive, property, term);
            commands::view(&root, &request)
        }
        Some(Commands::Val) => commands::validate(&root, cli.quiet),
        None => {
            let request = ViewRequest::from_args(KindArg::All, None, None, None);
            commands::view(&root, &request)
        }
    }
}

/// Canonicalize the root when possible so error messages show real paths;
/// a root that does not exist yet is kept as given and fails later with a
/// clearer context.
fn normalize_root(root: PathBuf) -> PathBuf {
    root.canonicalize().unwrap_or(root)
}
