//! Org - a plain-file personal knowledge base
//!
//! This library scaffolds `notes/`, `todos/` and `events/` folders inside
//! marked project directories and provides an interactive terminal browser
//! over the record files stored there, with fuzzy/exact search and sorting.

use std::path::PathBuf;
use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod query;
pub mod record;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum OrgError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal UI error
    #[error("Terminal error: {0}")]
    UiError(#[from] browse::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// The working directory has no `.org` scaffold
    #[error("'{}' is not initialized for org. Run 'org init' first.", .0.display())]
    NotInitialized(PathBuf),
    /// No marked project subdirectories were found
    #[error("no project directories matching marker '{marker}' found in '{}'", root.display())]
    NoProjects { root: PathBuf, marker: String },
    /// Validation found problems that block browsing
    #[error("validation failed with {0} issue(s)")]
    ValidationFailed(usize),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
