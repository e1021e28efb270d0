//! Command-line interface definitions and parsing
//!
//! The CLI mirrors the original workflow: `org init` scaffolds the working
//! directory, `org view <kind> [directive] [property] [term]` opens the
//! interactive browser, `org val` runs validation standalone. The browser
//! core never parses arguments itself; the view directive is turned into
//! already-validated primitives here.
//!
//! # Examples
//!
//! ```bash
//! org init
//! org view todos                 # plain browse
//! org view todos s title milk    # fuzzy search, then browse
//! org view todos es status open  # exact search, then browse
//! org view events o date         # sort ascending, then browse
//! org view events r date         # sort descending, then browse
//! org view all a                 # reset (no filter), browse everything
//! org val
//! ```

use crate::record::RecordKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Org command line interface
#[derive(Debug, Parser)]
#[command(name = "org", about = "Plain-file notes, todos and events", version)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Working directory root (defaults to the current directory)
    #[arg(short = 'C', long = "dir", global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Top-level subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize org in the working directory
    #[command(visible_alias = "i")]
    Init,

    /// Browse records of a given kind interactively
    #[command(visible_alias = "v")]
    View {
        /// Which records to browse
        #[arg(value_enum)]
        kind: KindArg,

        /// Optional search/sort/reset directive applied before browsing
        #[arg(value_enum)]
        directive: Option<Directive>,

        /// Property to search or sort by
        property: Option<String>,

        /// Term to search for
        term: Option<String>,
    },

    /// Run validation without browsing
    Val,
}

/// Record scope selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Notes,
    Todos,
    Events,
    All,
}

impl KindArg {
    /// The single record kind this scope names, or `None` for `all`
    #[must_use]
    pub const fn kind(self) -> Option<RecordKind> {
        match self {
            Self::Notes => Some(RecordKind::Note),
            Self::Todos => Some(RecordKind::Todo),
            Self::Events => Some(RecordKind::Event),
            Self::All => None,
        }
    }

    /// Label used in the browser title bar
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Todos => "todos",
            Self::Events => "events",
            Self::All => "all",
        }
    }
}

/// View directive letters, matching the in-session command keys
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Fuzzy search by property and term
    S,
    /// Exact search by property and term
    Es,
    /// Sort ascending by property
    O,
    /// Sort descending by property
    R,
    /// Reset (no filter)
    A,
}

/// A fully-resolved browse request handed to the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    /// Which records are in scope
    pub kind: KindArg,

    /// Initial transform applied to the loaded collection, if any
    pub query: Option<QueryDirective>,
}

/// One already-parsed query operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryDirective {
    Fuzzy { property: String, term: String },
    Exact { property: String, term: String },
    Sort { property: String, reverse: bool },
}

impl ViewRequest {
    /// Build a request from raw view arguments
    ///
    /// Incomplete directives (a search without a term, a sort without a
    /// property) fall back to a plain unfiltered view rather than erroring,
    /// so partial invocations still open the browser.
    #[must_use]
    pub fn from_args(
        kind: KindArg,
        directive: Option<Directive>,
        property: Option<String>,
        term: Option<String>,
    ) -> Self {
        let query = match directive {
            Some(Directive::S) => match (property, term) {
                (Some(property), Some(term)) => Some(QueryDirective::Fuzzy { property, term }),
                _ => None,
            },
            Some(Directive::Es) => match (property, term) {
                (Some(property), Some(term)) => Some(QueryDirective::Exact { property, term }),
                _ => None,
            },
            Some(Directive::O) => property.map(|property| QueryDirective::Sort {
                property,
                reverse: false,
            }),
            Some(Directive::R) => property.map(|property| QueryDirective::Sort {
                property,
                reverse: true,
            }),
            Some(Directive::A) | None => None,
        };

        Self { kind, query }
    }
}
