//! Record data model
//!
//! A record is one note, todo or event loaded from a single file. These are
//! pure data structures with minimal logic; the file's leading `name: value`
//! header lines become an ordered property mapping and the full text is kept
//! for full-text search and display.

pub mod loader;

pub use loader::{load_all, load_kind, marked_projects};

use std::fmt;
use std::path::PathBuf;

/// The category of a record, one per kind-named folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Note,
    Todo,
    Event,
}

impl RecordKind {
    /// All kinds, in the order `load_all` concatenates them
    pub const ALL: [Self; 3] = [Self::Note, Self::Todo, Self::Event];

    /// Folder name holding records of this kind inside a project
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Note => "notes",
            Self::Todo => "todos",
            Self::Event => "events",
        }
    }

    /// Short label for display rows
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Todo => "todo",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One record loaded from a single file
///
/// `source_path` uniquely identifies the record; one file = one record.
/// Records are immutable once loaded, the browser never writes back to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Which kind-named folder the record came from
    pub kind: RecordKind,

    /// Absolute path of the backing file (record identity)
    pub source_path: PathBuf,

    /// Ordered property mapping parsed from the file's header lines
    pub properties: Vec<(String, String)>,

    /// Full file text, retained for full-text search and display
    pub raw_content: String,
}

impl Record {
    /// Parse a record from file text
    ///
    /// Leading lines of the form `name: value` form the property mapping,
    /// in file order. The header ends at the first blank line or the first
    /// line that does not fit that shape; no schema is imposed beyond the
    /// name/value split.
    #[must_use]
    pub fn parse(kind: RecordKind, source_path: PathBuf, text: &str) -> Self {
        let mut properties = Vec::new();

        for line in text.lines() {
            let Some((name, value)) = line.split_once(':') else {
                break;
            };
            let name = name.trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                break;
            }
            properties.push((name.to_string(), value.trim().to_string()));
        }

        Self {
            kind,
            source_path,
            properties,
            raw_content: text.to_string(),
        }
    }

    /// Look up a property value by name
    ///
    /// Names are matched exactly; the first occurrence wins when a file
    /// repeats a property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Display title: the `title` property, falling back to the file stem
    #[must_use]
    pub fn title(&self) -> &str {
        self.property("title").unwrap_or_else(|| {
            self.source_path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("<unnamed>")
        })
    }

    /// File name of the backing file, for display rows
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.source_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("<unknown>")
    }
}
