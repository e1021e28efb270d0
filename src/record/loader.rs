//! Record loading from marked project directories
//!
//! Scans every immediate subdirectory of the configured root whose name
//! contains the marker substring, looks for the kind-named folder inside it,
//! and reads every regular file there non-recursively. An unreadable file is
//! skipped with a warning; a missing kind folder simply contributes nothing.
//! The whole pass is synchronous and completes before a session begins.

use crate::config::OrgConfig;
use crate::query::Collection;
use crate::record::{Record, RecordKind};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// List the marked project directories under the configured root, sorted by
/// name so load order is deterministic (`read_dir` order is unspecified).
///
/// # Errors
///
/// Returns an I/O error if the root directory itself cannot be read.
pub fn marked_projects(config: &OrgConfig) -> std::io::Result<Vec<PathBuf>> {
    let mut projects: Vec<PathBuf> = fs::read_dir(&config.root)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.contains(&config.marker))
        })
        .collect();

    projects.sort();
    Ok(projects)
}

/// Load every record of one kind from all marked projects
///
/// Files within each kind folder are read in sorted name order. A file that
/// cannot be read (missing, permission denied, not UTF-8) is skipped with a
/// warning on stderr; loading continues with the remaining files.
///
/// # Errors
///
/// Returns an I/O error only if the root directory cannot be scanned; a
/// project without the kind folder is not an error.
pub fn load_kind(config: &OrgConfig, kind: RecordKind) -> std::io::Result<Collection> {
    let mut records = Vec::new();

    for project in marked_projects(config)? {
        let kind_dir = project.join(kind.dir_name());
        if !kind_dir.is_dir() {
            continue;
        }
        load_dir(&kind_dir, kind, &mut records);
    }

    Ok(Collection::from(records))
}

/// Load all three kinds, concatenated notes then todos then events,
/// preserving per-file order within each kind.
///
/// # Errors
///
/// Returns an I/O error if the root directory cannot be scanned.
pub fn load_all(config: &OrgConfig) -> std::io::Result<Collection> {
    let mut records = Vec::new();

    for kind in RecordKind::ALL {
        records.extend(load_kind(config, kind)?.into_records());
    }

    Ok(Collection::from(records))
}

/// Read every regular file in one kind folder, appending parsed records
fn load_dir(kind_dir: &Path, kind: RecordKind, records: &mut Vec<Record>) {
    let entries = match fs::read_dir(kind_dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn_skipped(kind_dir, &e.to_string());
            return;
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    for file in files {
        match fs::read_to_string(&file) {
            Ok(text) => records.push(Record::parse(kind, file, &text)),
            Err(e) => warn_skipped(&file, &e.to_string()),
        }
    }
}

fn warn_skipped(path: &Path, reason: &str) {
    eprintln!(
        "{} skipping {}: {reason}",
        "warning:".yellow().bold(),
        path.display()
    );
}
