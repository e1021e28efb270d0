//! Val command - check record files without browsing
//!
//! Walks every kind folder of every marked project and reports files the
//! browser would skip (unreadable or not UTF-8) and property values that do
//! not parse: `date` and `due` must be ISO dates (`%Y-%m-%d`).

use crate::config::OrgConfig;
use crate::record::{Record, RecordKind, marked_projects};
use crate::OrgError;
use chrono::NaiveDate;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, OrgError>;

/// Property names whose values must be ISO dates
const DATE_PROPERTIES: [&str; 2] = ["date", "due"];

/// One problem found in a record file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: PathBuf,
    pub message: String,
}

/// Execute the val command
///
/// # Errors
/// Returns [`OrgError::ValidationFailed`] with the issue count when problems
/// are found, or an error if the workspace cannot be scanned.
pub fn execute(root: &Path, quiet: bool) -> Result<()> {
    let config = OrgConfig::open(root)?;

    let projects = marked_projects(&config)?;
    if projects.is_empty() {
        return Err(OrgError::NoProjects {
            root: config.root.clone(),
            marker: config.marker.clone(),
        });
    }

    let issues = collect_issues(&config)?;

    if issues.is_empty() {
        if !quiet {
            println!(
                "{} all records in {} project(s) are valid",
                "✓".green(),
                projects.len()
            );
        }
        return Ok(());
    }

    for issue in &issues {
        eprintln!(
            "{} {}: {}",
            "✗".red(),
            issue.path.display(),
            issue.message
        );
    }

    Err(OrgError::ValidationFailed(issues.len()))
}

/// Scan every record file of every kind in every marked project
///
/// # Errors
/// Returns an I/O error if the root directory cannot be scanned.
pub fn collect_issues(config: &OrgConfig) -> std::io::Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for project in marked_projects(config)? {
        for kind in RecordKind::ALL {
            let kind_dir = project.join(kind.dir_name());
            if !kind_dir.is_dir() {
                continue;
            }
            check_dir(&kind_dir, kind, &mut issues)?;
        }
    }

    Ok(issues)
}

fn check_dir(kind_dir: &Path, kind: RecordKind, issues: &mut Vec<Issue>) -> std::io::Result<()> {
    let mut files: Vec<PathBuf> = fs::read_dir(kind_dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    for file in files {
        match fs::read_to_string(&file) {
            Ok(text) => {
                let record = Record::parse(kind, file.clone(), &text);
                check_record(&record, issues);
            }
            Err(e) => issues.push(Issue {
                path: file,
                message: format!("unreadable: {e}"),
            }),
        }
    }

    Ok(())
}

fn check_record(record: &Record, issues: &mut Vec<Issue>) {
    for name in DATE_PROPERTIES {
        let Some(value) = record.property(name) else {
            continue;
        };
        if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            issues.push(Issue {
                path: record.source_path.clone(),
                message: format!("property '{name}' is not a valid date: '{value}'"),
            });
        }
    }
}
