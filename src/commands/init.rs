//! Init command - scaffold a working directory for org
//!
//! Creates the `.org` directory with a default config, the three kind
//! folders inside every marked project subdirectory, and keeps `.org` out of
//! version control via `.gitignore`. Re-running is safe: existing folders are
//! left alone and newly marked projects get their kind folders.

use crate::config::{ORG_DIR, OrgConfig};
use crate::record::{RecordKind, marked_projects};
use crate::OrgError;
use colored::Colorize;
use dialoguer::Confirm;
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, OrgError>;

/// Execute the init command
///
/// # Errors
/// Returns an error if the scaffold cannot be created or the user declines
/// to replace a stray `.org` file.
pub fn execute(root: &Path, quiet: bool) -> Result<()> {
    let org_dir = OrgConfig::org_dir(root);

    if org_dir.exists() && !org_dir.is_dir() {
        // A stray `.org` file blocks the scaffold directory
        if !quiet {
            eprintln!(
                "{} '{}' exists as a file",
                "warning:".yellow().bold(),
                org_dir.display()
            );
        }
        let replace = quiet
            || Confirm::new()
                .with_prompt("Remove it and create the directory instead?")
                .default(false)
                .interact()
                .map_err(|e| OrgError::InvalidInput(format!("Confirmation failed: {e}")))?;
        if !replace {
            return Err(OrgError::InvalidInput("init aborted".to_string()));
        }
        fs::remove_file(&org_dir)?;
    }

    // re-running keeps an existing config, including a customized marker
    let config = if org_dir.is_dir() {
        if !quiet {
            println!("'{}' is already initialized for org.", root.display());
        }
        OrgConfig::open(root)?
    } else {
        let config = OrgConfig::with_root(root.to_path_buf());
        config.save()?;
        if !quiet {
            println!(
                "{} created {} directory in {}",
                "✓".green(),
                ORG_DIR,
                root.display()
            );
        }
        config
    };

    scaffold_projects(&config, quiet)?;
    patch_gitignore(root, quiet)?;

    Ok(())
}

/// Create the kind folders inside every marked project subdirectory
fn scaffold_projects(config: &OrgConfig, quiet: bool) -> Result<()> {
    for project in marked_projects(config)? {
        for kind in RecordKind::ALL {
            let kind_dir = project.join(kind.dir_name());
            if kind_dir.exists() {
                continue;
            }
            fs::create_dir_all(&kind_dir)?;
            if !quiet {
                println!("{} created {}", "✓".green(), kind_dir.display());
            }
        }
    }
    Ok(())
}

/// Keep the scaffold directory out of version control
///
/// An existing `.gitignore` gets a `/.org` line appended unless one of the
/// accepted forms is already present; a missing one is created.
fn patch_gitignore(root: &Path, quiet: bool) -> Result<()> {
    let gitignore = root.join(".gitignore");

    if gitignore.exists() {
        let contents = fs::read_to_string(&gitignore)?;
        let listed = contents
            .lines()
            .any(|line| matches!(line.trim(), ".org" | "/.org"));
        if listed {
            if !quiet {
                println!("{ORG_DIR} is already listed in .gitignore");
            }
            return Ok(());
        }

        let mut updated = contents;
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str("/.org\n");
        fs::write(&gitignore, updated)?;
        if !quiet {
            println!("Added {ORG_DIR} to existing .gitignore");
        }
    } else {
        fs::write(&gitignore, ".org\n")?;
        if !quiet {
            println!("Created .gitignore and added {ORG_DIR}");
        }
    }

    Ok(())
}
