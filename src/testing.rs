//! Testing utilities for org
//!
//! Provides a `Workspace` fixture that builds an initialized org root inside
//! a temporary directory, with helpers for adding marked projects and record
//! files. The backing directory is removed when the fixture is dropped.
//!
//! Only available when compiled with `cfg(test)`.

use crate::config::OrgConfig;
use crate::record::RecordKind;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary initialized org workspace for tests
///
/// # Examples
/// ```ignore
/// let ws = Workspace::new();
/// ws.add_project("home_org");
/// ws.add_record("home_org", RecordKind::Todo, "milk.txt", "title: Buy milk\nstatus: open\n");
/// let collection = load_kind(&ws.config(), RecordKind::Todo).unwrap();
/// ```
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create an initialized workspace (scaffold directory present)
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp workspace");
        fs::create_dir(OrgConfig::org_dir(dir.path())).expect("failed to create .org");
        Self { dir }
    }

    /// Workspace root path
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Configuration pointing at this workspace with the default marker
    #[must_use]
    pub fn config(&self) -> OrgConfig {
        OrgConfig::with_root(self.root().to_path_buf())
    }

    /// Create a project subdirectory (marked or not, depending on its name)
    pub fn add_project(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::create_dir_all(&path).expect("failed to create project dir");
        path
    }

    /// Ensure a kind folder exists inside a project without adding records
    pub fn ensure_kind_dir(&self, project: &str, kind: RecordKind) -> PathBuf {
        let path = self.root().join(project).join(kind.dir_name());
        fs::create_dir_all(&path).expect("failed to create kind dir");
        path
    }

    /// Write a record file with UTF-8 content
    pub fn add_record(&self, project: &str, kind: RecordKind, filename: &str, content: &str) {
        let dir = self.ensure_kind_dir(project, kind);
        fs::write(dir.join(filename), content).expect("failed to write record");
    }

    /// Write a record file with raw bytes (for unreadable-file tests)
    pub fn add_record_bytes(&self, project: &str, kind: RecordKind, filename: &str, bytes: &[u8]) {
        let dir = self.ensure_kind_dir(project, kind);
        fs::write(dir.join(filename), bytes).expect("failed to write record");
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
