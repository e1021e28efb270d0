//! Configuration module for org
//!
//! Configuration lives inside the workspace at `<root>/.org/config.toml` and
//! currently carries the project marker. The root itself always comes from
//! the caller (CLI `--dir` or the current directory) so nothing in the core
//! depends on ambient process state.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the scaffold directory created by `org init`
pub const ORG_DIR: &str = ".org";

/// Config file name inside the scaffold directory
const CONFIG_FILE: &str = "config.toml";

/// Marker substring designating org-managed project subdirectories
const DEFAULT_MARKER: &str = "_org";

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

/// Application configuration, threaded explicitly into loader and session
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrgConfig {
    /// Workspace root holding the marked project directories
    #[serde(skip)]
    pub root: PathBuf,

    /// Substring that marks a subdirectory as an org-managed project
    #[serde(default = "default_marker")]
    pub marker: String,
}

impl OrgConfig {
    /// Default configuration for a given root
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            root,
            marker: default_marker(),
        }
    }

    /// Path to the scaffold directory for a root
    #[must_use]
    pub fn org_dir(root: &Path) -> PathBuf {
        root.join(ORG_DIR)
    }

    /// Whether a root has been initialized (scaffold directory present)
    #[must_use]
    pub fn is_initialized(root: &Path) -> bool {
        Self::org_dir(root).is_dir()
    }

    /// Open the configuration for an initialized root
    ///
    /// Missing config file fields fall back to defaults, so workspaces
    /// initialized by older versions keep working.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OrgError::NotInitialized`] if the scaffold directory
    /// is absent, or a `ConfigError` if the file cannot be read or parsed.
    pub fn open(root: &Path) -> Result<Self, crate::OrgError> {
        if !Self::is_initialized(root) {
            return Err(crate::OrgError::NotInitialized(root.to_path_buf()));
        }

        let config_path = Self::org_dir(root).join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::with_root(root.to_path_buf()));
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        let mut loaded: Self = settings.try_deserialize()?;
        loaded.root = root.to_path_buf();
        Ok(loaded)
    }

    /// Save configuration into the scaffold directory
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the scaffold directory cannot be created,
    /// the configuration cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let org_dir = Self::org_dir(&self.root);
        fs::create_dir_all(&org_dir)
            .map_err(|e| ConfigError::Message(format!("Failed to create {ORG_DIR} directory: {e}")))?;

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(org_dir.join(CONFIG_FILE), toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
