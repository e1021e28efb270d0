//! View command - load records and run the interactive browser
//!
//! Resolves the request against the workspace: opens the config, checks the
//! preconditions, runs validation, loads the requested kinds into a
//! collection, applies the optional CLI directive and hands the session to
//! the terminal frontend.

use crate::browse::{SessionState, run_session};
use crate::cli::ViewRequest;
use crate::config::OrgConfig;
use crate::record::{load_all, load_kind, marked_projects};
use crate::OrgError;

type Result<T> = std::result::Result<T, OrgError>;

/// Execute the view command
///
/// Validation runs before the screen is taken over; its issues are listed on
/// stderr and block browsing.
///
/// # Errors
/// Returns an error if the root is not initialized, no marked projects
/// exist, validation fails, the records cannot be loaded, or the terminal
/// cannot be acquired.
pub fn execute(root: &std::path::Path, request: &ViewRequest) -> Result<()> {
    crate::commands::validate(root, true)?;

    let config = OrgConfig::open(root)?;
    let mut state = prepare_session(&config, request)?;
    run_session(&mut state)?;
    Ok(())
}

/// Build the initial session state for a request
///
/// Split from [`execute`] so the load/filter path is testable without a
/// terminal.
///
/// # Errors
/// Returns [`OrgError::NoProjects`] when no marked project directories exist
/// under the root; an empty collection from existing projects is fine.
pub fn prepare_session(config: &OrgConfig, request: &ViewRequest) -> Result<SessionState> {
    if marked_projects(config)?.is_empty() {
        return Err(OrgError::NoProjects {
            root: config.root.clone(),
            marker: config.marker.clone(),
        });
    }

    let collection = match request.kind.kind() {
        Some(kind) => load_kind(config, kind)?,
        None => load_all(config)?,
    };

    let mut state = SessionState::new(collection, request.kind.label());
    if let Some(query) = &request.query {
        state.apply_directive(query);
    }

    Ok(state)
}
