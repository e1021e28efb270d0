//! Integration tests for the org CLI
//!
//! These tests verify end-to-end workflows against a temporary working
//! directory: scaffolding with init, loading records, querying, driving a
//! browser session through its state machine, and validation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use org::OrgError;
use org::browse::{SessionPhase, SessionState, events::handle_key};
use org::cli::{Directive, KindArg, ViewRequest};
use org::commands;
use org::commands::view::prepare_session;
use org::config::OrgConfig;
use org::record::{RecordKind, load_all, load_kind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build an initialized workspace with one marked project
fn setup_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("home_org")).unwrap();
    commands::init(dir.path(), true).unwrap();
    dir
}

fn write_record(root: &Path, project: &str, kind: RecordKind, name: &str, content: &str) {
    let dir = root.join(project).join(kind.dir_name());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_init_then_load_round_trip() {
    let dir = setup_workspace();

    // init created the scaffold and all kind folders
    assert!(OrgConfig::is_initialized(dir.path()));
    for kind in RecordKind::ALL {
        assert!(dir.path().join("home_org").join(kind.dir_name()).is_dir());
    }

    write_record(
        dir.path(),
        "home_org",
        RecordKind::Todo,
        "milk.txt",
        "title: Buy milk\nstatus: open\n",
    );

    let config = OrgConfig::open(dir.path()).unwrap();
    let todos = load_kind(&config, RecordKind::Todo).unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos.records()[0].title(), "Buy milk");
}

#[test]
fn test_view_on_uninitialized_directory_fails() {
    let dir = TempDir::new().unwrap();
    let request = ViewRequest::from_args(KindArg::All, None, None, None);

    let result = commands::view(dir.path(), &request);
    assert!(matches!(result, Err(OrgError::NotInitialized(_))));
}

#[test]
fn test_view_without_marked_projects_fails() {
    let dir = TempDir::new().unwrap();
    commands::init(dir.path(), true).unwrap();

    let config = OrgConfig::open(dir.path()).unwrap();
    let request = ViewRequest::from_args(KindArg::Todos, None, None, None);

    let result = prepare_session(&config, &request);
    assert!(matches!(result, Err(OrgError::NoProjects { .. })));
}

#[test]
fn test_directive_chain_from_cli_to_session() {
    let dir = setup_workspace();
    write_record(
        dir.path(),
        "home_org",
        RecordKind::Todo,
        "a.txt",
        "title: Water plants\nstatus: open\n",
    );
    write_record(
        dir.path(),
        "home_org",
        RecordKind::Todo,
        "b.txt",
        "title: Call dentist\nstatus: done\n",
    );

    let config = OrgConfig::open(dir.path()).unwrap();
    let request = ViewRequest::from_args(
        KindArg::Todos,
        Some(Directive::S),
        Some("title".into()),
        Some("plant".into()),
    );

    let state = prepare_session(&config, &request).unwrap();
    assert_eq!(state.view.len(), 1);
    assert_eq!(state.view.records()[0].title(), "Water plants");
    assert_eq!(state.full.len(), 2);
}

#[test]
fn test_session_driven_by_key_events() {
    let dir = setup_workspace();
    for (name, content) in [
        ("a.txt", "title: alpha\nstatus: open\n"),
        ("b.txt", "title: beta\nstatus: done\n"),
        ("c.txt", "title: gamma\nstatus: open\n"),
    ] {
        write_record(dir.path(), "home_org", RecordKind::Note, name, content);
    }

    let config = OrgConfig::open(dir.path()).unwrap();
    let collection = load_kind(&config, RecordKind::Note).unwrap();
    let mut state = SessionState::new(collection, "notes");

    // navigate, then run an exact search from the prompt
    handle_key(&mut state, key(KeyCode::Down));
    handle_key(&mut state, key(KeyCode::Char('e')));
    for c in "status open".chars() {
        handle_key(&mut state, key(KeyCode::Char(c)));
    }
    handle_key(&mut state, key(KeyCode::Enter));

    assert_eq!(state.view.len(), 2);
    assert_eq!(state.cursor, 0);

    // reset restores everything, quit ends the session
    handle_key(&mut state, key(KeyCode::Char('a')));
    assert_eq!(state.view.len(), 3);

    handle_key(&mut state, key(KeyCode::Char('q')));
    assert_eq!(state.phase, SessionPhase::Terminated);
}

#[test]
fn test_all_scope_concatenates_kinds() {
    let dir = setup_workspace();
    write_record(dir.path(), "home_org", RecordKind::Event, "e.txt", "title: E\n");
    write_record(dir.path(), "home_org", RecordKind::Note, "n.txt", "title: N\n");
    write_record(dir.path(), "home_org", RecordKind::Todo, "t.txt", "title: T\n");

    let config = OrgConfig::open(dir.path()).unwrap();
    let all = load_all(&config).unwrap();

    let kinds: Vec<_> = all.records().iter().map(|rec| rec.kind).collect();
    assert_eq!(
        kinds,
        vec![RecordKind::Note, RecordKind::Todo, RecordKind::Event]
    );
}

#[test]
fn test_validation_catches_bad_dates_end_to_end() {
    let dir = setup_workspace();
    write_record(
        dir.path(),
        "home_org",
        RecordKind::Event,
        "party.txt",
        "title: Party\ndate: whenever\n",
    );

    let result = commands::validate(dir.path(), true);
    assert!(matches!(result, Err(OrgError::ValidationFailed(1))));

    // view runs the same checks before acquiring the terminal
    let request = ViewRequest::from_args(KindArg::Events, None, None, None);
    let result = commands::view(dir.path(), &request);
    assert!(matches!(result, Err(OrgError::ValidationFailed(1))));

    // fix the record and validation passes
    write_record(
        dir.path(),
        "home_org",
        RecordKind::Event,
        "party.txt",
        "title: Party\ndate: 2026-08-29\n",
    );
    commands::validate(dir.path(), true).unwrap();
}

#[test]
fn test_custom_marker_from_config() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("work_proj")).unwrap();

    let mut config = OrgConfig::with_root(dir.path().to_path_buf());
    config.marker = "_proj".to_string();
    config.save().unwrap();

    // re-open picks up the custom marker and init scaffolds accordingly
    commands::init(dir.path(), true).unwrap();
    let reloaded = OrgConfig::open(dir.path()).unwrap();
    assert_eq!(reloaded.marker, "_proj");
    assert!(dir.path().join("work_proj").join("notes").is_dir());
}
