use changelog_fragment::cli::tui::fragment::events::AppEvent;
use changelog_fragment::cli::tui::fragment::resolver::Resolution;
use changelog_fragment::cli::tui::fragment::state::{
    Category, Outcome, Scene, Step, Transition, Wizard, PR_LIST_TITLE, TYPE_LIST_TITLE,
};
use changelog_fragment::FragmentError;
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use tempfile::TempDir;

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_c() -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

fn type_text(wizard: &mut Wizard, text: &str) {
    for c in text.chars() {
        assert_eq!(wizard.handle_event(key(KeyCode::Char(c))), Step::Continue);
    }
}

fn changelog_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn dir_entries(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_new_wizard_is_empty() {
    let dir = changelog_dir();
    let wizard = Wizard::new(dir.path());

    assert_eq!(wizard.scene(), Scene::PrSelect);
    assert!(wizard.target_pr().is_none());
    assert!(wizard.target_type().is_none());
    assert!(wizard.file_name().is_none());
    assert!(wizard.list().is_none());
    assert!(!wizard.written());
    assert!(wizard.error().is_none());
}

#[test]
fn test_single_pr_skips_pr_selection() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    let step = wizard.handle_event(AppEvent::Resolved(Resolution::Single("42".into())));

    assert_eq!(step, Step::Continue);
    assert_eq!(wizard.scene(), Scene::TypeSelect);
    assert_eq!(wizard.target_pr(), Some("42"));
    assert_eq!(wizard.file_name(), Some(dir.path().join("42.txt").as_path()));

    // The only list ever built is the category list
    let list = wizard.list().unwrap();
    assert_eq!(list.title(), TYPE_LIST_TITLE);
    assert_eq!(list.len(), 7);
}

#[test]
fn test_multiple_prs_show_list_and_commit_highlighted() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    wizard.handle_event(AppEvent::Resolved(Resolution::Multiple(vec![
        "10".into(),
        "11".into(),
        "12".into(),
    ])));

    assert_eq!(wizard.scene(), Scene::PrSelect);
    let list = wizard.list().unwrap();
    assert_eq!(list.title(), PR_LIST_TITLE);
    assert_eq!(list.len(), 3);
    assert!(wizard.target_pr().is_none());

    wizard.handle_event(key(KeyCode::Down));
    wizard.handle_event(key(KeyCode::Down));
    wizard.handle_event(key(KeyCode::Up));
    assert_eq!(wizard.list().unwrap().selected(), Some("11"));

    wizard.handle_event(key(KeyCode::Enter));
    assert_eq!(wizard.target_pr(), Some("11"));
    assert_eq!(wizard.scene(), Scene::TypeSelect);
    assert_eq!(wizard.list().unwrap().title(), TYPE_LIST_TITLE);
}

#[test]
fn test_enter_before_resolution_is_noop() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    assert_eq!(wizard.handle_event(key(KeyCode::Enter)), Step::Continue);
    assert_eq!(wizard.scene(), Scene::PrSelect);
    assert!(wizard.target_pr().is_none());
}

#[test]
fn test_enter_on_empty_candidate_list_is_noop() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    wizard.apply(Transition::CandidatesLoaded(Vec::new()));
    assert_eq!(wizard.handle_event(key(KeyCode::Enter)), Step::Continue);
    assert_eq!(wizard.scene(), Scene::PrSelect);
    assert!(wizard.target_pr().is_none());
}

#[test]
fn test_existing_fragment_is_never_overwritten() {
    let dir = changelog_dir();
    fs::write(dir.path().join("42.txt"), "original").unwrap();
    let mut wizard = Wizard::new(dir.path());

    let step = wizard.handle_event(AppEvent::Resolved(Resolution::Single("42".into())));

    assert_eq!(step, Step::Quit);
    assert_eq!(wizard.scene(), Scene::PrSelect);
    assert!(matches!(
        wizard.error(),
        Some(FragmentError::DuplicateFragment { .. })
    ));
    assert!(wizard.list().is_none());
    assert_eq!(fs::read_to_string(dir.path().join("42.txt")).unwrap(), "original");
}

#[test]
fn test_duplicate_detected_after_picking_from_list() {
    let dir = changelog_dir();
    fs::write(dir.path().join("8.txt"), "x").unwrap();
    let mut wizard = Wizard::new(dir.path());

    wizard.handle_event(AppEvent::Resolved(Resolution::Multiple(vec![
        "7".into(),
        "8".into(),
    ])));
    wizard.handle_event(key(KeyCode::Down));
    let step = wizard.handle_event(key(KeyCode::Enter));

    assert_eq!(step, Step::Quit);
    assert_eq!(
        wizard.error().unwrap().to_string(),
        format!("{} already exists", dir.path().join("8.txt").display())
    );
}

#[test]
fn test_full_flow_writes_exact_document() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    wizard.handle_event(AppEvent::Resolved(Resolution::Single("42".into())));
    // "bug" is the first category
    wizard.handle_event(key(KeyCode::Enter));
    assert_eq!(wizard.target_type(), Some(Category::Bug));
    assert_eq!(wizard.scene(), Scene::BodyInput);
    assert!(wizard.list().is_none());

    type_text(&mut wizard, "Fixed the thing.");
    let step = wizard.handle_event(key(KeyCode::Enter));

    assert_eq!(step, Step::Quit);
    assert!(wizard.written());
    assert!(wizard.error().is_none());

    let written = fs::read_to_string(dir.path().join("42.txt")).unwrap();
    assert_eq!(written, "```release-note:bug\nFixed the thing.\n```");
    assert_eq!(wizard.document(), Some(written.as_str()));

    match wizard.finish() {
        Outcome::Written(path) => assert_eq!(path, dir.path().join("42.txt")),
        other => panic!("Expected Written, got {:?}", other),
    }
}

#[test]
fn test_category_navigation_picks_highlighted_value() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    wizard.handle_event(AppEvent::Resolved(Resolution::Single("5".into())));
    for _ in 0..4 {
        wizard.handle_event(key(KeyCode::Down));
    }
    wizard.handle_event(key(KeyCode::Enter));
    assert_eq!(wizard.target_type(), Some(Category::BreakingChange));

    wizard.handle_event(key(KeyCode::Enter));
    let written = fs::read_to_string(dir.path().join("5.txt")).unwrap();
    assert_eq!(written, "```release-note:breaking-change\n\n```");
}

#[test]
fn test_body_is_written_without_trimming() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    wizard.handle_event(AppEvent::Resolved(Resolution::Single("3".into())));
    wizard.handle_event(key(KeyCode::Up));
    wizard.handle_event(key(KeyCode::Enter));
    type_text(&mut wizard, "  spaced out  ");
    wizard.handle_event(key(KeyCode::Enter));

    let written = fs::read_to_string(dir.path().join("3.txt")).unwrap();
    assert_eq!(written, "```release-note:bug\n  spaced out  \n```");
}

#[test]
fn test_cancel_in_every_scene_leaves_directory_untouched() {
    // PrSelect
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());
    wizard.handle_event(AppEvent::Resolved(Resolution::Multiple(vec![
        "1".into(),
        "2".into(),
    ])));
    assert_eq!(wizard.handle_event(ctrl_c()), Step::Quit);
    assert!(matches!(wizard.error(), Some(FragmentError::Cancelled)));
    assert!(dir_entries(&dir).is_empty());

    // TypeSelect
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());
    wizard.handle_event(AppEvent::Resolved(Resolution::Single("1".into())));
    assert_eq!(wizard.handle_event(ctrl_c()), Step::Quit);
    assert_eq!(wizard.error().unwrap().to_string(), "terminated");
    assert!(dir_entries(&dir).is_empty());

    // BodyInput
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());
    wizard.handle_event(AppEvent::Resolved(Resolution::Single("1".into())));
    wizard.handle_event(key(KeyCode::Enter));
    type_text(&mut wizard, "half done");
    assert_eq!(wizard.handle_event(ctrl_c()), Step::Quit);
    assert!(!wizard.written());
    assert!(dir_entries(&dir).is_empty());

    let outcome = wizard.finish();
    assert_eq!(outcome.exit_code(), 1);
}

#[test]
fn test_resolver_failure_terminates() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    let step = wizard.handle_event(AppEvent::Failed(FragmentError::NotFound));

    assert_eq!(step, Step::Quit);
    assert!(wizard.list().is_none());
    assert_eq!(
        wizard.error().unwrap().to_string(),
        "no open pull requests found for current branch"
    );
}

#[test]
fn test_events_after_termination_are_ignored() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    wizard.handle_event(ctrl_c());
    let step = wizard.handle_event(AppEvent::Resolved(Resolution::Single("42".into())));

    assert_eq!(step, Step::Quit);
    assert!(wizard.target_pr().is_none());
    assert!(matches!(wizard.error(), Some(FragmentError::Cancelled)));
}

#[test]
fn test_late_resolution_does_not_rewind() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    wizard.handle_event(AppEvent::Resolved(Resolution::Single("1".into())));
    wizard.handle_event(AppEvent::Resolved(Resolution::Multiple(vec![
        "1".into(),
        "2".into(),
    ])));

    assert_eq!(wizard.scene(), Scene::TypeSelect);
    assert_eq!(wizard.list().unwrap().title(), TYPE_LIST_TITLE);
}

#[test]
fn test_resize_does_not_change_scene() {
    let dir = changelog_dir();
    let mut wizard = Wizard::new(dir.path());

    assert_eq!(wizard.handle_event(AppEvent::Resize(120, 40)), Step::Continue);
    assert_eq!(wizard.scene(), Scene::PrSelect);
    assert!(wizard.list().is_none());
    assert!(!wizard.is_finished());
}

#[test]
fn test_write_failure_reports_error() {
    let dir = changelog_dir();
    // Points at a directory that does not exist, so the temp file can't be created
    let mut wizard = Wizard::new(dir.path().join("missing"));

    wizard.handle_event(AppEvent::Resolved(Resolution::Single("9".into())));
    wizard.handle_event(key(KeyCode::Enter));
    let step = wizard.handle_event(key(KeyCode::Enter));

    assert_eq!(step, Step::Quit);
    assert!(!wizard.written());
    assert!(matches!(wizard.error(), Some(FragmentError::Write { .. })));
}

#[test]
fn test_category_values() {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "bug",
            "improvement",
            "feature",
            "security",
            "breaking-change",
            "deprecation",
            "note"
        ]
    );
    assert_eq!("deprecation".parse::<Category>(), Ok(Category::Deprecation));
    assert!("Bug".parse::<Category>().is_err());
}
