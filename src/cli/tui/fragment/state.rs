use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::components::{SelectList, TextEntry};
use super::document;
use super::events::AppEvent;
use super::resolver::Resolution;
use crate::FragmentError;

pub const PR_LIST_TITLE: &str = "Select PR number:";
pub const TYPE_LIST_TITLE: &str = "Select a changelog type:";

/// Wizard screens, in the only order they can be visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Scene {
    PrSelect,
    TypeSelect,
    BodyInput,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::PrSelect => "PR selection",
            Scene::TypeSelect => "Type selection",
            Scene::BodyInput => "Body input",
        }
    }
}

/// Release-note categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bug,
    Improvement,
    Feature,
    Security,
    BreakingChange,
    Deprecation,
    Note,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Bug,
        Category::Improvement,
        Category::Feature,
        Category::Security,
        Category::BreakingChange,
        Category::Deprecation,
        Category::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bug => "bug",
            Category::Improvement => "improvement",
            Category::Feature => "feature",
            Category::Security => "security",
            Category::BreakingChange => "breaking-change",
            Category::Deprecation => "deprecation",
            Category::Note => "note",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown changelog type: {}", s))
    }
}

/// Explicit state transitions for the wizard
#[derive(Debug)]
pub enum Transition {
    /// Terminate with this error, from any scene
    Abort(FragmentError),
    /// PR committed, either resolved directly or picked from the list
    PrChosen(String),
    /// Several PRs found, show them
    CandidatesLoaded(Vec<String>),
    TypeChosen(Category),
    /// Compose and write the fragment
    Submit,
}

/// Whether the event loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// How the wizard ended
#[derive(Debug)]
pub enum Outcome {
    Written(PathBuf),
    Failed(FragmentError),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Written(_) => 0,
            Outcome::Failed(_) => 1,
        }
    }
}

/// Everything the wizard has collected so far.
///
/// Only [`Wizard::handle_event`] and [`Wizard::apply`] mutate it.
#[derive(Debug)]
pub struct Wizard {
    scene: Scene,
    changelog_dir: PathBuf,
    target_pr: Option<String>,
    target_type: Option<Category>,
    file_name: Option<PathBuf>,
    written: bool,
    error: Option<FragmentError>,
    list: Option<SelectList>,
    body: TextEntry,
    document: Option<String>,
}

impl Wizard {
    pub fn new(changelog_dir: impl Into<PathBuf>) -> Self {
        Self {
            scene: Scene::PrSelect,
            changelog_dir: changelog_dir.into(),
            target_pr: None,
            target_type: None,
            file_name: None,
            written: false,
            error: None,
            list: None,
            body: TextEntry::new(),
            document: None,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn target_pr(&self) -> Option<&str> {
        self.target_pr.as_deref()
    }

    pub fn target_type(&self) -> Option<Category> {
        self.target_type
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn written(&self) -> bool {
        self.written
    }

    pub fn error(&self) -> Option<&FragmentError> {
        self.error.as_ref()
    }

    /// The list shown in the current scene, if any
    pub fn list(&self) -> Option<&SelectList> {
        self.list.as_ref()
    }

    pub fn body(&self) -> &TextEntry {
        &self.body
    }

    /// The document as written, after success
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.written || self.error.is_some()
    }

    /// Dispatch one event. Events after termination are ignored.
    pub fn handle_event(&mut self, event: AppEvent) -> Step {
        if self.is_finished() {
            return Step::Quit;
        }

        match event {
            AppEvent::Failed(err) => self.apply(Transition::Abort(err)),
            AppEvent::Resolved(Resolution::Single(pr)) => self.apply(Transition::PrChosen(pr)),
            AppEvent::Resolved(Resolution::Multiple(prs)) => {
                self.apply(Transition::CandidatesLoaded(prs))
            }
            // The next draw lays the view out for the new size
            AppEvent::Resize(..) => Step::Continue,
            AppEvent::Key(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Step {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.apply(Transition::Abort(FragmentError::Cancelled));
        }

        if key.code == KeyCode::Enter {
            return match self.confirm() {
                Some(transition) => self.apply(transition),
                None => Step::Continue,
            };
        }

        match self.scene {
            Scene::PrSelect | Scene::TypeSelect => {
                if let Some(list) = self.list.as_mut() {
                    list.handle_key(&key);
                }
            }
            Scene::BodyInput => {
                self.body.handle_key(key);
            }
        }
        Step::Continue
    }

    /// What Enter commits in the current scene. Nothing if no item is highlighted.
    fn confirm(&self) -> Option<Transition> {
        match self.scene {
            Scene::PrSelect => {
                let pr = self.list.as_ref()?.selected()?;
                Some(Transition::PrChosen(pr.to_string()))
            }
            Scene::TypeSelect => {
                let category = self.list.as_ref()?.selected()?.parse().ok()?;
                Some(Transition::TypeChosen(category))
            }
            Scene::BodyInput => Some(Transition::Submit),
        }
    }

    /// Transition table. Anything not listed is a no-op.
    pub fn apply(&mut self, transition: Transition) -> Step {
        if self.is_finished() {
            return Step::Quit;
        }

        match (self.scene, transition) {
            (_, Transition::Abort(err)) => self.fail(err),
            (Scene::PrSelect, Transition::PrChosen(pr)) if !pr.is_empty() => {
                self.enter_type_select(pr)
            }
            (Scene::PrSelect, Transition::CandidatesLoaded(prs)) => {
                self.list = Some(SelectList::new(PR_LIST_TITLE, prs));
                Step::Continue
            }
            (Scene::TypeSelect, Transition::TypeChosen(category)) => {
                self.target_type = Some(category);
                self.list = None;
                self.enter(Scene::BodyInput);
                Step::Continue
            }
            (Scene::BodyInput, Transition::Submit) => self.submit(),
            (scene, transition) => {
                tracing::debug!(scene = scene.name(), ?transition, "Ignoring transition");
                Step::Continue
            }
        }
    }

    fn enter(&mut self, scene: Scene) {
        tracing::debug!(from = self.scene.name(), to = scene.name(), "Scene transition");
        self.scene = scene;
    }

    fn enter_type_select(&mut self, pr: String) -> Step {
        let path = document::fragment_path(&self.changelog_dir, &pr);
        self.target_pr = Some(pr);
        self.file_name = Some(path.clone());

        // Never overwrite an existing fragment
        if path.exists() {
            return self.fail(FragmentError::DuplicateFragment { path });
        }

        self.enter(Scene::TypeSelect);
        self.list = Some(SelectList::new(
            TYPE_LIST_TITLE,
            Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
        ));
        Step::Continue
    }

    fn submit(&mut self) -> Step {
        let (Some(path), Some(category)) = (self.file_name.clone(), self.target_type) else {
            return Step::Continue;
        };

        let doc = document::compose(category, self.body.value());
        match document::write_new(&path, &doc) {
            Ok(()) => {
                tracing::info!(path = %path.display(), %category, "Fragment written");
                self.written = true;
                self.document = Some(doc);
                Step::Quit
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: FragmentError) -> Step {
        tracing::warn!(scene = self.scene.name(), error = %err, "Wizard terminated");
        self.list = None;
        self.error = Some(err);
        Step::Quit
    }

    /// Final result once the event loop has stopped
    pub fn finish(self) -> Outcome {
        match (self.written, self.file_name, self.error) {
            (true, Some(path), _) => Outcome::Written(path),
            (_, _, Some(err)) => Outcome::Failed(err),
            // Loop ended before the wizard did, e.g. the input stream closed
            _ => Outcome::Failed(FragmentError::Cancelled),
        }
    }
}
