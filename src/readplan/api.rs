//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns one reading
//! session and is the single entry point for every client, be it the one-shot CLI,
//! the interactive shell, or a test.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session slices**: plan, navigation, progress, preferences, config
//! - **Normalizes inputs** (e.g., parsing `"2026-01-05"` or `"3"` into a [`DayTarget`])
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, and never decides how anything looks.
//!
//! ## Generic Over KeyValueStore
//!
//! `ReadplanApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `ReadplanApi<FileStore>`
//! - Testing: `ReadplanApi<InMemoryStore>`
//!
//! Progress and preferences each get a handle on the same backend, hence the
//! `Clone` bound.

use crate::commands;
use crate::config::ReadplanConfig;
use crate::error::Result;
use crate::model::{ThemePreference, ViewMode};
use crate::navigation::NavigationState;
use crate::plan::ReadingPlan;
use crate::preferences::{AmbientDetector, PreferenceStore};
use crate::progress::ProgressTracker;
use crate::store::KeyValueStore;

pub struct ReadplanApi<S: KeyValueStore + Clone> {
    plan: ReadingPlan,
    nav: NavigationState,
    progress: ProgressTracker<S>,
    prefs: PreferenceStore<S>,
    config: ReadplanConfig,
    paths: ReadplanPaths,
}

impl<S: KeyValueStore + Clone> ReadplanApi<S> {
    /// Starts a session on `today` (an ISO date), rehydrating progress and the theme
    /// from `store`.
    pub fn open(
        plan: ReadingPlan,
        today: &str,
        store: S,
        ambient: AmbientDetector,
        config: ReadplanConfig,
        paths: ReadplanPaths,
    ) -> Self {
        let nav = NavigationState::start(&plan, today);
        let progress = ProgressTracker::load(store.clone());
        let prefs = PreferenceStore::load_with(store, ambient);
        Self {
            plan,
            nav,
            progress,
            prefs,
            config,
            paths,
        }
    }

    pub fn current_day(&self) -> Result<CmdResult> {
        commands::day::view(&self.plan, &self.nav, &self.progress)
    }

    /// Jumps to a day given as an ISO date or a 1-based position.
    pub fn select_day(&mut self, target: &str) -> Result<CmdResult> {
        let target: DayTarget = target.parse()?;
        commands::day::select(&self.plan, &mut self.nav, &self.progress, &target)
    }

    /// Like [`select_day`](Self::select_day), but the target is always a date.
    fn select_date(&mut self, date: &str) -> Result<CmdResult> {
        let target = DayTarget::Date(date.trim().to_string());
        commands::day::select(&self.plan, &mut self.nav, &self.progress, &target)
    }

    pub fn next_day(&mut self) -> Result<CmdResult> {
        commands::day::step(&self.plan, &mut self.nav, &self.progress, Step::Next)
    }

    pub fn previous_day(&mut self) -> Result<CmdResult> {
        commands::day::step(&self.plan, &mut self.nav, &self.progress, Step::Previous)
    }

    pub fn toggle_view(&mut self) -> Result<CmdResult> {
        commands::schedule::toggle(&self.plan, &mut self.nav, &self.progress)
    }

    pub fn schedule(&self) -> Result<CmdResult> {
        commands::schedule::show(&self.plan, &self.nav, &self.progress)
    }

    /// Toggles a chapter on the current day, or on `date` when given.
    pub fn mark(&mut self, book: &str, chapter: u32, date: Option<&str>) -> Result<CmdResult> {
        if let Some(date) = date {
            let moved = self.select_date(date)?;
            if moved.has_warnings() {
                return Ok(moved);
            }
        }
        commands::mark::run(&self.plan, &self.nav, &mut self.progress, book, chapter)
    }

    pub fn read(&mut self, book: &str, chapter: u32) -> Result<CmdResult> {
        commands::read::select(
            &self.plan,
            &mut self.nav,
            &self.config.reader_url,
            book,
            chapter,
        )
    }

    pub fn dismiss(&mut self) -> Result<CmdResult> {
        commands::read::dismiss(&mut self.nav)
    }

    pub fn progress(&mut self, date: Option<&str>) -> Result<CmdResult> {
        if let Some(date) = date {
            let moved = self.select_date(date)?;
            if moved.has_warnings() {
                return Ok(moved);
            }
        }
        commands::progress::run(&self.plan, &self.nav, &self.progress)
    }

    pub fn theme(&mut self, action: ThemeAction) -> Result<CmdResult> {
        commands::theme::run(&mut self.prefs, action)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, &mut self.config, action)
    }

    pub fn current_theme(&self) -> ThemePreference {
        self.prefs.theme()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.nav.view_mode()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn plan(&self) -> &ReadingPlan {
        &self.plan
    }

    pub fn paths(&self) -> &ReadplanPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::day::{DayTarget, Step};
pub use crate::commands::theme::ThemeAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ReadplanPaths};
