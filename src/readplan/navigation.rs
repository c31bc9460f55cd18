//! # Navigation State
//!
//! A session-only state machine: which plan day is displayed, whether the single-day
//! or full-schedule view is active, and which chapter (if any) is queued for external
//! reading. Nothing here is persisted. Every session re-derives its start from the
//! current date.
//!
//! ```text
//!                 select_day(i)                     toggle_view()
//!   ┌──────────────────────────────────┐     ┌───────────────────────┐
//!   │ current = i                      │     │ view flips            │
//!   │ view    = SingleDay              │     │ current, selection    │
//!   │ selection cleared                │     │ unchanged             │
//!   └──────────────────────────────────┘     └───────────────────────┘
//!   select_chapter(b, c): selection = (b, c), replacing any previous one
//!   dismiss_selection():  selection cleared
//! ```

use crate::model::{ActiveSelection, ViewMode};
use crate::plan::ReadingPlan;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_index: usize,
    view_mode: ViewMode,
    active_selection: Option<ActiveSelection>,
    day_count: usize,
}

impl NavigationState {
    /// Initial session state: the plan entry dated `today`, or the first entry when
    /// `today` is not in the plan.
    pub fn start(plan: &ReadingPlan, today: &str) -> Self {
        let current_index = plan.find_index_by_date(today).unwrap_or(0);
        debug!(today, current_index, "navigation started");
        Self {
            current_index,
            view_mode: ViewMode::SingleDay,
            active_selection: None,
            day_count: plan.count(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn active_selection(&self) -> Option<&ActiveSelection> {
        self.active_selection.as_ref()
    }

    /// Jumps to `index`, returning to the single-day view with no selection.
    ///
    /// An index past the end of the plan is ignored and `false` is returned.
    pub fn select_day(&mut self, index: usize) -> bool {
        if index >= self.day_count {
            debug!(index, day_count = self.day_count, "select_day out of range");
            return false;
        }
        self.current_index = index;
        self.view_mode = ViewMode::SingleDay;
        self.active_selection = None;
        debug!(index, "day selected");
        true
    }

    pub fn next_day(&mut self) -> bool {
        self.select_day(self.current_index + 1)
    }

    pub fn previous_day(&mut self) -> bool {
        match self.current_index.checked_sub(1) {
            Some(index) => self.select_day(index),
            None => false,
        }
    }

    pub fn toggle_view(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.flipped();
        debug!(view = ?self.view_mode, "view toggled");
        self.view_mode
    }

    /// Queues `(book, chapter)` for reading, replacing any earlier selection.
    pub fn select_chapter(&mut self, book: impl Into<String>, chapter: u32) {
        let selection = ActiveSelection::new(book, chapter);
        debug!(%selection, "chapter selected");
        self.active_selection = Some(selection);
    }

    pub fn dismiss_selection(&mut self) {
        self.active_selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignment, DailyReading, Slot};

    fn plan() -> ReadingPlan {
        ReadingPlan::from_months(vec![vec![
            DailyReading::new("2026-01-01").with(Slot::OldTestament, Assignment::new("Genesis", "1-2")),
            DailyReading::new("2026-01-02").with(Slot::OldTestament, Assignment::new("Genesis", "3-4")),
            DailyReading::new("2026-01-03").with(Slot::OldTestament, Assignment::new("Genesis", "5-6")),
        ]])
    }

    #[test]
    fn starts_on_today() {
        let nav = NavigationState::start(&plan(), "2026-01-02");
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.view_mode(), ViewMode::SingleDay);
        assert!(nav.active_selection().is_none());
    }

    #[test]
    fn falls_back_to_first_entry() {
        let nav = NavigationState::start(&plan(), "2031-07-04");
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn select_day_resets_view_and_selection() {
        let mut nav = NavigationState::start(&plan(), "2026-01-01");
        nav.toggle_view();
        nav.select_chapter("Genesis", 1);

        assert!(nav.select_day(2));
        assert_eq!(nav.current_index(), 2);
        assert_eq!(nav.view_mode(), ViewMode::SingleDay);
        assert!(nav.active_selection().is_none());
    }

    #[test]
    fn select_day_out_of_range_is_ignored() {
        let mut nav = NavigationState::start(&plan(), "2026-01-02");
        nav.select_chapter("Genesis", 3);
        assert!(!nav.select_day(3));
        assert_eq!(nav.current_index(), 1);
        assert!(nav.active_selection().is_some());
    }

    #[test]
    fn toggle_view_keeps_day_and_selection() {
        let mut nav = NavigationState::start(&plan(), "2026-01-01");
        nav.select_day(1);
        nav.select_chapter("Genesis", 3);

        assert_eq!(nav.toggle_view(), ViewMode::FullSchedule);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.active_selection(), Some(&ActiveSelection::new("Genesis", 3)));

        assert_eq!(nav.toggle_view(), ViewMode::SingleDay);
    }

    #[test]
    fn select_chapter_replaces_previous() {
        let mut nav = NavigationState::start(&plan(), "2026-01-01");
        nav.select_chapter("Genesis", 1);
        nav.select_chapter("Matthew", 2);
        assert_eq!(nav.active_selection(), Some(&ActiveSelection::new("Matthew", 2)));

        nav.dismiss_selection();
        assert!(nav.active_selection().is_none());
    }

    #[test]
    fn next_and_previous_stop_at_edges() {
        let mut nav = NavigationState::start(&plan(), "2026-01-01");
        assert!(!nav.previous_day());
        assert!(nav.next_day());
        assert!(nav.next_day());
        assert!(!nav.next_day());
        assert_eq!(nav.current_index(), 2);
        assert!(nav.previous_day());
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn empty_plan_starts_at_zero() {
        let mut nav = NavigationState::start(&ReadingPlan::default(), "2026-01-01");
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.select_day(0));
    }
}
