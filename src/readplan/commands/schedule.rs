use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ViewMode;
use crate::navigation::NavigationState;
use crate::plan::ReadingPlan;
use crate::progress::ProgressTracker;
use crate::store::KeyValueStore;

use super::{day, helpers::schedule_lines};

/// Flips between the single-day and full-schedule views and returns whichever is now active.
pub fn toggle<S: KeyValueStore>(
    plan: &ReadingPlan,
    nav: &mut NavigationState,
    progress: &ProgressTracker<S>,
) -> Result<CmdResult> {
    match nav.toggle_view() {
        ViewMode::FullSchedule => show(plan, nav, progress),
        ViewMode::SingleDay => day::view(plan, nav, progress),
    }
}

pub fn show<S: KeyValueStore>(
    plan: &ReadingPlan,
    nav: &NavigationState,
    progress: &ProgressTracker<S>,
) -> Result<CmdResult> {
    Ok(CmdResult::default().with_schedule(schedule_lines(plan, nav, progress)))
}
