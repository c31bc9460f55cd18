use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::record_id;
use crate::navigation::NavigationState;
use crate::plan::ReadingPlan;
use crate::progress::ProgressTracker;
use crate::store::KeyValueStore;

use super::day;
use super::helpers::assigned_book;

/// Toggles completion of `book chapter` on the current day.
///
/// Only chapters the day actually assigns can be marked; rest days have none.
pub fn run<S: KeyValueStore>(
    plan: &ReadingPlan,
    nav: &NavigationState,
    progress: &mut ProgressTracker<S>,
    book: &str,
    chapter: u32,
) -> Result<CmdResult> {
    let Some(reading) = plan.at(nav.current_index()) else {
        return day::view(plan, nav, progress);
    };

    if reading.is_rest_day {
        let mut result = day::view(plan, nav, progress)?;
        result.add_message(CmdMessage::warning(format!(
            "{} is a rest day, nothing to mark",
            reading.display_label()
        )));
        return Ok(result);
    }

    let Some(book) = assigned_book(reading, book, chapter) else {
        let mut result = day::view(plan, nav, progress)?;
        result.add_message(CmdMessage::warning(format!(
            "{} {} is not part of the reading for {}",
            book.trim(),
            chapter,
            reading.display_label()
        )));
        return Ok(result);
    };

    let id = record_id(&reading.id, book, chapter);
    let outcome = progress.toggle(&id);

    let mut result = day::view(plan, nav, progress)?;
    let verb = if outcome.complete {
        "marked as read"
    } else {
        "marked as unread"
    };
    result.add_message(CmdMessage::success(format!("{} {} {}", book, chapter, verb)));
    if !outcome.persisted {
        result.add_message(CmdMessage::warning(
            "Progress could not be saved, the change will be lost when this session ends",
        ));
    }
    Ok(result)
}
