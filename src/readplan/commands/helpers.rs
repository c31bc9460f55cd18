use crate::commands::{CardView, ChapterView, DayView, ScheduleLine};
use crate::model::{record_id, DailyReading, Slot};
use crate::navigation::NavigationState;
use crate::plan::ReadingPlan;
use crate::progress::ProgressTracker;
use crate::store::KeyValueStore;

/// Record ids of every trackable chapter of `day`.
pub fn day_record_ids(day: &DailyReading) -> Vec<String> {
    day.chapter_units()
        .into_iter()
        .map(|(_, book, chapter)| record_id(&day.id, book, chapter))
        .collect()
}

/// The day's own spelling of `book` if `(book, chapter)` is one of its assignments.
/// Book names compare case-insensitively so `genesis 1` finds `Genesis 1`.
pub fn assigned_book<'a>(day: &'a DailyReading, book: &str, chapter: u32) -> Option<&'a str> {
    let book = book.trim();
    day.chapter_units()
        .into_iter()
        .find(|(_, b, c)| *c == chapter && b.eq_ignore_ascii_case(book))
        .map(|(_, b, _)| b)
}

/// Builds the single-day view for the entry at `index`.
pub fn day_view<S: KeyValueStore>(
    plan: &ReadingPlan,
    nav: &NavigationState,
    progress: &ProgressTracker<S>,
    index: usize,
) -> Option<DayView> {
    let day = plan.at(index)?;
    let selection = nav.active_selection();

    let cards = Slot::ALL
        .iter()
        .filter_map(|slot| {
            let assignment = day.assignment(*slot);
            if !assignment.is_assigned() {
                return None;
            }
            let chapters = if day.is_rest_day {
                Vec::new()
            } else {
                assignment
                    .chapter_units()
                    .into_iter()
                    .map(|chapter| {
                        let id = record_id(&day.id, &assignment.book, chapter);
                        ChapterView {
                            chapter,
                            is_complete: progress.is_complete(&id),
                            is_selected: selection
                                .is_some_and(|s| s.matches(&assignment.book, chapter)),
                            record_id: id,
                        }
                    })
                    .collect()
            };
            Some(CardView {
                title: slot.title().to_string(),
                book: assignment.book.clone(),
                chapters_spec: assignment.chapters.clone(),
                is_note: day.is_rest_day,
                chapters,
            })
        })
        .collect();

    Some(DayView {
        index,
        total: plan.count(),
        id: day.id.clone(),
        label: day.long_label().to_string(),
        is_rest_day: day.is_rest_day,
        cards,
    })
}

/// "Genesis 1-2 • Psalms 1 • Matthew 1", skipping unassigned slots.
pub fn day_summary(day: &DailyReading) -> String {
    if day.is_rest_day {
        return "Sunday - Rest & Worship".to_string();
    }
    Slot::ALL
        .iter()
        .map(|slot| day.assignment(*slot))
        .filter(|a| a.is_assigned())
        .map(|a| format!("{} {}", a.book, a.chapters).trim_end().to_string())
        .collect::<Vec<_>>()
        .join(" • ")
}

pub fn schedule_lines<S: KeyValueStore>(
    plan: &ReadingPlan,
    nav: &NavigationState,
    progress: &ProgressTracker<S>,
) -> Vec<ScheduleLine> {
    plan.iter()
        .enumerate()
        .map(|(index, day)| {
            let ids = day_record_ids(day);
            ScheduleLine {
                index,
                id: day.id.clone(),
                label: day.display_label().to_string(),
                summary: day_summary(day),
                is_rest_day: day.is_rest_day,
                is_current: index == nav.current_index(),
                completed: progress.completed_count(ids.iter().map(String::as_str)),
                total: ids.len(),
            }
        })
        .collect()
}
