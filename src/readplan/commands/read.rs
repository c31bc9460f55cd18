use crate::commands::{CmdMessage, CmdResult, ReaderView};
use crate::error::{ReadplanError, Result};
use crate::navigation::NavigationState;
use crate::plan::ReadingPlan;
use crate::reference::resolve_with;

use super::helpers::assigned_book;

/// Queues `book chapter` for reading and resolves where to read it.
///
/// Any chapter may be opened. When it belongs to the current day the day's spelling
/// of the book is used so the selection lines up with its card.
pub fn select(
    plan: &ReadingPlan,
    nav: &mut NavigationState,
    reader_url: &str,
    book: &str,
    chapter: u32,
) -> Result<CmdResult> {
    let book = book.trim();
    if book.is_empty() {
        return Err(ReadplanError::Api("A book name is required".to_string()));
    }

    let book = plan
        .at(nav.current_index())
        .and_then(|day| assigned_book(day, book, chapter))
        .unwrap_or(book)
        .to_string();

    let url = resolve_with(reader_url, &book, chapter);
    nav.select_chapter(book.clone(), chapter);

    Ok(CmdResult::default().with_reader(ReaderView { book, chapter, url }))
}

pub fn dismiss(nav: &mut NavigationState) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match nav.active_selection() {
        Some(selection) => {
            result.add_message(CmdMessage::info(format!("Closed {}", selection)));
            nav.dismiss_selection();
        }
        None => result.add_message(CmdMessage::info("Nothing open")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::sample_plan;
    use crate::reference::DEFAULT_READER_URL;

    #[test]
    fn select_resolves_locator_and_sets_selection() {
        let plan = sample_plan();
        let mut nav = NavigationState::start(&plan, "2026-01-01");

        let result = select(&plan, &mut nav, DEFAULT_READER_URL, "genesis", 1).unwrap();
        let reader = result.reader.unwrap();
        assert_eq!(reader.book, "Genesis");
        assert_eq!(reader.url, "https://read.lsbible.org/?q=Genesis+1");
        assert!(nav.active_selection().unwrap().matches("Genesis", 1));
    }

    #[test]
    fn select_replaces_previous_selection() {
        let plan = sample_plan();
        let mut nav = NavigationState::start(&plan, "2026-01-01");
        select(&plan, &mut nav, DEFAULT_READER_URL, "Genesis", 1).unwrap();
        select(&plan, &mut nav, DEFAULT_READER_URL, "1 John", 3).unwrap();

        let selection = nav.active_selection().unwrap();
        assert!(selection.matches("1 John", 3));
        assert!(!selection.matches("Genesis", 1));
    }

    #[test]
    fn custom_reader_url() {
        let plan = sample_plan();
        let mut nav = NavigationState::start(&plan, "2026-01-01");
        let result = select(&plan, &mut nav, "https://example.org/", "Psalms", 1).unwrap();
        assert_eq!(result.reader.unwrap().url, "https://example.org/?q=Psalms+1");
    }

    #[test]
    fn empty_book_is_an_error() {
        let plan = sample_plan();
        let mut nav = NavigationState::start(&plan, "2026-01-01");
        assert!(select(&plan, &mut nav, DEFAULT_READER_URL, "  ", 1).is_err());
        assert!(nav.active_selection().is_none());
    }

    #[test]
    fn dismiss_clears_selection() {
        let plan = sample_plan();
        let mut nav = NavigationState::start(&plan, "2026-01-01");
        select(&plan, &mut nav, DEFAULT_READER_URL, "Genesis", 2).unwrap();

        let result = dismiss(&mut nav).unwrap();
        assert_eq!(result.messages[0].content, "Closed Genesis 2");
        assert!(nav.active_selection().is_none());
    }
}
