//! Styles for the readplan CLI.
//!
//! Templates only ever name what a piece of text *is* (a book, a finished chapter, the
//! day's date). This module decides what that looks like, once for light terminals
//! and once for dark ones. Both variants must define the same names; the test at the
//! bottom keeps them in step.
//!
//! The palette follows the reading-plan look: warm amber for the verse banner and
//! rest-day notes, indigo for the selected chapter, green for finished readings.

use console::Style;
use lamplight::{rgb_to_ansi256, ColorMode, Theme, ThemePair};
use once_cell::sync::Lazy;
use readplan::model::ThemePreference;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const DATE: &str = "date";
    pub const VERSE: &str = "verse";
    pub const VERSE_REF: &str = "verse-ref";
    pub const CARD_TITLE: &str = "card-title";
    pub const BOOK: &str = "book";
    pub const NOTE: &str = "note";
    pub const CHAPTER: &str = "chapter";
    pub const SELECTED: &str = "selected";
    pub const DONE: &str = "done";
    pub const PENDING: &str = "pending";
    pub const CURRENT: &str = "current";
    pub const REST: &str = "rest";
    pub const LINK: &str = "link";
    pub const HEADING: &str = "heading";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub static READPLAN_THEMES: Lazy<ThemePair> =
    Lazy::new(|| ThemePair::new(build_light_theme(), build_dark_theme()));

pub fn color_mode(preference: ThemePreference) -> ColorMode {
    match preference {
        ThemePreference::Light => ColorMode::Light,
        ThemePreference::Dark => ColorMode::Dark,
    }
}

pub fn theme_for(preference: ThemePreference) -> Theme {
    READPLAN_THEMES.pick(color_mode(preference)).clone()
}

fn build_light_theme() -> Theme {
    let regular = Style::new().black();
    let muted = Style::new().color256(rgb_to_ansi256((100, 116, 139)));
    let faint = Style::new().color256(rgb_to_ansi256((203, 213, 225)));
    let amber = Style::new().color256(rgb_to_ansi256((217, 119, 6)));
    let indigo = Style::new().color256(rgb_to_ansi256((67, 56, 202)));
    let green = Style::new().color256(rgb_to_ansi256((22, 163, 74)));

    Theme::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint)
        .add(names::DATE, regular.clone().bold())
        .add(names::VERSE, amber.clone().italic())
        .add(names::VERSE_REF, amber.clone().bold())
        .add(names::CARD_TITLE, indigo.clone().bold())
        .add(names::BOOK, regular.clone().bold())
        .add(names::NOTE, amber.clone())
        .add(names::CHAPTER, regular)
        .add(
            names::SELECTED,
            Style::new()
                .white()
                .on_color256(rgb_to_ansi256((79, 70, 229)))
                .bold(),
        )
        .add(names::DONE, green.clone())
        .add(names::PENDING, muted.clone())
        .add(names::CURRENT, indigo.clone().bold())
        .add(names::REST, amber.clone().bold())
        .add(names::LINK, indigo.underlined())
        .add(names::HEADING, Style::new().black().bold().underlined())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, amber.bold())
        .add(names::SUCCESS, green)
        .add(names::INFO, muted)
}

fn build_dark_theme() -> Theme {
    let regular = Style::new().white();
    let muted = Style::new().color256(rgb_to_ansi256((148, 163, 184)));
    let faint = Style::new().color256(rgb_to_ansi256((71, 85, 105)));
    let amber = Style::new().color256(rgb_to_ansi256((251, 191, 36)));
    let indigo = Style::new().color256(rgb_to_ansi256((165, 180, 252)));
    let green = Style::new().color256(rgb_to_ansi256((74, 222, 128)));

    Theme::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint)
        .add(names::DATE, regular.clone().bold())
        .add(names::VERSE, amber.clone().italic())
        .add(names::VERSE_REF, amber.clone().bold())
        .add(names::CARD_TITLE, indigo.clone().bold())
        .add(names::BOOK, regular.clone().bold())
        .add(names::NOTE, amber.clone())
        .add(names::CHAPTER, regular)
        .add(
            names::SELECTED,
            Style::new()
                .black()
                .on_color256(rgb_to_ansi256((165, 180, 252)))
                .bold(),
        )
        .add(names::DONE, green.clone())
        .add(names::PENDING, muted.clone())
        .add(names::CURRENT, indigo.clone().bold())
        .add(names::REST, amber.clone().bold())
        .add(names::LINK, indigo.underlined())
        .add(names::HEADING, Style::new().white().bold().underlined())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, amber.bold())
        .add(names::SUCCESS, green)
        .add(names::INFO, muted)
}
