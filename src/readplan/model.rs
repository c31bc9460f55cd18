//! Core data types: plan entries, their assignments, and the small value types that
//! the session slices (navigation, progress, preferences) trade in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One subject area's reading for a day: a book label and a compact chapter range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub book: String,
    /// Compact range notation ("1-2", "3", "1-2,4"). Empty means no assignment.
    #[serde(default)]
    pub chapters: String,
}

impl Assignment {
    pub fn new(book: impl Into<String>, chapters: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapters: chapters.into(),
        }
    }

    /// Assignments with no book are neither rendered nor tracked.
    pub fn is_assigned(&self) -> bool {
        !self.book.trim().is_empty()
    }

    pub fn chapter_units(&self) -> Vec<u32> {
        crate::chapters::parse_chapters(&self.chapters)
    }
}

/// The three assignment slots every plan entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    OldTestament,
    Wisdom,
    NewTestament,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::OldTestament, Slot::Wisdom, Slot::NewTestament];

    pub fn title(&self) -> &'static str {
        match self {
            Slot::OldTestament => "Old Testament",
            Slot::Wisdom => "Wisdom",
            Slot::NewTestament => "New Testament",
        }
    }
}

/// A single calendar day of the plan, as found in the month datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReading {
    /// ISO calendar date (`YYYY-MM-DD`); the lookup key for the entry.
    pub id: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub date_display: String,
    #[serde(default)]
    pub full_date: String,
    #[serde(default)]
    pub ot: Assignment,
    #[serde(default)]
    pub wisdom: Assignment,
    #[serde(default)]
    pub nt: Assignment,
    #[serde(default, rename = "isSunday", skip_serializing_if = "std::ops::Not::not")]
    pub is_rest_day: bool,
}

impl DailyReading {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            month: String::new(),
            day: 0,
            date_display: String::new(),
            full_date: String::new(),
            ot: Assignment::default(),
            wisdom: Assignment::default(),
            nt: Assignment::default(),
            is_rest_day: false,
        }
    }

    pub fn with(mut self, slot: Slot, assignment: Assignment) -> Self {
        match slot {
            Slot::OldTestament => self.ot = assignment,
            Slot::Wisdom => self.wisdom = assignment,
            Slot::NewTestament => self.nt = assignment,
        }
        self
    }

    pub fn assignment(&self, slot: Slot) -> &Assignment {
        match slot {
            Slot::OldTestament => &self.ot,
            Slot::Wisdom => &self.wisdom,
            Slot::NewTestament => &self.nt,
        }
    }

    /// Long label, falling back to the short one when the dataset leaves it blank.
    pub fn long_label(&self) -> &str {
        if self.full_date.is_empty() {
            self.display_label()
        } else {
            &self.full_date
        }
    }

    pub fn display_label(&self) -> &str {
        if self.date_display.is_empty() {
            &self.id
        } else {
            &self.date_display
        }
    }

    /// Every trackable (book, chapter) pair of the day, in slot order.
    ///
    /// Rest days and unassigned slots contribute nothing.
    pub fn chapter_units(&self) -> Vec<(Slot, &str, u32)> {
        if self.is_rest_day {
            return Vec::new();
        }
        Slot::ALL
            .iter()
            .map(|slot| (*slot, self.assignment(*slot)))
            .filter(|(_, a)| a.is_assigned())
            .flat_map(|(slot, a)| {
                a.chapter_units()
                    .into_iter()
                    .map(move |chapter| (slot, a.book.as_str(), chapter))
            })
            .collect()
    }

    /// Whether `(book, chapter)` is part of this day's chapter work.
    pub fn assigns(&self, book: &str, chapter: u32) -> bool {
        self.chapter_units()
            .iter()
            .any(|(_, b, c)| *b == book && *c == chapter)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    SingleDay,
    FullSchedule,
}

impl ViewMode {
    pub fn flipped(self) -> Self {
        match self {
            ViewMode::SingleDay => ViewMode::FullSchedule,
            ViewMode::FullSchedule => ViewMode::SingleDay,
        }
    }
}

/// The chapter currently queued for external reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSelection {
    pub book: String,
    pub chapter: u32,
}

impl ActiveSelection {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
        }
    }

    pub fn matches(&self, book: &str, chapter: u32) -> bool {
        self.book == book && self.chapter == chapter
    }
}

impl fmt::Display for ActiveSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Derives the completion record identifier for one chapter of one day's assignment.
///
/// Components are joined with `|`; backslashes and pipes inside the day or book are
/// escaped, so two different triples can never produce the same key.
pub fn record_id(day_id: &str, book: &str, chapter: u32) -> String {
    format!("{}|{}|{}", escape_component(day_id), escape_component(book), chapter)
}

fn escape_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '\\' || c == '|' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
