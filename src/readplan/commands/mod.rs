//! # Command Layer
//!
//! One module per user action. Commands take the session slices they need as plain
//! arguments, mutate them according to the navigation / progress / preference rules,
//! and describe what should be shown in a [`CmdResult`]. They never print.

use crate::config::ReadplanConfig;
use crate::model::ThemePreference;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod day;
pub mod helpers;
pub mod mark;
pub mod progress;
pub mod read;
pub mod schedule;
pub mod theme;

#[derive(Debug, Clone)]
pub struct ReadplanPaths {
    pub data_dir: PathBuf,
}

impl ReadplanPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One chapter line inside an assignment card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterView {
    pub chapter: u32,
    pub record_id: String,
    pub is_complete: bool,
    pub is_selected: bool,
}

/// One of the three assignment cards of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub book: String,
    pub chapters_spec: String,
    /// Rest days show the book text as a note instead of chapter lines.
    pub is_note: bool,
    pub chapters: Vec<ChapterView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub index: usize,
    pub total: usize,
    pub id: String,
    pub label: String,
    pub is_rest_day: bool,
    pub cards: Vec<CardView>,
}

impl DayView {
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn chapter(&self, book: &str, chapter: u32) -> Option<&ChapterView> {
        self.cards
            .iter()
            .filter(|card| card.book == book)
            .flat_map(|card| card.chapters.iter())
            .find(|c| c.chapter == chapter)
    }
}

/// One row of the full-schedule view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleLine {
    pub index: usize,
    pub id: String,
    pub label: String,
    pub summary: String,
    pub is_rest_day: bool,
    pub is_current: bool,
    pub completed: usize,
    pub total: usize,
}

/// The chapter queued for reading and where to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReaderView {
    pub book: String,
    pub chapter: u32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub day_id: String,
    pub day_label: String,
    pub day_completed: usize,
    pub day_total: usize,
    pub plan_completed: usize,
    pub plan_total: usize,
    pub days_finished: usize,
    pub days_with_work: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub day: Option<DayView>,
    pub schedule: Vec<ScheduleLine>,
    pub reader: Option<ReaderView>,
    pub progress: Option<ProgressReport>,
    pub theme: Option<ThemePreference>,
    pub config: Option<ReadplanConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_day(mut self, day: DayView) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_schedule(mut self, schedule: Vec<ScheduleLine>) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_reader(mut self, reader: ReaderView) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn with_progress(mut self, progress: ProgressReport) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_theme(mut self, theme: ThemePreference) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: ReadplanConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
