//! # Rendering Module
//!
//! Turns command results into terminal text using `lamplight` templates.
//!
//! Layout decisions that need logic stay in Rust: which mark a chapter gets, which
//! style a schedule line uses, column widths, counters. Templates receive those as
//! plain fields and only place them.

use super::styles::{names, theme_for};
use super::templates::ALL;
use lamplight::Renderer;
use readplan::api::{CmdMessage, CmdResult, MessageLevel};
use readplan::commands::{DayView, ProgressReport, ReaderView, ScheduleLine};
use readplan::error::{ReadplanError, Result};
use readplan::model::ThemePreference;
use serde::Serialize;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

pub const VERSE: [&str; 2] = ["\"Your word is a lamp to my feet", " And a light to my path.\""];
pub const VERSE_REF: &str = "PSALM 119:105";
pub const RULE_WIDTH: usize = 40;
pub const CHECK_MARK: &str = "✓";
pub const OPEN_MARK: &str = "○";
pub const CURRENT_MARKER: &str = "▸";
pub const REST_NOTE: &str = "A day of rest and worship. No chapters to read.";

#[derive(Serialize)]
struct ChapterLine {
    mark: &'static str,
    mark_style: &'static str,
    label: String,
    label_style: &'static str,
}

#[derive(Serialize)]
struct CardData {
    title: String,
    book: String,
    chapters_spec: String,
    is_note: bool,
    chapters: Vec<ChapterLine>,
}

#[derive(Serialize)]
struct DayData {
    verse: [&'static str; 2],
    verse_ref: &'static str,
    rule_width: usize,
    label: String,
    counter: String,
    cards: Vec<CardData>,
    rest_note: &'static str,
}

#[derive(Serialize)]
struct ScheduleLineData {
    marker: &'static str,
    label: String,
    label_style: &'static str,
    summary: String,
    summary_style: &'static str,
    progress: String,
}

#[derive(Serialize)]
struct ScheduleData {
    title: String,
    label_width: usize,
    lines: Vec<ScheduleLineData>,
}

#[derive(Serialize)]
struct ReaderData {
    selection: String,
    url: String,
    hint: String,
}

#[derive(Serialize)]
struct ProgressData {
    day_label: String,
    label_width: usize,
    day_count: String,
    day_style: &'static str,
    plan_count: String,
    days_count: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [String],
    empty_message: &'a str,
}

#[derive(Serialize)]
struct AboutData {
    church: &'static str,
    mission: &'static str,
    address: &'static str,
    services: &'static str,
    plan_title: &'static str,
    plan_lines: [&'static str; 2],
    version: String,
}

#[derive(Serialize)]
struct HelpEntry<'a> {
    usage: &'a str,
    about: &'a str,
}

#[derive(Serialize)]
struct ShellHelpData<'a> {
    usage_width: usize,
    entries: Vec<HelpEntry<'a>>,
}

/// Renders every CLI view with the templates and the theme chosen by the user.
pub struct Painter {
    renderer: Renderer,
}

impl Painter {
    pub fn new(theme: ThemePreference, use_color: bool) -> Result<Self> {
        let mut renderer = Renderer::with_color(theme_for(theme), use_color);
        for (name, source) in ALL {
            renderer
                .add_template(name, source)
                .map_err(|e| ReadplanError::Api(format!("template {}: {}", name, e)))?;
        }
        Ok(Self { renderer })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T, fallback: impl FnOnce() -> String) -> String {
        self.renderer.render(name, data).unwrap_or_else(|e| {
            debug!(template = name, error = %e, "render failed, using plain fallback");
            fallback()
        })
    }

    /// Everything a command result carries except the reader, which needs a hint
    /// that depends on where it is shown.
    pub fn result(&self, result: &CmdResult) -> String {
        let mut out = String::new();
        if let Some(day) = &result.day {
            out.push_str(&self.day(day));
        }
        if !result.schedule.is_empty() {
            out.push_str(&self.schedule(&result.schedule));
        }
        if let Some(progress) = &result.progress {
            out.push_str(&self.progress(progress));
        }
        if !out.is_empty() && !result.messages.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.messages(&result.messages));
        out
    }

    pub fn day(&self, view: &DayView) -> String {
        let cards = view
            .cards
            .iter()
            .map(|card| CardData {
                title: card.title.clone(),
                book: card.book.clone(),
                chapters_spec: card.chapters_spec.clone(),
                is_note: card.is_note,
                chapters: card
                    .chapters
                    .iter()
                    .map(|c| ChapterLine {
                        mark: if c.is_complete { CHECK_MARK } else { OPEN_MARK },
                        mark_style: if c.is_complete {
                            names::DONE
                        } else {
                            names::PENDING
                        },
                        label: format!("Chapter {}", c.chapter),
                        label_style: if c.is_selected {
                            names::SELECTED
                        } else {
                            names::CHAPTER
                        },
                    })
                    .collect(),
            })
            .collect();

        let data = DayData {
            verse: VERSE,
            verse_ref: VERSE_REF,
            rule_width: RULE_WIDTH,
            label: view.label.clone(),
            counter: format!("Day {} of {}", view.position(), view.total),
            cards,
            rest_note: if view.is_rest_day { REST_NOTE } else { "" },
        };
        self.render("day", &data, || format!("{}\n", view.label))
    }

    pub fn schedule(&self, lines: &[ScheduleLine]) -> String {
        let label_width = lines.iter().map(|l| l.label.width()).max().unwrap_or(0);
        let data = ScheduleData {
            title: format!("Reading Schedule ({} days)", lines.len()),
            label_width,
            lines: lines
                .iter()
                .map(|line| ScheduleLineData {
                    marker: if line.is_current { CURRENT_MARKER } else { " " },
                    label: line.label.clone(),
                    label_style: if line.is_current {
                        names::CURRENT
                    } else {
                        names::REGULAR
                    },
                    summary: line.summary.clone(),
                    summary_style: if line.is_rest_day {
                        names::REST
                    } else {
                        names::MUTED
                    },
                    progress: schedule_progress(line),
                })
                .collect(),
        };
        self.render("schedule", &data, || {
            lines
                .iter()
                .map(|l| format!("{}  {}\n", l.label, l.summary))
                .collect()
        })
    }

    pub fn reader(&self, reader: &ReaderView, hint: &str) -> String {
        let data = ReaderData {
            selection: format!(" {} {} ", reader.book, reader.chapter),
            url: reader.url.clone(),
            hint: hint.to_string(),
        };
        self.render("reader", &data, || format!("{}\n", reader.url))
    }

    pub fn progress(&self, report: &ProgressReport) -> String {
        let day_count = if report.day_total == 0 {
            "Rest day".to_string()
        } else {
            format!("{}/{} chapters", report.day_completed, report.day_total)
        };
        let day_done = report.day_total > 0 && report.day_completed == report.day_total;
        let percent = (report.plan_completed * 100)
            .checked_div(report.plan_total)
            .unwrap_or(0);

        let data = ProgressData {
            day_label: report.day_label.clone(),
            label_width: 8,
            day_count,
            day_style: if day_done { names::DONE } else { names::REGULAR },
            plan_count: format!(
                "{}/{} chapters ({}%)",
                report.plan_completed, report.plan_total, percent
            ),
            days_count: format!(
                "{} of {} reading days finished",
                report.days_finished, report.days_with_work
            ),
        };
        self.render("progress", &data, || {
            format!(
                "{}: {}/{}\n",
                report.day_label, report.plan_completed, report.plan_total
            )
        })
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: message_style(&msg.level),
                })
                .collect(),
        };
        self.render("messages", &data, || {
            messages
                .iter()
                .map(|m| format!("{}\n", m.content))
                .collect()
        })
    }

    pub fn text_list(&self, lines: &[String], empty_message: &str) -> String {
        let data = TextListData {
            lines,
            empty_message,
        };
        self.render("text_list", &data, || format!("{}\n", empty_message))
    }

    pub fn about(&self, version: &str) -> String {
        let data = AboutData {
            church: "Unity Bible Church",
            mission: "\"Desire to see God glorified through our worship of Him, building up believers and sharing the Good News of Christ.\"",
            address: "541 College St. Lewiston, ME 04240",
            services: "Sunday School 9am • Worship 10am",
            plan_title: "2026 Reading Plan",
            plan_lines: [
                "Follow along with Unity Bible Church's spiritual growth guide using the Legacy Standard Bible (LSB).",
                "Read daily from the Old Testament, Wisdom Literature, and New Testament.",
            ],
            version: format!("readplan {} • 2026 Spiritual Growth Guide", version),
        };
        self.render("about", &data, || "Unity Bible Church\n".to_string())
    }

    pub fn shell_help(&self, commands: &[(&str, &str)]) -> String {
        let usage_width = commands.iter().map(|(u, _)| u.width()).max().unwrap_or(0) + 2;
        let data = ShellHelpData {
            usage_width,
            entries: commands
                .iter()
                .map(|(usage, about)| HelpEntry { usage, about })
                .collect(),
        };
        self.render("shell_help", &data, || {
            commands
                .iter()
                .map(|(u, a)| format!("{}  {}\n", u, a))
                .collect()
        })
    }
}

fn message_style(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn schedule_progress(line: &ScheduleLine) -> String {
    if line.total == 0 {
        String::new()
    } else if line.completed == line.total {
        format!("  {}", CHECK_MARK)
    } else {
        format!("  ({}/{})", line.completed, line.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readplan::commands::{CardView, ChapterView};

    fn painter() -> Painter {
        Painter::new(ThemePreference::Light, false).unwrap()
    }

    fn genesis_day(selected: Option<u32>) -> DayView {
        DayView {
            index: 0,
            total: 90,
            id: "2026-01-01".into(),
            label: "Thursday, January 1, 2026".into(),
            is_rest_day: false,
            cards: vec![CardView {
                title: "Old Testament".into(),
                book: "Genesis".into(),
                chapters_spec: "1-2".into(),
                is_note: false,
                chapters: vec![
                    ChapterView {
                        chapter: 1,
                        record_id: "2026-01-01|Genesis|1".into(),
                        is_complete: true,
                        is_selected: selected == Some(1),
                    },
                    ChapterView {
                        chapter: 2,
                        record_id: "2026-01-01|Genesis|2".into(),
                        is_complete: false,
                        is_selected: selected == Some(2),
                    },
                ],
            }],
        }
    }

    #[test]
    fn day_shows_banner_date_and_chapters() {
        let out = painter().day(&genesis_day(None));
        assert!(out.contains("Your word is a lamp to my feet"));
        assert!(out.contains("PSALM 119:105"));
        assert!(out.contains("Thursday, January 1, 2026  Day 1 of 90"));
        assert!(out.contains("OLD TESTAMENT"));
        assert!(out.contains("  Genesis 1-2\n"));
        assert!(out.contains("    ✓ Chapter 1\n"));
        assert!(out.contains("    ○ Chapter 2\n"));
        assert!(!out.contains(REST_NOTE));
    }

    #[test]
    fn day_marks_selection_with_color() {
        let painter = Painter::new(ThemePreference::Dark, true).unwrap();
        console::set_colors_enabled(true);
        let out = painter.day(&genesis_day(Some(2)));
        assert!(out.contains("Chapter 2"));
        assert!(out.contains("\x1b["));
    }

    #[test]
    fn rest_day_renders_notes() {
        let view = DayView {
            index: 3,
            total: 90,
            id: "2026-01-04".into(),
            label: "Sunday, January 4, 2026".into(),
            is_rest_day: true,
            cards: vec![CardView {
                title: "Wisdom".into(),
                book: "Sunday School at 9am".into(),
                chapters_spec: String::new(),
                is_note: true,
                chapters: vec![],
            }],
        };
        let out = painter().day(&view);
        assert!(out.contains("  Sunday School at 9am\n"));
        assert!(!out.contains("Chapter"));
        assert!(out.contains(REST_NOTE));
    }

    #[test]
    fn schedule_aligns_and_marks_current() {
        let lines = vec![
            ScheduleLine {
                index: 0,
                id: "2026-01-03".into(),
                label: "Sat, Jan 3".into(),
                summary: "Genesis 5-6 • Psalms 3 • Matthew 3".into(),
                is_rest_day: false,
                is_current: true,
                completed: 1,
                total: 4,
            },
            ScheduleLine {
                index: 1,
                id: "2026-01-04".into(),
                label: "Sun, Jan 4".into(),
                summary: "Sunday - Rest & Worship".into(),
                is_rest_day: true,
                is_current: false,
                completed: 0,
                total: 0,
            },
        ];
        let out = painter().schedule(&lines);
        assert!(out.contains("Reading Schedule (2 days)"));
        assert!(out.contains("▸ Sat, Jan 3  Genesis 5-6 • Psalms 3 • Matthew 3  (1/4)\n"));
        assert!(out.contains("  Sun, Jan 4  Sunday - Rest & Worship\n"));
    }

    #[test]
    fn reader_prints_locator_and_hint() {
        let reader = ReaderView {
            book: "1 John".into(),
            chapter: 3,
            url: "https://read.lsbible.org/?q=1%20John+3".into(),
        };
        let out = painter().reader(&reader, "use --open");
        assert!(out.contains(" 1 John 3   https://read.lsbible.org/?q=1%20John+3"));
        assert!(out.contains("use --open"));

        let out = painter().reader(&reader, "");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn progress_report_lines() {
        let report = ProgressReport {
            day_id: "2026-01-01".into(),
            day_label: "Thu, Jan 1".into(),
            day_completed: 4,
            day_total: 4,
            plan_completed: 6,
            plan_total: 12,
            days_finished: 1,
            days_with_work: 3,
        };
        let out = painter().progress(&report);
        assert!(out.contains("Today   4/4 chapters"));
        assert!(out.contains("Plan    6/12 chapters (50%)"));
        assert!(out.contains("1 of 3 reading days finished"));
    }

    #[test]
    fn messages_one_per_line() {
        let out = painter().messages(&[
            CmdMessage::success("Genesis 1 marked as read"),
            CmdMessage::warning("Progress could not be saved"),
        ]);
        assert_eq!(out, "Genesis 1 marked as read\nProgress could not be saved\n");
        assert_eq!(painter().messages(&[]), "");
    }

    #[test]
    fn text_list_empty_message() {
        assert_eq!(painter().text_list(&[], "nothing"), "nothing\n");
        let lines = vec!["a = 1".to_string()];
        assert_eq!(painter().text_list(&lines, "nothing"), "a = 1\n");
    }

    #[test]
    fn about_names_the_church() {
        let out = painter().about("0.3.2");
        assert!(out.contains("Unity Bible Church"));
        assert!(out.contains("541 College St. Lewiston, ME 04240"));
        assert!(out.contains("readplan 0.3.2"));
    }

    #[test]
    fn result_joins_sections() {
        let mut result = CmdResult::default().with_day(genesis_day(None));
        result.add_message(CmdMessage::info("Already at the first day of the plan"));
        let out = painter().result(&result);
        assert!(out.contains("Chapter 1"));
        assert!(out.ends_with("Already at the first day of the plan\n"));
    }
}
