//! # CLI Templates
//!
//! Every view the CLI prints is a minijinja template kept in `templates/*.tmp` and
//! compiled into the binary here. Keeping them as files makes them easy to edit and
//! diff on their own.
//!
//! Conventions:
//!
//! 1. Block tags sit on their own line. The renderer strips those lines entirely, so
//!    a template reads like the output it produces.
//! 2. Templates name styles, never colors. See `styles::names`.
//! 3. Anything needing logic (which style a line gets, widths, counters) is worked
//!    out in `render.rs` and handed over as plain fields.

pub const DAY_TEMPLATE: &str = include_str!("templates/day.tmp");
pub const SCHEDULE_TEMPLATE: &str = include_str!("templates/schedule.tmp");
pub const READER_TEMPLATE: &str = include_str!("templates/reader.tmp");
pub const PROGRESS_TEMPLATE: &str = include_str!("templates/progress.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const ABOUT_TEMPLATE: &str = include_str!("templates/about.tmp");
pub const SHELL_HELP_TEMPLATE: &str = include_str!("templates/shell_help.tmp");

/// Name and source of every template, for registering with a renderer.
pub const ALL: [(&str, &str); 8] = [
    ("day", DAY_TEMPLATE),
    ("schedule", SCHEDULE_TEMPLATE),
    ("reader", READER_TEMPLATE),
    ("progress", PROGRESS_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("text_list", TEXT_LIST_TEMPLATE),
    ("about", ABOUT_TEMPLATE),
    ("shell_help", SHELL_HELP_TEMPLATE),
];
