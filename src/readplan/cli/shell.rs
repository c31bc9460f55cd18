//! Interactive browsing session.
//!
//! One-shot commands start from today every time. The shell keeps a single session
//! open so day navigation, the schedule view and the chapter selection carry over
//! from one line to the next, the way they do in a reading app.

use super::render::Painter;
use readplan::api::{CmdMessage, CmdResult, ReadplanApi, ThemeAction};
use readplan::error::Result;
use readplan::model::ThemePreference;
use readplan::store::KeyValueStore;
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "readplan> ";

/// Usage and description of every shell command, as shown by `help`.
pub const SHELL_COMMANDS: [(&str, &str); 13] = [
    ("next, n", "Go to the next day"),
    ("prev, p", "Go to the previous day"),
    ("today", "Show the current day"),
    ("day <DATE|N>", "Jump to a date or plan position"),
    ("view, v", "Switch between the day and the full schedule"),
    ("mark <BOOK> <CH>", "Toggle a chapter on the current day"),
    ("read <BOOK> <CH>", "Select a chapter and show where to read it"),
    ("close", "Clear the selected chapter"),
    ("progress", "Chapter counts for the day and the plan"),
    ("theme [light|dark]", "Show, set or toggle the theme"),
    ("about", "About the church and the plan"),
    ("help, ?", "Show this list"),
    ("quit, q", "Leave the shell"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Next,
    Previous,
    Today,
    Day(String),
    ToggleView,
    Mark(String, u32),
    Read(String, u32),
    Close,
    Progress,
    Theme(ThemeAction),
    About,
    Help,
    Quit,
}

/// Splits `Genesis 3` or `1 John 2` into book and chapter. The last word is the
/// chapter; everything before it is the book.
pub fn parse_reference<T: AsRef<str>>(words: &[T]) -> std::result::Result<(String, u32), String> {
    let (last, book) = match words.split_last() {
        Some((last, book)) if !book.is_empty() => (last.as_ref(), book),
        _ => return Err("expected a book and a chapter, e.g. 'Genesis 3'".to_string()),
    };
    let chapter: u32 = last
        .parse()
        .map_err(|_| format!("'{}' is not a chapter number", last))?;
    let book = book
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    Ok((book, chapter))
}

/// Parses one input line. Blank lines are `Ok(None)`.
pub fn parse_shell_line(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((head, rest)) = words.split_first() else {
        return Ok(None);
    };

    let cmd = match head.to_ascii_lowercase().as_str() {
        "next" | "n" => ShellCommand::Next,
        "prev" | "p" => ShellCommand::Previous,
        "today" | "t" => ShellCommand::Today,
        "day" | "d" => match rest {
            [target] => ShellCommand::Day(target.to_string()),
            _ => return Err("usage: day <DATE|N>".to_string()),
        },
        "view" | "v" | "schedule" | "s" => ShellCommand::ToggleView,
        "mark" | "m" => {
            let (book, chapter) = parse_reference(rest)?;
            ShellCommand::Mark(book, chapter)
        }
        "read" | "r" => {
            let (book, chapter) = parse_reference(rest)?;
            ShellCommand::Read(book, chapter)
        }
        "close" | "c" => ShellCommand::Close,
        "progress" => ShellCommand::Progress,
        "theme" => match rest {
            [] => ShellCommand::Theme(ThemeAction::Show),
            ["toggle"] => ShellCommand::Theme(ThemeAction::Toggle),
            [name] => ShellCommand::Theme(ThemeAction::Set(name.parse::<ThemePreference>()?)),
            _ => return Err("usage: theme [light|dark|toggle]".to_string()),
        },
        "about" => ShellCommand::About,
        "help" | "?" | "h" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command: {} (try 'help')", other)),
    };
    Ok(Some(cmd))
}

/// Runs the read-eval-print loop until `quit` or end of input.
pub fn run_shell<S, R, W>(
    api: &mut ReadplanApi<S>,
    input: R,
    out: &mut W,
    use_color: bool,
    version: &str,
) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    let mut painter = Painter::new(api.current_theme(), use_color)?;
    write!(out, "{}", painter.result(&api.current_day()?))?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let cmd = match parse_shell_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                write!(out, "{}", painter.messages(&[CmdMessage::error(msg)]))?;
                continue;
            }
        };
        debug!(?cmd, "shell command");

        let result = match cmd {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                write!(out, "{}", painter.shell_help(&SHELL_COMMANDS))?;
                continue;
            }
            ShellCommand::About => {
                write!(out, "{}", painter.about(version))?;
                continue;
            }
            ShellCommand::Next => api.next_day(),
            ShellCommand::Previous => api.previous_day(),
            ShellCommand::Today => api.current_day(),
            ShellCommand::Day(target) => api.select_day(&target),
            ShellCommand::ToggleView => api.toggle_view(),
            ShellCommand::Mark(book, chapter) => api.mark(&book, chapter, None),
            ShellCommand::Read(book, chapter) => api.read(&book, chapter),
            ShellCommand::Close => api.dismiss(),
            ShellCommand::Progress => api.progress(None),
            ShellCommand::Theme(action) => api.theme(action),
        };

        match result {
            Ok(result) => {
                if result.theme.is_some() {
                    painter = Painter::new(api.current_theme(), use_color)?;
                }
                write!(out, "{}", render_shell_result(&painter, &result))?;
            }
            Err(e) => write!(
                out,
                "{}",
                painter.messages(&[CmdMessage::error(e.to_string())])
            )?,
        }
    }
    Ok(())
}

fn render_shell_result(painter: &Painter, result: &CmdResult) -> String {
    let mut out = String::new();
    if let Some(reader) = &result.reader {
        out.push_str(&painter.reader(reader, "Type 'close' when you are done"));
    }
    if let Some(theme) = result.theme {
        if result.messages.is_empty() {
            out.push_str(&painter.messages(&[CmdMessage::info(format!("Theme: {}", theme))]));
        }
    }
    out.push_str(&painter.result(result));
    out
}
