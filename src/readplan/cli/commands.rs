//! # CLI Layer
//!
//! This module is **one possible UI client** for readplan. It is not the application
//! itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin for the shell)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Launches the browser
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! Every one-shot command starts a fresh session on today's reading, so `mark` and
//! `progress` act on today unless `--date` moves the session first.

use super::render::Painter;
use super::setup::{
    get_version, print_grouped_help, print_help_for_command, print_subcommand_help, Cli,
    Commands, MiscCommands, ProgressCommands, ReadingCommands, ThemeArg,
};
use super::shell::{parse_reference, run_shell};
use clap::Parser;
use readplan::api::{CmdMessage, CmdResult, ConfigAction, ThemeAction};
use readplan::error::{ReadplanError, Result};
use readplan::init::{initialize, InitOptions, ReadplanContext};
use readplan::logging::{init_logging, LogConfig};
use readplan::model::ThemePreference;
use readplan::preferences::ambient_theme;
use tracing::{debug, warn};

struct AppContext {
    ctx: ReadplanContext,
    painter: Painter,
    use_color: bool,
}

impl AppContext {
    fn print(&self, result: &CmdResult) {
        print!("{}", self.painter.result(result));
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig::from_verbosity(cli.verbose).with_ansi(!cli.no_color));

    if cli.no_color {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    // Help never needs a data directory
    if cli.help {
        print_subcommand_help(&cli.command);
        return Ok(());
    }
    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.as_deref());
    }

    let mut app = init_context(&cli)?;

    match cli.command {
        Some(Commands::Reading(cmd)) => match cmd {
            ReadingCommands::Today => handle_today(&mut app),
            ReadingCommands::Day { target } => handle_day(&mut app, &target),
            ReadingCommands::Next => handle_step(&mut app, true),
            ReadingCommands::Prev => handle_step(&mut app, false),
            ReadingCommands::Schedule => handle_schedule(&mut app),
        },
        Some(Commands::Progress(cmd)) => match cmd {
            ProgressCommands::Mark { reference, date } => {
                handle_mark(&mut app, &reference, date.as_deref())
            }
            ProgressCommands::Read { reference, open } => handle_read(&mut app, &reference, open),
            ProgressCommands::Progress { date } => handle_progress(&mut app, date.as_deref()),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Theme { choice } => handle_theme(&mut app, choice),
            MiscCommands::Config { key, value } => handle_config(&mut app, key, value),
            MiscCommands::About => handle_about(&app),
            MiscCommands::Shell => handle_shell(&mut app),
            MiscCommands::Help { command } => handle_help(command.as_deref()),
        },
        None => handle_today(&mut app),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(InitOptions {
        data_dir: cli.data_dir.clone(),
        today: cli.today,
        ambient: ambient_theme,
    })?;
    debug!(today = %ctx.today, "session started");

    let use_color = !cli.no_color && console::colors_enabled();
    let painter = Painter::new(ctx.api.current_theme(), use_color)?;

    Ok(AppContext {
        ctx,
        painter,
        use_color,
    })
}

fn reference_arg(words: &[String]) -> Result<(String, u32)> {
    parse_reference(words).map_err(ReadplanError::Api)
}

fn handle_today(app: &mut AppContext) -> Result<()> {
    let result = app.ctx.api.current_day()?;
    app.print(&result);
    Ok(())
}

fn handle_day(app: &mut AppContext, target: &str) -> Result<()> {
    let result = app.ctx.api.select_day(target)?;
    app.print(&result);
    Ok(())
}

fn handle_step(app: &mut AppContext, forward: bool) -> Result<()> {
    let result = if forward {
        app.ctx.api.next_day()?
    } else {
        app.ctx.api.previous_day()?
    };
    app.print(&result);
    Ok(())
}

fn handle_schedule(app: &mut AppContext) -> Result<()> {
    let result = app.ctx.api.schedule()?;
    app.print(&result);
    Ok(())
}

fn handle_mark(app: &mut AppContext, reference: &[String], date: Option<&str>) -> Result<()> {
    let (book, chapter) = reference_arg(reference)?;
    let result = app.ctx.api.mark(&book, chapter, date)?;
    app.print(&result);
    Ok(())
}

fn handle_read(app: &mut AppContext, reference: &[String], open: bool) -> Result<()> {
    let (book, chapter) = reference_arg(reference)?;
    let mut result = app.ctx.api.read(&book, chapter)?;

    if let Some(reader) = result.reader.clone() {
        let hint = if open { "" } else { "Use --open to read it in the browser" };
        print!("{}", app.painter.reader(&reader, hint));

        if open {
            if let Err(e) = open::that(&reader.url) {
                warn!(error = %e, url = %reader.url, "could not launch browser");
                result.add_message(CmdMessage::warning(format!(
                    "Could not open the browser: {}",
                    e
                )));
            }
        }
    }
    app.print(&result);
    Ok(())
}

fn handle_progress(app: &mut AppContext, date: Option<&str>) -> Result<()> {
    let result = app.ctx.api.progress(date)?;
    app.print(&result);
    Ok(())
}

fn handle_theme(app: &mut AppContext, choice: Option<ThemeArg>) -> Result<()> {
    let action = match choice {
        None => ThemeAction::Show,
        Some(ThemeArg::Light) => ThemeAction::Set(ThemePreference::Light),
        Some(ThemeArg::Dark) => ThemeAction::Set(ThemePreference::Dark),
        Some(ThemeArg::Toggle) => ThemeAction::Toggle,
    };
    let mut result = app.ctx.api.theme(action)?;

    if let Some(theme) = result.theme {
        app.painter = Painter::new(theme, app.use_color)?;
        if result.messages.is_empty() {
            result.add_message(CmdMessage::info(format!("Theme: {}", theme)));
        }
    }
    app.print(&result);
    Ok(())
}

fn handle_config(app: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let listing = matches!(action, ConfigAction::ShowAll);
    let result = app.ctx.api.config(action)?;

    if listing {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", app.painter.text_list(&lines, "No configuration"));
        }
    }
    app.print(&result);
    Ok(())
}

fn handle_about(app: &AppContext) -> Result<()> {
    print!("{}", app.painter.about(get_version()));
    Ok(())
}

fn handle_shell(app: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_shell(
        &mut app.ctx.api,
        stdin.lock(),
        &mut stdout,
        app.use_color,
        get_version(),
    )
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(name) => print_help_for_command(name),
        None => print_grouped_help(),
    }
    Ok(())
}
