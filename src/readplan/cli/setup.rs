use chrono::NaiveDate;
use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2026-01-15 14:30" for dev builds
pub fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("expected a date like 2026-01-05, got '{}'", value))
}

#[derive(Parser, Debug)]
#[command(
    name = "readplan",
    bin_name = "readplan",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Daily Bible reading plan with chapter progress tracking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date, help_heading = "Options")]
    pub today: Option<NaiveDate>,

    /// Store progress and settings here instead of the default data directory
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Reading,
    Progress,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Reading => "Reading Commands:",
            CommandGroup::Progress => "Progress Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "today" | "day" | "next" | "prev" | "schedule" => Some(CommandGroup::Reading),
            "mark" | "read" | "progress" => Some(CommandGroup::Progress),
            "theme" | "config" | "about" | "shell" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Reading,
            CommandGroup::Progress,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("readplan {version}\n"));
    output.push_str("Daily Bible reading plan with chapter progress tracking\n");
    output.push('\n');
    output.push_str("Usage: readplan [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --today <DATE>    Pretend today is this date (YYYY-MM-DD)\n");
    output.push_str("      --data-dir <DIR>  Use another data directory\n");
    output.push_str("  -v, --verbose         More log output on stderr\n");
    output.push_str("      --no-color        Disable colored output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Clap's own help for one subcommand, or `None` for unknown names.
pub fn help_for_command(name: &str) -> Option<String> {
    let mut cmd = Cli::command();
    let help = cmd
        .get_subcommands_mut()
        .find(|sc| sc.get_name() == name || sc.get_all_aliases().any(|a| a == name))
        .map(|sc| sc.render_help().to_string());
    help
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    match help_for_command(name) {
        Some(help) => print!("{}", help),
        None => {
            eprintln!("Unknown command: {}", name);
            eprintln!();
            print_grouped_help();
        }
    }
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    match command {
        Some(cmd) => print_help_for_command(cmd.name()),
        None => print_grouped_help(),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Reading(ReadingCommands),

    #[command(flatten)]
    Progress(ProgressCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Reading(c) => match c {
                ReadingCommands::Today => "today",
                ReadingCommands::Day { .. } => "day",
                ReadingCommands::Next => "next",
                ReadingCommands::Prev => "prev",
                ReadingCommands::Schedule => "schedule",
            },
            Commands::Progress(c) => match c {
                ProgressCommands::Mark { .. } => "mark",
                ProgressCommands::Read { .. } => "read",
                ProgressCommands::Progress { .. } => "progress",
            },
            Commands::Misc(c) => match c {
                MiscCommands::Theme { .. } => "theme",
                MiscCommands::Config { .. } => "config",
                MiscCommands::About => "about",
                MiscCommands::Shell => "shell",
                MiscCommands::Help { .. } => "help",
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ReadingCommands {
    /// Show today's reading
    #[command(alias = "t", display_order = 1)]
    Today,

    /// Show the reading for a date or plan position
    #[command(display_order = 2)]
    Day {
        /// A date (2026-01-05) or a 1-based position in the plan
        target: String,
    },

    /// Show the reading after today's
    #[command(alias = "n", display_order = 3)]
    Next,

    /// Show the reading before today's
    #[command(alias = "p", display_order = 4)]
    Prev,

    /// List every day of the plan with its progress
    #[command(alias = "s", display_order = 5)]
    Schedule,
}

#[derive(Subcommand, Debug)]
pub enum ProgressCommands {
    /// Mark a chapter as read, or unread if it already is
    #[command(alias = "m", display_order = 10)]
    Mark {
        /// Book and chapter (e.g. Genesis 3, 1 John 2)
        #[arg(required = true, num_args = 2..)]
        reference: Vec<String>,

        /// Mark on this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<String>,
    },

    /// Print where to read a chapter online
    #[command(alias = "r", display_order = 11)]
    Read {
        /// Book and chapter (e.g. Psalms 23)
        #[arg(required = true, num_args = 2..)]
        reference: Vec<String>,

        /// Open the chapter in the browser
        #[arg(long, short)]
        open: bool,
    },

    /// Show chapter counts for a day and the whole plan
    #[command(display_order = 12)]
    Progress {
        /// Report on this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show or change the display theme
    #[command(display_order = 20)]
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeArg>,
    },

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (plan-dir, reader-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// About the church and the reading plan
    #[command(display_order = 22)]
    About,

    /// Browse the plan interactively
    #[command(display_order = 23)]
    Shell,

    /// Print help for readplan or a subcommand
    #[command(display_order = 24)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
