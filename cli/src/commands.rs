pub mod info;
pub mod menu;

use clap::{ArgAction, Parser, Subcommand};
use clinic_common::config::{Config, DEFAULT_DATE_FORMAT, DEFAULT_DATE_TIME_FORMAT};
use clinic_common::models::weekday::Locale;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Records for a small clinic: patients, doctors, appointments and prescriptions.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output; repeat for less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug events
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Language for weekday names (en, es)
    #[arg(long, default_value = "en", global = true)]
    pub locale: Locale,

    /// Format of birth dates
    #[arg(long, default_value = DEFAULT_DATE_FORMAT, global = true)]
    pub date_format: String,

    /// Format of appointment dates and times
    #[arg(long, default_value = DEFAULT_DATE_TIME_FORMAT, global = true)]
    pub date_time_format: String,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive records menu (default)
    #[command(alias = "m")]
    Menu,
    /// Show what the tool does and which inputs it accepts
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            locale: self.locale,
            date_format: self.date_format.clone(),
            date_time_format: self.date_time_format.clone(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
