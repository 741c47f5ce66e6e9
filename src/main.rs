mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sharedcal_core::SystemClock;
use sharedcal_core::config::SharedCalConfig;
use sharedcal_core::store::{FileStore, Store};

use crate::commands::Context;

#[derive(Parser)]
#[command(name = "sharedcal")]
#[command(about = "Shared schedule, todo list and diary in your terminal")]
struct Cli {
    /// Directory holding the stored collections (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Act as this user (name or email)
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid, marking days that have events
    Month {
        #[arg(long)]
        year: Option<i32>,

        /// Month number, 1-12 (values outside roll into neighbouring years)
        #[arg(long, allow_negative_numbers = true)]
        month: Option<i32>,

        /// Months to move from the chosen month, negative for earlier
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Also list the events of this day (YYYY-MM-DD)
        #[arg(long)]
        select: Option<String>,

        /// Print the grid cells as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage users
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Manage events
    Event {
        #[command(subcommand)]
        command: EventCommand,
    },
    /// Manage the shared todo list
    Todo {
        #[command(subcommand)]
        command: TodoCommand,
    },
    /// Manage your diary
    Diary {
        #[command(subcommand)]
        command: DiaryCommand,
    },
    /// Show or edit the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the config location and values
    Show,
    /// Write a config file with default values if none exists
    Init,
    /// Set the user to act as when --user is not given (empty clears it)
    DefaultUser { name: String },
}

#[derive(Subcommand)]
pub enum UserCommand {
    Add { name: String, email: String },
    /// Change the acting user's display name
    Rename { name: String },
    List,
}

#[derive(Subcommand)]
pub enum EventCommand {
    Add {
        /// Day of the event (YYYY-MM-DD)
        date: String,
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Place name
        #[arg(short, long)]
        location: Option<String>,

        #[arg(long, requires = "location", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, requires = "location", allow_negative_numbers = true)]
        lon: Option<f64>,
    },
    List {
        /// Only events on this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum TodoCommand {
    Add { text: String },
    List,
    Toggle { id: String },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum DiaryCommand {
    Add {
        content: String,

        /// Day the entry is about (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    List,
    Delete { id: String },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

/// Load the config and open the store it points at.
fn open_context(
    data_dir: Option<PathBuf>,
    user: Option<String>,
) -> Result<Context<FileStore, SystemClock>> {
    let config = SharedCalConfig::load()?;

    let data_dir = data_dir.unwrap_or(config.data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "opening store");

    Ok(Context {
        store: Store::open(data_dir),
        clock: SystemClock,
        user: user.or(config.default_user),
    })
}

fn main() -> Result<()> {
    init_logging();

    let Cli {
        data_dir,
        user,
        command,
    } = Cli::parse();

    match command {
        Commands::Month {
            year,
            month,
            offset,
            select,
            json,
        } => {
            let ctx = open_context(data_dir, user)?;
            commands::month::run(&ctx, year, month, offset, select.as_deref(), json)
        }
        Commands::User { command } => commands::user::run(&open_context(data_dir, user)?, command),
        Commands::Event { command } => {
            commands::event::run(&open_context(data_dir, user)?, command)
        }
        Commands::Todo { command } => commands::todo::run(&open_context(data_dir, user)?, command),
        Commands::Diary { command } => {
            commands::diary::run(&open_context(data_dir, user)?, command)
        }
        Commands::Config { command } => commands::config::run(command),
    }
}
