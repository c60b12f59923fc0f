pub mod add;
pub mod delete;
pub mod help;
pub mod init;
pub mod list;
pub mod sort;
pub mod toggle;
pub mod update;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::sort::SortMode;
use crate::storage::MemoryStore;
use crate::{msg_debug, msg_error, msg_print, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial sort mode (A/B/C/D), overriding the configured default
    #[arg(short, long)]
    sort: Option<String>,
}

/// Per-session state threaded through every command handler. Nothing is
/// process-global: a future request boundary would construct one of these
/// per request scope.
pub struct Session {
    pub service: TaskService,
    pub sort: SortMode,
    pub config: Config,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        // In debug mode the message macros route through tracing; install
        // a subscriber so that output actually lands somewhere.
        if crate::libs::messages::macros::is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
                .init();
        }

        match cli.command {
            Some(Commands::Init) => init::cmd(),
            None => repl(cli.sort.as_deref()),
        }
    }
}

/// The interactive command loop. Expected failures are rendered by the
/// handlers themselves; anything that escapes as an error is reported
/// generically here and the session continues.
fn repl(sort_override: Option<&str>) -> Result<()> {
    let config = match Config::read() {
        Ok(config) => config,
        Err(e) => {
            msg_warning!(Message::ConfigLoadFailed(e.to_string()));
            Config::default()
        }
    };
    let sort = sort_override.and_then(SortMode::from_code).unwrap_or_else(|| config.default_sort());
    let mut session = Session {
        service: TaskService::new(MemoryStore::new()),
        sort,
        config,
    };

    banner();

    let stdin = io::stdin();
    loop {
        print!("\ntydo> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF (Ctrl+D)
            break;
        }

        let command = line.trim().to_lowercase();
        if command.is_empty() {
            continue;
        }
        if command == "exit" || command == "quit" {
            break;
        }

        if let Err(e) = dispatch(&command, &mut session) {
            msg_error!(Message::UnexpectedError(e.to_string()));
        }
    }

    msg_print!(Message::Goodbye);
    Ok(())
}

fn dispatch(command: &str, session: &mut Session) -> Result<()> {
    msg_debug!(format!("Dispatching command: {}", command));
    match command {
        "add" => add::cmd(session),
        "list" => list::cmd(session),
        "update" => update::cmd(session),
        "delete" => delete::cmd(session),
        "toggle" => toggle::cmd(session),
        "sort" => sort::cmd(session),
        "help" => help::cmd(),
        _ => {
            msg_error!(Message::UnknownCommand(command.to_string()));
            Ok(())
        }
    }
}

fn banner() {
    println!("============================================================");
    println!("Tydo - in-memory todo console");
    println!("============================================================");
    println!();
    println!("All tasks live in memory and are lost when you exit.");
    println!("Type 'help' for available commands, or 'exit' to quit.");
}
