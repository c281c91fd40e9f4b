//! Contact Assistant - Main entry point
//!
//! Loads the address book from the configured data file, runs the
//! interactive command loop on stdin/stdout, and saves on exit.

use anyhow::Result;
use contact_assistant::clock::SystemClock;
use contact_assistant::commands::{self, LoopAction};
use contact_assistant::{storage, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr only; stdout belongs to the command loop.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using data file: {}", config.data_file.display());

    let mut book = storage::load(&config.data_file);
    info!("Loaded {} contact(s)", book.len());

    let clock = SystemClock;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: save just like an explicit exit.
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match commands::handle(line, &mut book, &clock) {
            LoopAction::Reply(reply) => println!("{}", reply),
            LoopAction::Exit => {
                println!("Goodbye!");
                break;
            }
        }
    }

    if let Err(e) = storage::save(&book, &config.data_file) {
        error!("Failed to save address book: {}", e);
        return Err(e.into());
    }
    info!("Saved {} contact(s)", book.len());
    Ok(())
}
