//! moodtasker library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod capture;
pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod history;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Capture { .. } => cli::commands::capture::handle(&cli.command, cfg),
        Commands::Text { .. } => cli::commands::text::handle(&cli.command, cfg),
        Commands::Record { .. } => cli::commands::record::handle(&cli.command, cfg),
        Commands::Recommend { .. } => cli::commands::recommend::handle(&cli.command),
        Commands::Stress { .. } => cli::commands::stress::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Diagnostics on stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_logging();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply the history override from the command line
    if let Some(custom) = &cli.history {
        cfg.history_file = utils::path::expand_tilde(custom)
            .to_string_lossy()
            .to_string();
    }

    log::debug!("history file: {}", cfg.history_file);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
