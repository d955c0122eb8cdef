//! qcgrid library root.
//! Exposes the shift-grid model, the reading store, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::session::Session;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Items => cli::commands::items::handle(),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } | Commands::Show { .. } | Commands::Export { .. } => {
            let mut session = Session::open(cfg);
            match &cli.command {
                Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, &mut session),
                Commands::Show { .. } => {
                    cli::commands::show::handle(&cli.command, cfg, &mut session)
                }
                _ => cli::commands::export::handle(&cli.command, cfg, &mut session),
            }
        }
    }
}

/// `RUST_LOG` wins over the configured level.
fn init_logging(cfg: &Config) {
    let env = env_logger::Env::default().default_filter_or(cfg.log_level.as_str());
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already initialized");
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    cfg.apply_overrides(cli.store.as_ref(), cli.backend);

    init_logging(&cfg);
    log::debug!(
        "store {} ({})",
        cfg.store_path().display(),
        cfg.backend.as_str()
    );

    dispatch(&cli, &cfg)
}
