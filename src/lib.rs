//! salonbook library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use models::role::{Caller, Role};

/// Identity the command runs as. Staff and customers must name themselves.
pub fn resolve_caller(cli: &Cli) -> AppResult<Caller> {
    match cli.role {
        Role::Admin => Ok(Caller::admin()),
        role => {
            let id = cli
                .user
                .clone()
                .filter(|u| !u.trim().is_empty())
                .ok_or_else(|| {
                    AppError::Validation(format!("--user is required with --role {}", role.as_str()))
                })?;
            Ok(match role {
                Role::Staff => Caller::staff(id),
                _ => Caller::customer(id),
            })
        }
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, caller: &Caller) -> AppResult<()> {
    use crate::cli::commands as cmd;

    match &cli.command {
        Commands::Init => cmd::init::handle(cli),
        Commands::Config { .. } => cmd::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cmd::log::handle(&cli.command, cfg),
        Commands::Book { .. } => cmd::book::handle(&cli.command, cfg, caller),
        Commands::Status { .. } => cmd::status::handle(&cli.command, cfg, caller),
        Commands::List { .. } | Commands::Show { .. } => cmd::list::handle(&cli.command, cfg, caller),
        Commands::Slots { .. } => cmd::slots::handle(&cli.command, cfg),
        Commands::Customer { .. } => cmd::customer::handle(&cli.command, cfg, caller),
        Commands::Service { .. } => cmd::service::handle(&cli.command, cfg, caller),
        Commands::Staff { .. } => cmd::staff::handle(&cli.command, cfg, caller),
        Commands::Payment { .. } => cmd::payment::handle(&cli.command, cfg, caller),
        Commands::Dashboard => cmd::dashboard::handle(cfg, caller),
        Commands::Export { .. } | Commands::Import { .. } => {
            cmd::export::handle(&cli.command, cfg, caller)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let caller = resolve_caller(&cli)?;
    dispatch(&cli, &cfg, &caller)
}
