//! rDutyCheck library root.
//! Exposes the duty reconciler, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::attendance::AttendanceInput;
use models::policy::DutyPolicy;
use models::reconciliation::Reconciliation;
use std::path::PathBuf;

/// Parse a free-text `HH:MM` time and anchor it to today.
///
/// Blank, malformed or out of range input is `None`.
pub fn parse(text: &str) -> Option<chrono::NaiveDateTime> {
    utils::time::parse_time_on(text, utils::date::today())
}

/// Reconcile today's attendance with the canonical policy.
pub fn reconcile(
    work_in: &str,
    work_out: &str,
    leave_start: &str,
    leave_end: &str,
) -> Reconciliation {
    let input = AttendanceInput::new(work_in, work_out, leave_start, leave_end);
    reconcile_with(&DutyPolicy::canonical(), utils::date::today(), &input)
}

/// Reconcile with an explicit policy and reference day.
pub fn reconcile_with(policy: &DutyPolicy, day: NaiveDate, input: &AttendanceInput) -> Reconciliation {
    crate::core::logic::Core::reconcile(input, day, policy)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &std::path::Path) -> AppResult<()> {
    match &cli.command {
        Commands::Check { .. } => cli::commands::check::handle(cli, cfg),
        Commands::Policy => cli::commands::policy::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve config path (--config wins over the platform default)
    let cfg_path: PathBuf = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };

    // 3️⃣ load config once; a broken file must not block `config --init/--edit`
    let cfg = match (Config::load_from(&cfg_path), &cli.command) {
        (Ok(cfg), _) => cfg,
        (
            Err(_),
            Commands::Config {
                print_config: false,
                ..
            },
        ) => Config::default(),
        (Err(e), _) => return Err(e),
    };

    dispatch(&cli, &cfg, &cfg_path)
}
