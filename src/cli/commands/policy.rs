use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::policy::PolicyLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let policy = cfg.to_policy(cli.policy)?;
    PolicyLogic::print(&policy);
    Ok(())
}
