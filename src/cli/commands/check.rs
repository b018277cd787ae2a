use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::check::CheckLogic;
use crate::errors::AppResult;
use crate::models::attendance::AttendanceInput;
use crate::utils::date;

/// Run the duty check for one day.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        work_in,
        work_out,
        leave_start,
        leave_end,
        date: day_arg,
        json,
    } = &cli.command
    {
        //
        // 1. Reference day (mandatory format when given)
        //
        let day = date::resolve_day(day_arg.as_ref())?;

        //
        // 2. Policy from config, possibly overridden by --policy
        //
        let policy = cfg.to_policy(cli.policy)?;

        //
        // 3. Raw strings; a missing flag is the same as an empty field
        //
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        let input = AttendanceInput {
            work_in: field(work_in),
            work_out: field(work_out),
            leave_start: field(leave_start),
            leave_end: field(leave_end),
        };

        CheckLogic::apply(&input, day, &policy, *json, cli.verbose)?;
    }

    Ok(())
}
