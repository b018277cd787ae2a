use crate::models::policy::PolicyPreset;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDutyCheck
#[derive(Parser)]
#[command(
    name = "rdutycheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check one day of attendance against the 8-hour duty window and list missing ranges",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the policy preset from the configuration file
    #[arg(global = true, long = "policy", value_enum)]
    pub policy: Option<PolicyPreset>,

    /// Print the derived duty window and coverage
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a day's clock-in/out and leave against the duty requirement
    Check {
        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        work_in: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        work_out: Option<String>,

        #[arg(long = "leave-start", help = "Leave start time (HH:MM)")]
        leave_start: Option<String>,

        #[arg(long = "leave-end", help = "Leave end time (HH:MM)")]
        leave_end: Option<String>,

        /// Reference day (YYYY-MM-DD), today when omitted
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Show the effective duty policy and the available presets
    Policy,

    /// Manage the configuration file (view, create or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
