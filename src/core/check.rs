use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::attendance::AttendanceInput;
use crate::models::policy::DutyPolicy;
use crate::models::reconciliation::{DutyStatus, Reconciliation};
use crate::ui::messages;
use crate::utils::colors::{RED, RESET, color_for_status};
use crate::utils::formatting::{bold, format_minutes, mins2readable};
use chrono::NaiveDate;

pub struct CheckLogic;

impl CheckLogic {
    pub fn apply(
        input: &AttendanceInput,
        day: NaiveDate,
        policy: &DutyPolicy,
        json: bool,
        verbose: bool,
    ) -> AppResult<()> {
        // JSON callers still get the reconciler's warning object
        if input.is_blank() && !json {
            messages::warning("Please enter at least one pair of times (--in/--out or --leave-start/--leave-end)");
            return Ok(());
        }

        let result = Core::reconcile(input, day, policy);

        if verbose && !json {
            Self::trace(&result, policy);
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            Self::render(&result);
        }

        Ok(())
    }

    fn trace(result: &Reconciliation, policy: &DutyPolicy) {
        messages::info(format!("Policy preset: {}", policy.preset.code()));
        if let Some(w) = &result.window {
            messages::info(format!("Duty window: {}", w));
        }
        for (i, c) in result.coverage.iter().enumerate() {
            messages::detail(format!("Coverage #{}: {}", i + 1, c));
        }
    }

    fn render(result: &Reconciliation) {
        let (Some(duty), Some(status)) = (result.duty_minutes(), result.status) else {
            messages::warning(result.warning_text().unwrap_or_default());
            return;
        };

        println!(
            "{:<16} {} ({})",
            "Effective duty:",
            bold(&format_minutes(duty)),
            mins2readable(duty.trunc() as i64, false, false)
        );
        println!(
            "{:<16} {}",
            "Missing:",
            format_minutes(result.missing_minutes)
        );
        println!(
            "{:<16} {}{}{}",
            "Status:",
            color_for_status(status),
            status.as_str(),
            RESET
        );
        println!();

        match status {
            DutyStatus::Normal => messages::success("Attendance complete (no anomalies)"),
            DutyStatus::Abnormal => {
                messages::warning("Attendance incomplete (less than the required duty)");
                if !result.missing_segments.is_empty() {
                    println!("\nMissing ranges:");
                    for seg in &result.missing_segments {
                        println!("  {RED}●{RESET} {}", seg.label);
                    }
                }
            }
        }
    }
}
