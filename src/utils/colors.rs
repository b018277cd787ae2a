use crate::models::reconciliation::DutyStatus;

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Normal → green, abnormal → red
pub fn color_for_status(status: DutyStatus) -> &'static str {
    match status {
        DutyStatus::Normal => GREEN,
        DutyStatus::Abnormal => RED,
    }
}
