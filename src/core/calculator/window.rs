use crate::models::interval::Interval;
use crate::models::policy::DutyPolicy;
use chrono::NaiveDate;

/// Duty window = [start, start + duty_length).
///
/// The start is the earliest activity, never before `flex_start` and never
/// after the latest credited start for the day.
pub fn duty_window(
    day: NaiveDate,
    work: Option<&Interval>,
    leave: Option<&Interval>,
    policy: &DutyPolicy,
) -> Option<Interval> {
    let flex_start = day.and_time(policy.flex_start);
    let latest = day.and_time(policy.latest_start(leave.is_some()));

    let raw_start = [work, leave]
        .into_iter()
        .flatten()
        .map(|iv| iv.start.max(flex_start))
        .min()?;

    let start = raw_start.min(latest);
    let end = start.checked_add_signed(policy.duty_length()?)?;
    Interval::new(start, end)
}
