use crate::core::calculator::{gaps, timeline, window};
use crate::models::attendance::AttendanceInput;
use crate::models::interval::Interval;
use crate::models::policy::DutyPolicy;
use crate::models::reconciliation::{
    DutyOutcome, DutyStatus, NO_TIME_WARNING, Reconciliation,
};
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Reconcile one day of attendance against `policy`.
    ///
    /// Never fails: unparsable or inverted pairs are treated as absent, and a
    /// day with no usable pair yields a warning outcome.
    pub fn reconcile(
        input: &AttendanceInput,
        day: NaiveDate,
        policy: &DutyPolicy,
    ) -> Reconciliation {
        let work = input.work(day);
        let leave = input.leave(day);

        let Some(duty_window) = window::duty_window(day, work.as_ref(), leave.as_ref(), policy)
        else {
            return Reconciliation::warning(NO_TIME_WARNING);
        };

        let present: Vec<Interval> = [work, leave].into_iter().flatten().collect();
        let coverage = timeline::build_coverage(&present, &duty_window);

        let info = gaps::analyze_gaps(
            &coverage,
            &duty_window,
            day.and_time(policy.lunch_start),
            day.and_time(policy.lunch_end),
        );
        let duty_minutes = policy.required_minutes - info.missing_minutes;

        let status = if policy.is_satisfied(duty_minutes) {
            DutyStatus::Normal
        } else {
            DutyStatus::Abnormal
        };

        Reconciliation {
            outcome: DutyOutcome::DutyMinutes(duty_minutes),
            missing_minutes: info.missing_minutes,
            missing_segments: info.segments,
            window: Some(duty_window),
            coverage,
            status: Some(status),
        }
    }
}
