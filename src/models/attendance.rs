use crate::models::interval::Interval;
use crate::utils::time::parse_time_on;
use chrono::NaiveDate;

/// The four raw strings of one day, as typed by the user. Empty means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceInput {
    pub work_in: String,
    pub work_out: String,
    pub leave_start: String,
    pub leave_end: String,
}

impl AttendanceInput {
    pub fn new(work_in: &str, work_out: &str, leave_start: &str, leave_end: &str) -> Self {
        Self {
            work_in: work_in.to_string(),
            work_out: work_out.to_string(),
            leave_start: leave_start.to_string(),
            leave_end: leave_end.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.work_in,
            &self.work_out,
            &self.leave_start,
            &self.leave_end,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }

    /// Work record on `day`; `None` if either side is absent or the pair is inverted.
    pub fn work(&self, day: NaiveDate) -> Option<Interval> {
        Interval::from_parts(
            parse_time_on(&self.work_in, day),
            parse_time_on(&self.work_out, day),
        )
    }

    /// Leave record on `day`, same rules as [`AttendanceInput::work`].
    pub fn leave(&self, day: NaiveDate) -> Option<Interval> {
        Interval::from_parts(
            parse_time_on(&self.leave_start, day),
            parse_time_on(&self.leave_end, day),
        )
    }
}
