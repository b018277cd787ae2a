use crate::utils::time::{format_hm, minutes_between};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Half-open `[start, end)` range on the reference day. Always `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    /// Build an interval, or `None` when the pair is empty or inverted.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    /// Interval from two optional endpoints; a missing side means no interval.
    pub fn from_parts(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Option<Self> {
        Self::new(start?, end?)
    }

    pub fn minutes(&self) -> f64 {
        minutes_between(self.start, self.end)
    }

    /// Intersection with `other`, if any.
    pub fn clip(&self, other: &Interval) -> Option<Interval> {
        Interval::new(self.start.max(other.start), self.end.min(other.end))
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}~{}", format_hm(self.start), format_hm(self.end))
    }
}
