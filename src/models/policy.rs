use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime};
use serde::Serialize;

/// Named rule variants for the flexible-latest cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyPreset {
    /// The cap is always the flexible-latest time (09:30).
    Canonical,
    /// The cap drops to the standard start (09:00) whenever leave is recorded.
    StrictLeave,
}

impl PolicyPreset {
    pub const ALL: [PolicyPreset; 2] = [PolicyPreset::Canonical, PolicyPreset::StrictLeave];

    pub fn code(&self) -> &'static str {
        match self {
            PolicyPreset::Canonical => "canonical",
            PolicyPreset::StrictLeave => "strict-leave",
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "canonical" => Ok(PolicyPreset::Canonical),
            "strict-leave" | "strict_leave" => Ok(PolicyPreset::StrictLeave),
            other => Err(AppError::InvalidPolicy(other.to_string())),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PolicyPreset::Canonical => "flexible start capped at the flexible-latest time",
            PolicyPreset::StrictLeave => "cap drops to the standard start when leave is present",
        }
    }
}

/// Immutable rule set the reconciler is evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyPolicy {
    pub preset: PolicyPreset,
    pub lunch_start: NaiveTime,
    pub lunch_end: NaiveTime,
    /// Earliest time credited as the start of the duty window.
    pub flex_start: NaiveTime,
    /// Latest time credited as the start of the duty window.
    pub flex_latest: NaiveTime,
    /// Cap used instead of `flex_latest` when leave is present and
    /// `strict_when_leave_present` is set.
    pub strict_latest: NaiveTime,
    pub strict_when_leave_present: bool,
    pub duty_length_minutes: i64,
    pub required_minutes: f64,
    pub tolerance_minutes: f64,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    // only called with literal, in-range values
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

impl DutyPolicy {
    pub fn canonical() -> Self {
        Self {
            preset: PolicyPreset::Canonical,
            lunch_start: hm(12, 0),
            lunch_end: hm(13, 0),
            flex_start: hm(8, 30),
            flex_latest: hm(9, 30),
            strict_latest: hm(9, 0),
            strict_when_leave_present: false,
            duty_length_minutes: 9 * 60,
            required_minutes: 480.0,
            tolerance_minutes: 0.1,
        }
    }

    pub fn strict_leave() -> Self {
        Self {
            preset: PolicyPreset::StrictLeave,
            strict_when_leave_present: true,
            ..Self::canonical()
        }
    }

    /// Latest credited start for a day, given whether leave was recorded.
    pub fn latest_start(&self, has_leave: bool) -> NaiveTime {
        if has_leave && self.strict_when_leave_present {
            self.strict_latest
        } else {
            self.flex_latest
        }
    }

    /// `None` when the length does not fit a `Duration`.
    pub fn duty_length(&self) -> Option<Duration> {
        Duration::try_minutes(self.duty_length_minutes)
    }

    /// Whether `duty_minutes` satisfies the requirement, within tolerance.
    pub fn is_satisfied(&self, duty_minutes: f64) -> bool {
        duty_minutes >= self.required_minutes - self.tolerance_minutes
    }
}

impl Default for DutyPolicy {
    fn default() -> Self {
        Self::canonical()
    }
}
