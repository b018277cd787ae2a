use crate::models::interval::Interval;
use crate::utils::time::range_label;
use serde::Serialize;

/// Warning returned in place of a minute count when no interval could be formed.
pub const NO_TIME_WARNING: &str = "No valid time entered: provide a clock-in/out or leave pair";

/// Uncovered part of the duty window, lunch excluded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingSegment {
    pub range: Interval,
    pub minutes: f64,
    pub label: String,
}

impl MissingSegment {
    pub fn new(range: Interval) -> Self {
        let minutes = range.minutes();
        Self {
            range,
            minutes,
            label: range_label(range.start, range.end, minutes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum DutyOutcome {
    Warning(String),
    DutyMinutes(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DutyStatus {
    Normal,
    Abnormal,
}

impl DutyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::Normal => "normal",
            DutyStatus::Abnormal => "abnormal",
        }
    }
}

/// Result of reconciling one day of attendance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    pub outcome: DutyOutcome,
    pub missing_minutes: f64,
    pub missing_segments: Vec<MissingSegment>,
    pub window: Option<Interval>,
    pub coverage: Vec<Interval>,
    pub status: Option<DutyStatus>,
}

impl Reconciliation {
    pub fn warning(msg: &str) -> Self {
        Self {
            outcome: DutyOutcome::Warning(msg.to_string()),
            missing_minutes: 0.0,
            missing_segments: Vec::new(),
            window: None,
            coverage: Vec::new(),
            status: None,
        }
    }

    pub fn duty_minutes(&self) -> Option<f64> {
        match self.outcome {
            DutyOutcome::DutyMinutes(m) => Some(m),
            DutyOutcome::Warning(_) => None,
        }
    }

    pub fn warning_text(&self) -> Option<&str> {
        match &self.outcome {
            DutyOutcome::Warning(w) => Some(w),
            DutyOutcome::DutyMinutes(_) => None,
        }
    }

    pub fn missing_labels(&self) -> Vec<String> {
        self.missing_segments
            .iter()
            .map(|s| s.label.clone())
            .collect()
    }
}
