//! Gap analysis: which parts of the duty window are not covered, and how
//! much of that counts as missing once lunch is taken out.

use crate::models::interval::Interval;
use crate::models::reconciliation::MissingSegment;
use chrono::NaiveDateTime;

/// Missing time found in the window.
#[derive(Debug, Default)]
pub struct GapInfo {
    pub missing_minutes: f64,
    pub segments: Vec<MissingSegment>,
}

impl GapInfo {
    fn absorb(&mut self, segments: Vec<MissingSegment>) {
        for seg in segments {
            self.missing_minutes += seg.minutes;
            self.segments.push(seg);
        }
    }
}

/// Split one uncovered range around lunch.
///
/// At most two parts survive: the one before `lunch_start` and the one after
/// `lunch_end`. Whatever falls inside lunch is dropped.
pub fn analyze_gap(
    gap: &Interval,
    lunch_start: NaiveDateTime,
    lunch_end: NaiveDateTime,
) -> Vec<MissingSegment> {
    let before = Interval::new(gap.start, gap.end.min(lunch_start));
    let after = Interval::new(gap.start.max(lunch_end), gap.end);

    [before, after]
        .into_iter()
        .flatten()
        .map(MissingSegment::new)
        .collect()
}

/// Walk merged coverage and collect every gap in `window`, lunch excluded.
pub fn analyze_gaps(
    coverage: &[Interval],
    window: &Interval,
    lunch_start: NaiveDateTime,
    lunch_end: NaiveDateTime,
) -> GapInfo {
    let mut info = GapInfo::default();
    let mut cursor = window.start;

    for seg in coverage {
        if let Some(gap) = Interval::new(cursor, seg.start) {
            info.absorb(analyze_gap(&gap, lunch_start, lunch_end));
        }
        cursor = cursor.max(seg.end);
    }

    if let Some(tail) = Interval::new(cursor, window.end) {
        info.absorb(analyze_gap(&tail, lunch_start, lunch_end));
    }

    info
}
