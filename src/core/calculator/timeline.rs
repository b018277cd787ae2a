use crate::models::interval::Interval;

/// Merge presence intervals into continuous coverage inside `window`.
///
/// Intervals are clipped to the window first. A segment starting exactly where
/// the previous one ends extends it (no zero-length gap at the boundary).
pub fn build_coverage(intervals: &[Interval], window: &Interval) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.start);

    let mut merged: Vec<Interval> = Vec::new();

    for clipped in sorted.iter().filter_map(|iv| iv.clip(window)) {
        match merged.last_mut() {
            Some(last) if clipped.start <= last.end => {
                last.end = last.end.max(clipped.end);
            }
            _ => merged.push(clipped),
        }
    }

    merged
}
