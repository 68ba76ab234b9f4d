//! Overlap stacking within one crew lane.
//!
//! # Algorithm
//! Assignments are visited earliest-start first (ties keep input order).
//! Each one takes the row just below the deepest already-placed
//! assignment it overlaps, or row 0 if it overlaps none.
//!
//! When every overlapping predecessor also overlaps every other (the
//! common case of a job nested inside a longer one), the row equals the
//! number of overlapping predecessors. Taking the deepest predecessor's
//! row instead of the plain count keeps chains such as `X ⊃ A`, `A ∩ B`,
//! `X ∩ B = ∅` from landing `A` and `B` on the same row.
//!
//! The result never places two overlapping assignments on the same row,
//! but it does not minimize the number of rows.
//!
//! # Complexity
//! O(n²) in assignments per lane, which is tens per week in practice.

use crate::models::{Assignment, TimeSpan};

/// Computes the stack row of every assignment in one lane.
///
/// Returns one entry per input, in input order. Entries are `None` for
/// assignments without a valid schedule; those never take part in
/// stacking.
pub fn stack_rows(lane: &[&Assignment]) -> Vec<Option<usize>> {
    let spans: Vec<Option<TimeSpan>> = lane.iter().map(|a| a.span()).collect();

    let mut order: Vec<(usize, TimeSpan)> = spans
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.map(|span| (i, span)))
        .collect();
    // Stable sort: equal starts keep input order.
    order.sort_by_key(|(_, span)| span.start);

    let mut rows = vec![None; lane.len()];
    for (k, (idx, span)) in order.iter().enumerate() {
        let row = order[..k]
            .iter()
            .filter(|(_, earlier)| earlier.overlaps(span))
            .filter_map(|(j, _)| rows[*j])
            .map(|r: usize| r + 1)
            .max()
            .unwrap_or(0);
        rows[*idx] = Some(row);
    }
    rows
}

/// Number of rows a lane needs (0 for a lane with nothing placed).
pub fn row_count(rows: &[Option<usize>]) -> usize {
    rows.iter().flatten().max().map_or(0, |r| r + 1)
}
