// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam tracing
//!
//! Given a cost map, find the cheapest seam.  The seam ends at the
//! cheapest cell on the far edge; from there we walk back toward the
//! starting edge, at each step moving to whichever of the (at most)
//! three adjacent cells on the previous step is cheapest.
//!
//! Ties always go to the lowest offset: the leftmost column for a
//! vertical seam, the topmost row for a horizontal one.  So on the far
//! edge the first minimum wins, and while walking back left beats
//! straight-on, which beats right.  `min_by_key` returns the first of
//! several equal minima, which is exactly that rule.

use crate::cost::CostMap;
use crate::direction::{adjacent, Direction};

/// One offset per step along the seam: the column to remove from each
/// row for a vertical seam, the row to remove from each column for a
/// horizontal one.  Consecutive entries never differ by more than one.
pub type Seam = Vec<u32>;

/// Given a cost map, return the list of offsets that, when mapped with
/// the range (0..along), give the coordinates of every pixel in the
/// seam to be removed.
pub fn trace_seam(cost: &CostMap, direction: Direction) -> Seam {
    let (along, across) = (direction.along(cost), direction.across(cost));
    let last = along - 1;

    // Find the offset on the far edge with the least cost.
    let mut offset = (0..across)
        .min_by_key(|o| cost[direction.point(last, *o)])
        .unwrap_or(0);

    // Working backwards, generate a vec of offsets that map to the
    // seam, reverse and return.
    (0..along)
        .rev()
        .fold(Seam::with_capacity(along as usize), |mut acc, step| {
            if step != last {
                offset = adjacent(offset, across)
                    .min_by_key(|o| cost[direction.point(step, *o)])
                    .unwrap_or(offset);
            }
            acc.push(offset);
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// The cheapest top-to-bottom seam: one column per row.
pub fn trace_vertical(cost: &CostMap) -> Seam {
    trace_seam(cost, Direction::Vertical)
}

/// The cheapest left-to-right seam: one row per column.
pub fn trace_horizontal(cost: &CostMap) -> Seam {
    trace_seam(cost, Direction::Horizontal)
}
