// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam direction
//!
//! A vertical seam walks top to bottom, choosing one column per row; a
//! horizontal seam walks left to right, choosing one row per column.
//! The two are the same algorithm with x and y exchanged, so rather
//! than writing everything twice, the cost and trace code speaks in
//! terms of a *step* along the seam and an *offset* across it, and a
//! `Direction` turns that pair back into an (x, y) address.

use crate::twodmap::TwoDimensionalMap;
use std::cmp;
use std::ops::RangeInclusive;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    /// Top to bottom; removing one shrinks the width.
    Vertical,
    /// Left to right; removing one shrinks the height.
    Horizontal,
}

impl Direction {
    /// The number of steps along the seam, which is also the seam's
    /// length.
    pub fn along<P: Default + Copy>(self, map: &TwoDimensionalMap<P>) -> u32 {
        match self {
            Direction::Vertical => map.height(),
            Direction::Horizontal => map.width(),
        }
    }

    /// The number of positions a seam can occupy at any one step.
    pub fn across<P: Default + Copy>(self, map: &TwoDimensionalMap<P>) -> u32 {
        match self {
            Direction::Vertical => map.width(),
            Direction::Horizontal => map.height(),
        }
    }

    /// (step, offset) -> (x, y)
    #[inline]
    pub fn point(self, step: u32, offset: u32) -> (u32, u32) {
        match self {
            Direction::Vertical => (offset, step),
            Direction::Horizontal => (step, offset),
        }
    }
}

/// The offsets adjacent to `offset` on the neighbouring step, in
/// ascending order: left, above, right for a vertical seam; above,
/// same, below for a horizontal one.  Offsets off the edge of the map
/// are simply not in the range.  `across` must be at least 1.
#[inline]
pub(crate) fn adjacent(offset: u32, across: u32) -> RangeInclusive<u32> {
    offset.saturating_sub(1)..=cmp::min(offset + 1, across - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_swaps_the_axes() {
        let map: TwoDimensionalMap<u8> = TwoDimensionalMap::new(5, 4);
        assert_eq!(Direction::Vertical.along(&map), 4);
        assert_eq!(Direction::Vertical.across(&map), 5);
        assert_eq!(Direction::Horizontal.along(&map), 5);
        assert_eq!(Direction::Horizontal.across(&map), 4);
        assert_eq!(Direction::Vertical.point(1, 3), (3, 1));
        assert_eq!(Direction::Horizontal.point(1, 3), (1, 3));
    }

    #[test]
    fn adjacent_clamps_at_the_edges() {
        assert_eq!(adjacent(0, 5).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(adjacent(2, 5).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(adjacent(4, 5).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(adjacent(0, 1).collect::<Vec<_>>(), vec![0]);
    }
}
