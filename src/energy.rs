// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is how much it differs from its four
//! immediate neighbours: the sum of the absolute intensity differences
//! to the pixels above, below, left and right.  A neighbour that falls
//! off the edge of the grid contributes nothing; there is no
//! wraparound.

use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// Per-pixel energies, the same shape as the grid they came from.
/// Intensities are at most 32 bits wide, so four differences always
/// fit.
pub type EnergyMap = TwoDimensionalMap<u64>;

// (Pixel, Pixel) -> Energy
#[inline]
fn energy_of_pair(p1: u32, p2: u32) -> u64 {
    u64::from(p1.max(p2) - p1.min(p2))
}

// Image -> Energy Map

/// Compute the energy of every pixel in a grid.  This is a pure
/// function of the grid; call it again after every carve, since
/// removing a seam changes who neighbours whom.
pub fn calculate_energy<P>(grid: &TwoDimensionalMap<P>) -> EnergyMap
where
    P: Default + Copy + Into<u32>,
{
    let (width, height) = grid.dimensions();
    let (mw, mh) = (width - 1, height - 1);
    let at = |x: u32, y: u32| -> u32 { grid[(x, y)].into() };

    let mut emap = EnergyMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let current = at(x, y);
        let neighbours = [
            if x == 0 { None } else { Some(at(x - 1, y)) },
            if x >= mw { None } else { Some(at(x + 1, y)) },
            if y == 0 { None } else { Some(at(x, y - 1)) },
            if y >= mh { None } else { Some(at(x, y + 1)) },
        ];
        emap[(x, y)] = neighbours
            .iter()
            .flatten()
            .map(|&n| energy_of_pair(current, n))
            .sum();
    }
    emap
}
