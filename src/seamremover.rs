// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal
//!
//! Both removals compact the grid in place, shifting every pixel past
//! the seam back by one and then dropping the slack off the end of the
//! buffer.  A seam must have exactly one in-range entry per row
//! (vertical) or per column (horizontal), as the tracer produces; a
//! seam that doesn't is a bug in the caller and panics before the grid
//! is touched.

use crate::direction::Direction;
use crate::twodmap::TwoDimensionalMap;

/// Remove one pixel from every row; the map loses a column.
pub fn remove_vertical_seam<P: Default + Copy>(grid: &mut TwoDimensionalMap<P>, seam: &[u32]) {
    assert!(grid.width > 1, "cannot remove the only column");
    assert_eq!(seam.len(), grid.height as usize, "seam length must match height");
    assert!(
        seam.iter().all(|&x| x < grid.width),
        "seam leaves the grid: {:?} with width {}",
        seam,
        grid.width
    );
    let (width, height) = (grid.width as usize, grid.height as usize);

    // The write cursor never passes the read cursor, so a single
    // forward pass over the whole buffer is safe.
    let mut write = 0;
    for y in 0..height {
        let skip = seam[y] as usize;
        for x in 0..width {
            if x != skip {
                grid.data[write] = grid.data[y * width + x];
                write += 1;
            }
        }
    }
    grid.data.truncate(write);
    grid.width -= 1;
}

/// Remove one pixel from every column; the map loses a row.
pub fn remove_horizontal_seam<P: Default + Copy>(grid: &mut TwoDimensionalMap<P>, seam: &[u32]) {
    assert!(grid.height > 1, "cannot remove the only row");
    assert_eq!(seam.len(), grid.width as usize, "seam length must match width");
    assert!(
        seam.iter().all(|&y| y < grid.height),
        "seam leaves the grid: {:?} with height {}",
        seam,
        grid.height
    );
    let (width, height) = (grid.width as usize, grid.height as usize);

    for x in 0..width {
        for y in (seam[x] as usize)..(height - 1) {
            grid.data[y * width + x] = grid.data[(y + 1) * width + x];
        }
    }
    grid.data.truncate((height - 1) * width);
    grid.height -= 1;
}

/// Remove a seam running in `direction`.
pub fn remove_seam<P: Default + Copy>(
    grid: &mut TwoDimensionalMap<P>,
    seam: &[u32],
    direction: Direction,
) {
    match direction {
        Direction::Vertical => remove_vertical_seam(grid, seam),
        Direction::Horizontal => remove_horizontal_seam(grid, seam),
    }
}
