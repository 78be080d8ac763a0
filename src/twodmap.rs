// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional map
//!
//! An addressable two-dimensional field holding one of the several
//! kinds of values we deal with during processing: the pixel
//! intensities themselves, the energy map, or the cumulative cost map.
//! The storage is a single flat row-major vector, so a map is always
//! rectangular, and the map can shrink in place as seams are carved
//! out of it.

use crate::errors::SeamError;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to the content type's
    /// default.  Both dimensions must be at least one; outside the crate
    /// maps are only built through `from_vec` and `from_rows`, which
    /// check.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "a {}x{} map has no cells", width, height);
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  The buffer must hold exactly
    /// `width * height` values, and neither dimension may be zero.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Result<Self, SeamError> {
        if width == 0 || height == 0 {
            return Err(SeamError::MalformedInput(format!(
                "a {}x{} grid has no pixels",
                width, height
            )));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(SeamError::MalformedInput(format!(
                "a {}x{} grid needs {} values, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    /// Build a map from a list of rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<P>>) -> Result<Self, SeamError> {
        let width = match rows.first() {
            Some(row) => row.len(),
            None => return Err(SeamError::MalformedInput("the grid has no rows".to_string())),
        };
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(SeamError::MalformedInput(format!(
                "row {} has {} columns, but row 0 has {}",
                y,
                row.len(),
                width
            )));
        }
        let height = rows.len();
        let data = rows.into_iter().flatten().collect();
        Self::from_vec(width as u32, height as u32, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height), in the same order image.rs reports them.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The row-major backing store.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<P> {
        self.data
    }

    /// Copy the map out as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<P>> {
        self.data
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

// One row per line, space separated.  This is what the trace logs
// print when dumping intermediate matrices.
impl<P: Default + Copy + fmt::Display> fmt::Display for TwoDimensionalMap<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.data.chunks(self.width as usize) {
            let mut first = true;
            for value in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
