// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine.  All the requested vertical seams come
//! out first, then all the horizontal ones.  Every seam is found
//! against the grid as it stands after the previous removal: the
//! energy map and the cost map are rebuilt from scratch each time,
//! because removing a seam changes the neighbours, and therefore the
//! energies, of every pixel along it.

use crate::direction::Direction;
use crate::errors::{Axis, SeamError};
use crate::seamfinder::{BackwardEnergy, SeamFinder};
use crate::seamremover::remove_seam;
use crate::twodmap::TwoDimensionalMap;
use log::{debug, info};

fn carveonce<P>(grid: &mut TwoDimensionalMap<P>, direction: Direction)
where
    P: Default + Copy + Into<u32>,
{
    let seam = BackwardEnergy::new(grid).seam(direction);
    remove_seam(grid, &seam, direction);
}

// Both counts are checked before anything is touched.
fn check_request(width: u32, height: u32, vertical: u32, horizontal: u32) -> Result<(), SeamError> {
    if vertical >= width {
        return Err(SeamError::Configuration {
            axis: Axis::Columns,
            requested: vertical,
            available: width,
        });
    }
    if horizontal >= height {
        return Err(SeamError::Configuration {
            axis: Axis::Rows,
            requested: horizontal,
            available: height,
        });
    }
    Ok(())
}

/// A struct holding the grid to be carved.  The grid is the only state
/// that survives from one seam to the next.
#[derive(Debug, Clone)]
pub struct SeamCarver<P: Default + Copy> {
    grid: TwoDimensionalMap<P>,
}

impl<P> SeamCarver<P>
where
    P: Default + Copy + Into<u32>,
{
    /// Creates a new SeamCarver that takes ownership of the grid to be
    /// carved.
    pub fn new(grid: TwoDimensionalMap<P>) -> Self {
        Self { grid }
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The grid as carved so far.
    pub fn grid(&self) -> &TwoDimensionalMap<P> {
        &self.grid
    }

    pub fn into_inner(self) -> TwoDimensionalMap<P> {
        self.grid
    }

    /// Remove `vertical` seams (columns), then `horizontal` seams
    /// (rows).  Fails without touching the grid if either count would
    /// leave nothing behind.
    pub fn carve(&mut self, vertical: u32, horizontal: u32) -> Result<(), SeamError> {
        let (width, height) = self.grid.dimensions();
        check_request(width, height, vertical, horizontal)?;
        info!(
            "carving {} columns and {} rows from {}x{}",
            vertical, horizontal, width, height
        );

        for _ in 0..vertical {
            carveonce(&mut self.grid, Direction::Vertical);
            debug!("W: {}, {}", self.grid.width(), self.grid.height());
        }
        for _ in 0..horizontal {
            carveonce(&mut self.grid, Direction::Horizontal);
            debug!("H: {}, {}", self.grid.width(), self.grid.height());
        }

        info!("carved down to {}x{}", self.grid.width(), self.grid.height());
        Ok(())
    }

    /// Given a desired new width and height, carve until the grid is
    /// that size.
    pub fn resize(&mut self, new_width: u32, new_height: u32) -> Result<(), SeamError> {
        let (width, height) = self.grid.dimensions();
        if width < new_width || height < new_height {
            return Err(SeamError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        self.carve(width - new_width, height - new_height)
    }
}

/// Carve `vertical` columns and then `horizontal` rows out of a grid,
/// returning the smaller grid.  Its dimensions are the new (cols, rows).
pub fn seamcarve<P>(
    grid: TwoDimensionalMap<P>,
    vertical: u32,
    horizontal: u32,
) -> Result<TwoDimensionalMap<P>, SeamError>
where
    P: Default + Copy + Into<u32>,
{
    let mut carver = SeamCarver::new(grid);
    carver.carve(vertical, horizontal)?;
    Ok(carver.into_inner())
}
