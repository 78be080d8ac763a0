// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam finders
//!
//! A seam finder is anything that can look at a grid and say which
//! seam should go next.  The carver only ever talks to this trait.

use crate::cost::cumulative_cost;
use crate::direction::Direction;
use crate::energy::calculate_energy;
use crate::tracer::{trace_seam, Seam};
use crate::twodmap::TwoDimensionalMap;
use log::trace;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// finders.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request a horizontal seam.
    fn horizontal_seam(&self) -> Seam;

    /// Request a vertical seam.
    fn vertical_seam(&self) -> Seam;

    /// Request a seam running in `direction`.
    fn seam(&self, direction: Direction) -> Seam {
        match direction {
            Direction::Vertical => self.vertical_seam(),
            Direction::Horizontal => self.horizontal_seam(),
        }
    }
}

/// The classic seam engine: four-neighbour energy, cumulative cost,
/// cheapest path.  Everything is derived from scratch on every request;
/// nothing is cached between seams.
pub struct BackwardEnergy<'a, P: Default + Copy> {
    /// A reference to the grid we'll be examining.
    pub grid: &'a TwoDimensionalMap<P>,
}

impl<'a, P> BackwardEnergy<'a, P>
where
    P: Default + Copy + Into<u32>,
{
    /// Takes a reference to a grid, and holds onto it.
    pub fn new(grid: &'a TwoDimensionalMap<P>) -> Self {
        BackwardEnergy { grid }
    }

    fn find(&self, direction: Direction) -> Seam {
        let energy = calculate_energy(self.grid);
        trace!("energy:\n{}", energy);
        let cost = cumulative_cost(&energy, direction);
        trace!("{:?} cost:\n{}", direction, cost);
        let seam = trace_seam(&cost, direction);
        trace!("{:?} seam: {:?}", direction, seam);
        seam
    }
}

impl<'a, P> SeamFinder for BackwardEnergy<'a, P>
where
    P: Default + Copy + Into<u32>,
{
    fn horizontal_seam(&self) -> Seam {
        self.find(Direction::Horizontal)
    }

    fn vertical_seam(&self) -> Seam {
        self.find(Direction::Vertical)
    }
}
