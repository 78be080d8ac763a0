// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cumulative cost
//!
//! Every cell of the cost map holds the least total energy of any seam
//! that starts on the map's starting edge (the top row for vertical
//! seams, the left column for horizontal ones) and ends at that cell.
//! Each step depends only on the step before it, so the map is filled
//! in one step at a time:
//!
//! ```text
//!   cost(0, o) = energy(0, o)
//!   cost(s, o) = energy(s, o) + min(cost(s-1, o-1), cost(s-1, o), cost(s-1, o+1))
//! ```
//!
//! with out-of-range offsets left out of the min.

use crate::direction::{adjacent, Direction};
use crate::energy::EnergyMap;
use crate::twodmap::TwoDimensionalMap;

/// Cumulative costs, the same shape as the energy map.
pub type CostMap = TwoDimensionalMap<u64>;

/// Build the cost map for seams running in `direction`.
pub fn cumulative_cost(energy: &EnergyMap, direction: Direction) -> CostMap {
    let (along, across) = (direction.along(energy), direction.across(energy));
    let mut cost = CostMap::new(energy.width(), energy.height());

    // Populate the starting edge with their native energies.
    for offset in 0..across {
        let pt = direction.point(0, offset);
        cost[pt] = energy[pt];
    }

    // For every subsequent step, populate the target cell with its own
    // energy plus the *lowest adjacent cost* from the previous step.
    for step in 1..along {
        for offset in 0..across {
            let pt = direction.point(step, offset);
            let cheapest = adjacent(offset, across)
                .map(|o| cost[direction.point(step - 1, o)])
                .min()
                .unwrap_or(0);
            cost[pt] = energy[pt] + cheapest;
        }
    }
    cost
}

/// Costs accumulated top to bottom.
pub fn vertical_cost(energy: &EnergyMap) -> CostMap {
    cumulative_cost(energy, Direction::Vertical)
}

/// Costs accumulated left to right.
pub fn horizontal_cost(energy: &EnergyMap) -> CostMap {
    cumulative_cost(energy, Direction::Horizontal)
}
