// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware shrinking of grayscale images by seam carving.

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod errors;
pub use errors::{Axis, SeamError};

pub mod direction;
pub use direction::Direction;

pub mod energy;
pub use energy::{calculate_energy, EnergyMap};

pub mod cost;
pub use cost::{cumulative_cost, horizontal_cost, vertical_cost, CostMap};

pub mod tracer;
pub use tracer::{trace_horizontal, trace_seam, trace_vertical, Seam};

pub mod seamremover;
pub use seamremover::{remove_horizontal_seam, remove_seam, remove_vertical_seam};

pub mod seamfinder;
pub use seamfinder::{BackwardEnergy, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{seamcarve, SeamCarver};

pub mod pgm;
pub use pgm::{energy_to_graymap, load_graymap, read_graymap, save_graymap, write_graymap, Graymap};
