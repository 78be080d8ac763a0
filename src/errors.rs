// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Nothing in here is transient.  Carving is deterministic, so a
//! request that fails once will fail every time, and the caller gets
//! the failure as-is.

use failure::Fail;
use std::fmt;

/// Which dimension a request was trying to shrink.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Axis {
    Columns,
    Rows,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Columns => write!(f, "columns"),
            Axis::Rows => write!(f, "rows"),
        }
    }
}

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum SeamError {
    /// The request would leave the image with no columns or no rows.
    /// Raised before any seam is removed.
    #[fail(
        display = "cannot carve {} {} from an image with {} {}",
        requested, axis, available, axis
    )]
    Configuration {
        axis: Axis,
        requested: u32,
        available: u32,
    },

    /// Seam carving only ever shrinks an image.
    #[fail(
        display = "seamcarve cannot upscale an image: {}x{} requested from {}x{}",
        new_width, new_height, width, height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },

    /// The grid handed to us is empty, ragged, or doesn't match its
    /// declared dimensions.
    #[fail(display = "malformed pixel grid: {}", _0)]
    MalformedInput(String),
}
