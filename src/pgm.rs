// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Portable graymap input and output
//!
//! The carving engine only knows about grids of intensities.  This
//! module is the layer around it that turns PNM files into grids and
//! grids back into plain (P2) graymaps with a maxval of 255, using the
//! PNM codec from image.rs.

use crate::energy::EnergyMap;
use crate::twodmap::TwoDimensionalMap;
use failure::Error;
use image::codecs::pnm::{PnmSubtype, SampleEncoding};
use image::{DynamicImage, GrayImage, ImageFormat, ImageOutputFormat};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek, Write};
use std::path::Path;

/// An 8-bit grayscale grid.
pub type Graymap = TwoDimensionalMap<u8>;

/// Decode any PNM image.  Anything that isn't already 8-bit gray is
/// converted to 8-bit luma on the way in.
pub fn read_graymap<R: BufRead + Seek>(reader: R) -> Result<Graymap, Error> {
    let buf = image::load(reader, ImageFormat::Pnm)?.into_luma8();
    let (width, height) = buf.dimensions();
    Ok(Graymap::from_vec(width, height, buf.into_raw())?)
}

pub fn load_graymap<P: AsRef<Path>>(path: P) -> Result<Graymap, Error> {
    read_graymap(BufReader::new(File::open(path)?))
}

/// Encode as a plain-text (P2) graymap.  A `comment`, if given, goes on
/// its own `#` line straight after the magic number.
pub fn write_graymap<W: Write>(
    mut writer: W,
    graymap: &Graymap,
    comment: Option<&str>,
) -> Result<(), Error> {
    let (width, height) = graymap.dimensions();
    let buf = GrayImage::from_raw(width, height, graymap.as_slice().to_vec())
        .ok_or_else(|| failure::err_msg("graymap buffer does not match its dimensions"))?;

    // The encoder wants something seekable; stdout isn't.
    let mut encoded = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(buf).write_to(
        &mut encoded,
        ImageOutputFormat::Pnm(PnmSubtype::Graymap(SampleEncoding::Ascii)),
    )?;
    let encoded = encoded.into_inner();

    // Every PNM header opens with its two-byte magic number, and a
    // comment may follow any whitespace after it.
    match comment {
        Some(text) if encoded.len() > 2 => {
            let text = text.replace(|c: char| c == '\n' || c == '\r', " ");
            writer.write_all(&encoded[..2])?;
            write!(writer, "\n# {}\n", text)?;
            writer.write_all(&encoded[2..])?;
        }
        _ => writer.write_all(&encoded)?,
    }
    writer.flush()?;
    Ok(())
}

pub fn save_graymap<P: AsRef<Path>>(
    path: P,
    graymap: &Graymap,
    comment: Option<&str>,
) -> Result<(), Error> {
    write_graymap(File::create(path)?, graymap, comment)
}

/// Render an energy map as a graymap, scaled so that the highest
/// energy is white.  A map with no energy at all is black.
pub fn energy_to_graymap(energy: &EnergyMap) -> Graymap {
    let factor = energy.as_slice().iter().copied().max().unwrap_or(0);
    let samples = energy
        .as_slice()
        .iter()
        .map(|&e| {
            if factor == 0 {
                0
            } else {
                (e * 255 / factor) as u8
            }
        })
        .collect();
    let (width, height) = energy.dimensions();
    TwoDimensionalMap {
        width,
        height,
        data: samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "P2\n# a comment\n3 2\n255\n1 2 3\n4 5 250\n";

    #[test]
    fn reads_a_plain_graymap() {
        let graymap = read_graymap(Cursor::new(PLAIN.as_bytes())).unwrap();
        assert_eq!(graymap.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 250]]);
    }

    #[test]
    fn written_graymaps_read_back_the_same() {
        let graymap = read_graymap(Cursor::new(PLAIN.as_bytes())).unwrap();
        let mut out = Vec::new();
        write_graymap(&mut out, &graymap, None).unwrap();
        assert!(out.starts_with(b"P2"));
        assert_eq!(read_graymap(Cursor::new(out)).unwrap(), graymap);
    }

    #[test]
    fn comment_follows_the_magic_number() {
        let graymap = read_graymap(Cursor::new(PLAIN.as_bytes())).unwrap();
        let mut out = Vec::new();
        write_graymap(&mut out, &graymap, Some("photo_processed")).unwrap();
        let text = String::from_utf8(out.clone()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P2"));
        assert_eq!(lines.next(), Some("# photo_processed"));
        assert_eq!(read_graymap(Cursor::new(out)).unwrap(), graymap);
    }

    #[test]
    fn comments_stay_on_one_line() {
        let graymap = Graymap::from_vec(1, 1, vec![7]).unwrap();
        let mut out = Vec::new();
        write_graymap(&mut out, &graymap, Some("two\nlines")).unwrap();
        let text = String::from_utf8(out.clone()).unwrap();
        assert!(text.contains("# two lines\n"));
        assert_eq!(read_graymap(Cursor::new(out)).unwrap(), graymap);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(read_graymap(Cursor::new(&b"not an image"[..])).is_err());
    }

    #[test]
    fn energy_is_scaled_to_white() {
        let energy = EnergyMap::from_vec(3, 1, vec![0, 5, 10]).unwrap();
        assert_eq!(energy_to_graymap(&energy).as_slice(), &[0, 127, 255]);
    }

    #[test]
    fn flat_energy_is_black() {
        let energy = EnergyMap::new(2, 2);
        assert_eq!(energy_to_graymap(&energy).as_slice(), &[0, 0, 0, 0]);
    }
}
