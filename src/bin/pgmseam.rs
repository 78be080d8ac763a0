// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use pgmseam::{calculate_energy, energy_to_graymap, load_graymap, save_graymap, write_graymap};
use pgmseam::{Graymap, SeamCarver};

use std::io;
use std::path::{Path, PathBuf};
use std::process;

#[macro_use]
extern crate clap;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use log::info;

// foo/bar.pgm -> bar_processed
fn processed_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}_processed", stem)
}

// foo/bar.pgm -> foo/bar_processed.pgm
fn default_output(input: &Path) -> PathBuf {
    input.with_file_name(format!("{}.pgm", processed_name(input)))
}

fn emit(graymap: &Graymap, output: &str, comment: &str) -> Result<(), Error> {
    if output == "-" {
        let stdout = io::stdout();
        write_graymap(stdout.lock(), graymap, Some(comment))
    } else {
        info!("writing {}", output);
        save_graymap(output, graymap, Some(comment))
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = Path::new(matches.value_of("pgmfile").unwrap_or_default());
    let columns = value_t!(matches, "columns", u32)?;
    let rows = value_t!(matches, "rows", u32)?;
    let output = match matches.value_of("output") {
        Some(path) => path.to_string(),
        None => default_output(input).to_string_lossy().into_owned(),
    };

    let image = load_graymap(input)?;
    info!("read {} ({}x{})", input.display(), image.width(), image.height());

    if matches.is_present("energy") {
        let comment = format!("{}_energy", processed_name(input));
        return emit(&energy_to_graymap(&calculate_energy(&image)), &output, &comment);
    }

    let mut carver = SeamCarver::new(image);
    carver.carve(columns, rows)?;
    emit(carver.grid(), &output, &processed_name(input))
}

fn main() {
    env_logger::init();

    let matches = App::new("pgmseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Seam carving for portable graymaps")
        .arg(
            Arg::with_name("pgmfile")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("columns")
                .help("How many columns (vertical seams) to remove")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("rows")
                .help("How many rows (horizontal seams) to remove")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; '-' for stdout [default: <pgmfile>_processed.pgm]")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the image's energy map instead of carving it")
                .long("energy"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("pgmseam: {}", err);
        process::exit(1);
    }
}
