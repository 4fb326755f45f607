#![warn(clippy::pedantic)]

use std::io::{self, Write};

use ::log::error;
use pacer_domain::Package;

pub mod log;
pub mod settings;

pub use settings::{PACKAGES, Settings};

/// Write the summary of each package to `out`, one line per package and in the given order.
///
/// Packages that cannot be read are logged and skipped. Returns the number of skipped packages.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run<W: Write>(packages: &[Package], out: &mut W) -> io::Result<usize> {
    let mut skipped = 0;

    for package in packages {
        match package.read() {
            Ok(training) => writeln!(out, "{}", training.summary().message())?,
            Err(err) => {
                error!("failed to read {} package: {err}", package.code);
                skipped += 1;
            }
        }
    }

    Ok(skipped)
}
