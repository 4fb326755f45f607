#![warn(clippy::pedantic)]

use std::{
    io,
    sync::{Arc, Mutex},
};

use log::warn;

use pacer_cli::{PACKAGES, Settings, run};

fn main() -> anyhow::Result<()> {
    let settings = Settings::default();
    pacer_cli::log::init(&settings, Arc::new(Mutex::new(pacer_cli::log::Stderr)))?;

    let skipped = run(PACKAGES, &mut io::stdout().lock())?;

    if skipped > 0 {
        warn!("skipped {skipped} of {} packages", PACKAGES.len());
    }

    Ok(())
}
