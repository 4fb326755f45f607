use log::LevelFilter;

use pacer_domain::Package;

/// Sensor packages processed on each run.
pub const PACKAGES: &[Package<'static>] = &[
    Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    Package::new("RUN", &[15000.0, 1.0, 75.0]),
    Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
        }
    }
}
