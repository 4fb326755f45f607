use std::{
    fmt,
    io::{self, Write},
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, Metadata, Record, SetLoggerError};

use crate::Settings;

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

pub trait Repository: Send + 'static {
    fn write_entry(&mut self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    pub level: Level,
    pub message: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:<5} {}", self.time, self.level, self.message)
    }
}

/// Writes each entry as one line to standard error.
pub struct Stderr;

impl Repository for Stderr {
    fn write_entry(&mut self, entry: Entry) -> Result<(), Error> {
        writeln!(io::stderr().lock(), "{entry}")?;
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(
    settings: &Settings,
    repository: Arc<Mutex<dyn Repository>>,
) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(settings.log_level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let Some(repository) = LOG.lock().ok().and_then(|log| log.clone()) else {
            return;
        };

        if let Ok(mut repository) = repository.lock() {
            let _ = repository.write_entry(Entry {
                time: Local::now().format("%b %d %H:%M:%S").to_string(),
                level: record.level(),
                message: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use pacer_domain::Package;

    use super::*;

    #[derive(Default)]
    struct Memory(Vec<Entry>);

    impl Repository for Memory {
        fn write_entry(&mut self, entry: Entry) -> Result<(), Error> {
            self.0.push(entry);
            Ok(())
        }
    }

    #[rstest]
    #[case(Level::Error, "Oct 19 12:00:00 ERROR foo")]
    #[case(Level::Warn, "Oct 19 12:00:00 WARN  foo")]
    #[case(Level::Debug, "Oct 19 12:00:00 DEBUG foo")]
    fn test_entry_display(#[case] level: Level, #[case] expected: &str) {
        assert_eq!(
            Entry {
                time: "Oct 19 12:00:00".to_string(),
                level,
                message: "foo".to_string(),
            }
            .to_string(),
            expected
        );
    }

    #[test]
    fn test_stderr_write_entry() {
        assert!(
            Stderr
                .write_entry(Entry {
                    time: "Oct 19 12:00:00".to_string(),
                    level: Level::Info,
                    message: "foo".to_string(),
                })
                .is_ok()
        );
    }

    // The logger is process-wide, so this is the only test installing it.
    #[test]
    fn test_logger() {
        let memory = Arc::new(Mutex::new(Memory::default()));
        init(
            &Settings {
                log_level: LevelFilter::Warn,
            },
            memory.clone(),
        )
        .unwrap();

        log::error!("disk full");
        log::warn!("low battery");
        log::info!("started");
        log::debug!("cache miss");
        crate::run(&[Package::new("XYZ", &[1.0, 1.0, 1.0])], &mut Vec::new()).unwrap();

        let entries = memory
            .lock()
            .unwrap()
            .0
            .iter()
            .map(|entry| (entry.level, entry.message.clone()))
            .collect::<Vec<_>>();

        assert!(entries.contains(&(Level::Error, "disk full".to_string())));
        assert!(entries.contains(&(Level::Warn, "low battery".to_string())));
        assert!(entries.contains(&(
            Level::Error,
            "failed to read XYZ package: Unknown workout code: XYZ".to_string()
        )));
        assert!(entries.iter().all(|(level, _)| *level <= Level::Warn));
    }
}
