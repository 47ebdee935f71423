use std::{
    collections::VecDeque,
    fs, io,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub const CAPACITY: usize = 100;

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Format(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Keeps the most recent entries in a JSON file, newest first.
pub struct FileLog {
    path: PathBuf,
    capacity: usize,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            capacity: CAPACITY,
        }
    }
}

impl Repository for FileLog {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(VecDeque::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.push_front(entry);
        entries.truncate(self.capacity);
        fs::write(&self.path, serde_json::to_string(&entries)?)?;
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// Installs the logger, which writes to standard error and to the repository set by
/// [`configure`].
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

pub fn configure(repository: Option<Arc<Mutex<dyn Repository>>>, level: LevelFilter) {
    if let Ok(mut log) = LOG.lock() {
        *log = repository;
    }
    log::set_max_level(level);
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

        let time = Local::now().format("%b %d %H:%M:%S").to_string();
        let message = record.args().to_string();
        eprintln!("{time} {:<5} {}: {message}", record.level(), record.target());

        let Ok(log) = LOG.lock() else {
            return;
        };
        if let Some(ref repository) = *log {
            if let Ok(repository) = repository.lock() {
                let _ = repository.write_entry(Entry {
                    time,
                    level: record.level(),
                    message,
                });
            }
        }
    }

    fn flush(&self) {}
}
