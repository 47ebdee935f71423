use std::{fs, io, path::Path, path::PathBuf, str::FromStr};

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use splitgen_domain::{DEFAULT_TUTORIALS_URL, MAX_MESSAGE_LENGTH, ProgramTexts};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to access settings: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Format(#[from] serde_json::Error),
    #[error("invalid log level: {0}")]
    LogLevel(String),
    #[error("maximum message length must be positive")]
    MessageLength,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub store_path: PathBuf,
    pub max_message_length: usize,
    pub log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub tutorials_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("user_program.json"),
            max_message_length: MAX_MESSAGE_LENGTH,
            log_level: String::from("info"),
            log_file: None,
            tutorials_url: DEFAULT_TUTORIALS_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn level_filter(&self) -> Result<LevelFilter, Error> {
        LevelFilter::from_str(&self.log_level).map_err(|_| Error::LogLevel(self.log_level.clone()))
    }

    #[must_use]
    pub fn texts(&self) -> ProgramTexts {
        ProgramTexts {
            tutorials_url: self.tutorials_url.clone(),
        }
    }

    fn validate(self) -> Result<Self, Error> {
        self.level_filter()?;
        if self.max_message_length == 0 {
            return Err(Error::MessageLength);
        }
        Ok(self)
    }
}

/// Reads the settings, falling back to the defaults if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains invalid settings.
pub fn read_settings(path: &Path) -> Result<Settings, Error> {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str::<Settings>(&content)?.validate(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("{} does not exist, using default settings", path.display());
            Ok(Settings::default())
        }
        Err(err) => Err(err.into()),
    }
}

/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_settings(path: &Path, settings: &Settings) -> Result<(), Error> {
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}
