use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::RwLock,
};

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use splitgen_domain::{
    DeleteError, ProgramBody, ProgramRecord, ProgramRepository, ReadError, StorageError,
    UpdateError, UserID,
};

/// Programs of all users kept in a single JSON object keyed by user ID.
///
/// The file is read once on opening and rewritten completely on every change. Records are
/// kept in their stored form, so entries that cannot be interpreted survive modifications of
/// other users' programs.
pub struct JsonFileStorage {
    path: PathBuf,
    programs: RwLock<BTreeMap<String, Value>>,
}

impl JsonFileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let programs = load(&path);
        Self {
            path,
            programs: RwLock::new(programs),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, programs: &BTreeMap<String, Value>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(programs)
            .map_err(|err| StorageError::Other(Box::new(err)))?;
        fs::write(&self.path, content)?;
        info!(
            "saved programs of {} users to {}",
            programs.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn load(path: &Path) -> BTreeMap<String, Value> {
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<BTreeMap<String, Value>>(&content) {
            Ok(programs) => {
                info!(
                    "loaded programs of {} users from {}",
                    programs.len(),
                    path.display()
                );
                programs
            }
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("{} does not exist, starting without programs", path.display());
            BTreeMap::new()
        }
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            BTreeMap::new()
        }
    }
}

impl ProgramRepository for JsonFileStorage {
    fn read_program(&self, user_id: &UserID) -> Result<Option<ProgramRecord>, ReadError> {
        let programs = self.programs.read().map_err(|_| StorageError::Unavailable)?;
        let Some(value) = programs.get(user_id.as_str()) else {
            return Ok(None);
        };
        match StoredProgram::deserialize(value) {
            Ok(stored) => Ok(Some(stored.into())),
            Err(err) => {
                warn!("ignoring invalid program of user {user_id}: {err}");
                Ok(None)
            }
        }
    }

    fn replace_program(&self, user_id: &UserID, record: ProgramRecord) -> Result<(), UpdateError> {
        let mut programs = self
            .programs
            .write()
            .map_err(|_| StorageError::Unavailable)?;
        let value = serde_json::to_value(StoredProgram::from(record))
            .map_err(|err| StorageError::Other(Box::new(err)))?;
        let previous = programs.insert(user_id.to_string(), value);
        if let Err(err) = self.save(&programs) {
            match previous {
                Some(previous) => programs.insert(user_id.to_string(), previous),
                None => programs.remove(user_id.as_str()),
            };
            return Err(err.into());
        }
        Ok(())
    }

    fn delete_program(&self, user_id: &UserID) -> Result<bool, DeleteError> {
        let mut programs = self
            .programs
            .write()
            .map_err(|_| StorageError::Unavailable)?;
        let Some(previous) = programs.remove(user_id.as_str()) else {
            return Ok(false);
        };
        if let Err(err) = self.save(&programs) {
            programs.insert(user_id.to_string(), previous);
            return Err(err.into());
        }
        Ok(true)
    }
}

#[derive(Serialize, Deserialize)]
struct StoredProgram {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    program: Option<StoredBody>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    days: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    sets_reps: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    kind: Option<String>,
}

/// Treats a metadata field of unexpected type as missing, so that its default applies.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(&value) {
        Ok(field) => Ok(Some(field)),
        Err(err) => {
            warn!("ignoring program field {value}: {err}");
            Ok(None)
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StoredBody {
    Shared(Vec<String>),
    PerDay(BTreeMap<String, Vec<String>>),
    Invalid(Value),
}

impl From<StoredProgram> for ProgramRecord {
    fn from(value: StoredProgram) -> Self {
        let program = match value.program {
            Some(StoredBody::Shared(exercises)) => Some(ProgramBody::Shared(exercises)),
            Some(StoredBody::PerDay(days)) => Some(ProgramBody::PerDay(days)),
            Some(StoredBody::Invalid(value)) => {
                warn!("ignoring program of invalid structure: {value}");
                None
            }
            None => None,
        };
        ProgramRecord {
            program,
            days: value.days,
            sets_reps: value.sets_reps,
            kind: value.kind,
        }
    }
}

impl From<ProgramRecord> for StoredProgram {
    fn from(value: ProgramRecord) -> Self {
        StoredProgram {
            program: value.program.map(|program| match program {
                ProgramBody::Shared(exercises) => StoredBody::Shared(exercises),
                ProgramBody::PerDay(days) => StoredBody::PerDay(days),
            }),
            days: value.days,
            sets_reps: value.sets_reps,
            kind: value.kind,
        }
    }
}
