use derive_more::{Deref, Display, From};

use crate::{DeleteError, DisplayOutcome, ProgramRecord, ProgramTexts, ReadError, UpdateError};

pub trait ProgramService {
    fn get_program(&self, user_id: &UserID) -> Result<Option<ProgramRecord>, ReadError>;
    fn display_program(
        &self,
        user_id: &UserID,
        texts: &ProgramTexts,
    ) -> Result<DisplayOutcome, ReadError>;
    fn replace_program(&self, user_id: &UserID, record: ProgramRecord) -> Result<(), UpdateError>;
    fn clear_program(&self, user_id: &UserID) -> Result<bool, DeleteError>;
}

/// Access to the stored programs of all users.
///
/// Read programs are owned snapshots, later changes to the storage do not affect them.
pub trait ProgramRepository {
    fn read_program(&self, user_id: &UserID) -> Result<Option<ProgramRecord>, ReadError>;
    fn replace_program(&self, user_id: &UserID, record: ProgramRecord) -> Result<(), UpdateError>;
    /// Returns whether a program was removed.
    fn delete_program(&self, user_id: &UserID) -> Result<bool, DeleteError>;
}

/// Chat user identifier, kept in its textual form.
#[derive(Deref, Display, From, Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserID(String);

impl From<i64> for UserID {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for UserID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
