use log::{error, info, warn};

use crate::{
    DeleteError, DisplayOutcome, ProgramRecord, ProgramRepository, ProgramService, ProgramTexts,
    ReadError, UpdateError, UserID, render_program,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: ProgramRepository> ProgramService for Service<R> {
    fn get_program(&self, user_id: &UserID) -> Result<Option<ProgramRecord>, ReadError> {
        log_on_error!(self.repository.read_program(user_id), "get", "program")
    }

    fn display_program(
        &self,
        user_id: &UserID,
        texts: &ProgramTexts,
    ) -> Result<DisplayOutcome, ReadError> {
        let Some(record) = self.get_program(user_id)? else {
            info!("no program found for user {user_id}");
            return Ok(DisplayOutcome::NoProgram);
        };

        let outcome = render_program(&record, texts);
        match outcome {
            DisplayOutcome::Messages(ref messages) => info!(
                "displaying {} program for user {user_id}: {} days, {} messages",
                record.kind(),
                record.days(),
                messages.len()
            ),
            DisplayOutcome::NoProgram => info!("no program found for user {user_id}"),
            DisplayOutcome::Unrenderable => {
                warn!("unable to display {} program of user {user_id}", record.kind());
            }
        }
        Ok(outcome)
    }

    fn replace_program(&self, user_id: &UserID, record: ProgramRecord) -> Result<(), UpdateError> {
        log_on_error!(
            self.repository.replace_program(user_id, record),
            "replace",
            "program"
        )
    }

    fn clear_program(&self, user_id: &UserID) -> Result<bool, DeleteError> {
        log_on_error!(
            self.repository.delete_program(user_id),
            "delete",
            "program"
        )
    }
}
