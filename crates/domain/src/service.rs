use log::{debug, error};

use crate::{
    Clock, DeleteError, HistoryRepository, LogEntry, Profile, ProfileRepository, Program,
    ProgramAssembler, ProgramRepository, ReadError, Session, SystemClock, WriteError, next_session,
};

pub struct Service<R, C = SystemClock> {
    repository: R,
    assembler: ProgramAssembler<C>,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R, C: Clock> Service<R, C> {
    pub fn with_clock(repository: R, clock: C) -> Self {
        Self {
            repository,
            assembler: ProgramAssembler::new(clock),
        }
    }

    /// The clock stamping generated programs, for anything else recorded alongside them.
    #[must_use]
    pub fn clock(&self) -> &C {
        self.assembler.clock()
    }
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: ProfileRepository, C> Service<R, C> {
    /// The stored profile, or the default profile if none has been stored yet.
    pub fn get_profile(&self) -> Result<Profile, ReadError> {
        let profile = log_on_error!(self.repository.read_profile(), "get", "profile")?;
        if profile.is_none() {
            debug!("no stored profile, using defaults");
        }
        Ok(profile.unwrap_or_default())
    }

    pub fn set_profile(&self, profile: &Profile) -> Result<(), WriteError> {
        log_on_error!(self.repository.write_profile(profile), "set", "profile")
    }
}

impl<R: ProgramRepository, C: Clock> Service<R, C> {
    /// Generates a program for the profile and stores it in place of the previous one.
    pub fn generate_program(&self, profile: &Profile) -> Result<Program, WriteError> {
        let program = self.assembler.generate(profile);
        log_on_error!(self.repository.write_program(&program), "store", "program")?;
        Ok(program)
    }

    pub fn get_program(&self) -> Result<Option<Program>, ReadError> {
        log_on_error!(self.repository.read_program(), "get", "program")
    }

    pub fn delete_program(&self) -> Result<(), DeleteError> {
        log_on_error!(self.repository.delete_program(), "delete", "program")
    }
}

impl<R: HistoryRepository, C> Service<R, C> {
    pub fn add_log_entry(&self, entry: LogEntry) -> Result<(), WriteError> {
        log_on_error!(self.repository.write_entry(entry), "add", "log entry")
    }

    pub fn get_log_entries(&self) -> Result<Vec<LogEntry>, ReadError> {
        log_on_error!(self.repository.read_entries(), "get", "log entries")
    }

    pub fn delete_log_entries(&self) -> Result<(), DeleteError> {
        log_on_error!(self.repository.delete_entries(), "delete", "log entries")
    }
}

impl<R: ProgramRepository + HistoryRepository, C: Clock> Service<R, C> {
    /// The session to train next, `None` if no program is stored or it has no sessions.
    pub fn next_session(&self) -> Result<Option<Session>, ReadError> {
        let Some(program) = self.get_program()? else {
            return Ok(None);
        };
        let entries = self.get_log_entries()?;
        Ok(next_session(&program, &entries).cloned())
    }
}
