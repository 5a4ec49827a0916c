use chrono::{DateTime, SubsecRound, Utc};
use log::info;
use uuid::Uuid;

use crate::{
    DeleteError, Frequency, Goal, ItemID, Profile, ReadError, Recovery, Session, SessionBuilder,
    SessionID, Style, Units, WriteError, recipes_for,
};

pub trait ProgramRepository {
    fn read_program(&self) -> Result<Option<Program>, ReadError>;
    /// Replaces any previously stored program.
    fn write_program(&self, program: &Program) -> Result<(), WriteError>;
    fn delete_program(&self) -> Result<(), DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub meta: ProgramMeta,
    pub sessions: Vec<Session>,
}

impl Program {
    #[must_use]
    pub fn session(&self, id: &SessionID) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == *id)
    }

    #[must_use]
    pub fn position(&self, id: &SessionID) -> Option<usize> {
        self.sessions.iter().position(|s| s.id == *id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramMeta {
    pub style: Style,
    pub goal: Goal,
    pub frequency: Frequency,
    pub recovery: Recovery,
    pub units: Units,
    pub created_at: DateTime<Utc>,
}

pub trait IdGenerator {
    fn next_session_id(&mut self) -> SessionID;
    fn next_item_id(&mut self) -> ItemID;
}

/// Sessions and items share one counter: `I1`, `I2`, ..., `S5`, `I6`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: u32,
}

impl SequentialIds {
    fn next(&mut self) -> u32 {
        self.counter += 1;
        self.counter
    }
}

impl IdGenerator for SequentialIds {
    fn next_session_id(&mut self) -> SessionID {
        format!("S{}", self.next()).into()
    }

    fn next_item_id(&mut self) -> ItemID {
        format!("I{}", self.next()).into()
    }
}

#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_session_id(&mut self) -> SessionID {
        Uuid::new_v4().to_string().into()
    }

    fn next_item_id(&mut self) -> ItemID {
        Uuid::new_v4().to_string().into()
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Default)]
pub struct ProgramAssembler<C = SystemClock> {
    clock: C,
}

impl<C: Clock> ProgramAssembler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Generates a program with fresh sequential identifiers.
    pub fn generate(&self, profile: &Profile) -> Program {
        self.generate_with(profile, &mut SequentialIds::default())
    }

    pub fn generate_with(&self, profile: &Profile, ids: &mut impl IdGenerator) -> Program {
        let frequency = profile.frequency;
        let meta = ProgramMeta {
            style: profile.style,
            goal: profile.goal,
            frequency,
            recovery: profile.recovery,
            units: profile.units,
            created_at: self.clock.now().trunc_subsecs(3),
        };

        let builder = SessionBuilder::new(profile);
        let sessions = recipes_for(profile.style, frequency)
            .iter()
            .enumerate()
            .map(|(index, recipe)| builder.build(recipe, index, ids))
            .collect::<Vec<_>>();

        info!(
            "generated {} program with {} sessions",
            profile,
            sessions.len()
        );

        Program { meta, sessions }
    }
}

/// Generates a program for the profile, stamped with the current time.
#[must_use]
pub fn generate(profile: &Profile) -> Program {
    ProgramAssembler::new(SystemClock).generate(profile)
}
