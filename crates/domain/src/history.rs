use std::{fmt, slice::Iter};

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    DeleteError, ItemID, LogKind, ParseError, Program, ReadError, Session, SessionID, SessionItem,
    Units, WriteError,
    exercise::{Property, display_property},
};

pub trait HistoryRepository {
    fn read_entries(&self) -> Result<Vec<LogEntry>, ReadError>;
    fn write_entry(&self, entry: LogEntry) -> Result<(), WriteError>;
    fn delete_entries(&self) -> Result<(), DeleteError>;
}

/// A logged result for one item of a program session.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
    pub session_id: SessionID,
    pub session_label: String,
    pub item_id: ItemID,
    pub item_name: String,
    pub result: LogResult,
    pub clean: bool,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogResult {
    LoadReps {
        weight: Option<f32>,
        reps: Option<u32>,
        units: LoadUnits,
    },
    Timed {
        seconds: Option<u32>,
        intensity: Option<Intensity>,
    },
    Circuit {
        rounds: Option<u32>,
        minutes: Option<f32>,
    },
}

impl LogResult {
    #[must_use]
    pub fn log_kind(&self) -> LogKind {
        match self {
            LogResult::LoadReps { .. } => LogKind::LoadReps,
            LogResult::Timed { .. } => LogKind::Timed,
            LogResult::Circuit { .. } => LogKind::Circuit,
        }
    }

    #[must_use]
    pub fn reps(&self) -> Option<u32> {
        match self {
            LogResult::LoadReps { reps, .. } => *reps,
            LogResult::Timed { .. } | LogResult::Circuit { .. } => None,
        }
    }
}

struct Unknown<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for Unknown<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "?"),
        }
    }
}

impl fmt::Display for LogResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LogResult::LoadReps {
                weight,
                reps,
                units,
            } => match units {
                LoadUnits::Bodyweight => write!(f, "bw × {}", Unknown(reps)),
                LoadUnits::BodyweightPlus => {
                    write!(f, "bw+{} × {}", Unknown(weight), Unknown(reps))
                }
                LoadUnits::Pounds | LoadUnits::Kilograms => {
                    write!(f, "{}{units} × {}", Unknown(weight), Unknown(reps))
                }
            },
            LogResult::Timed { seconds, .. } => write!(f, "{}s", Unknown(seconds)),
            LogResult::Circuit { rounds, minutes } => {
                write!(f, "{} rounds in {} min", Unknown(rounds), Unknown(minutes))
            }
        }
    }
}

/// Units a load is logged in. Bodyweight entries may add external load (`bw+`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LoadUnits {
    Pounds,
    Kilograms,
    Bodyweight,
    BodyweightPlus,
}

impl From<Units> for LoadUnits {
    fn from(value: Units) -> Self {
        match value {
            Units::Pounds => LoadUnits::Pounds,
            Units::Kilograms => LoadUnits::Kilograms,
        }
    }
}

impl Property for LoadUnits {
    const KIND: &'static str = "load units";

    fn iter() -> Iter<'static, LoadUnits> {
        static LOAD_UNITS: [LoadUnits; 4] = [
            LoadUnits::Pounds,
            LoadUnits::Kilograms,
            LoadUnits::Bodyweight,
            LoadUnits::BodyweightPlus,
        ];
        LOAD_UNITS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            LoadUnits::Pounds => "lb",
            LoadUnits::Kilograms => "kg",
            LoadUnits::Bodyweight => "bw",
            LoadUnits::BodyweightPlus => "bw+",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Intensity {
    Easy,
    Moderate,
    Hard,
}

impl Property for Intensity {
    const KIND: &'static str = "intensity";

    fn iter() -> Iter<'static, Intensity> {
        static INTENSITY: [Intensity; 3] = [Intensity::Easy, Intensity::Moderate, Intensity::Hard];
        INTENSITY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Intensity::Easy => "easy",
            Intensity::Moderate => "moderate",
            Intensity::Hard => "hard",
        }
    }
}

display_property!(LoadUnits, Intensity);

/// Most recent entry for the item. Of entries with equal timestamps the earliest logged wins.
#[must_use]
pub fn find_last<'a>(
    entries: &'a [LogEntry],
    session_id: &SessionID,
    item_id: &ItemID,
) -> Option<&'a LogEntry> {
    entries
        .iter()
        .filter(|e| e.session_id == *session_id && e.item_id == *item_id)
        .rev()
        .max_by_key(|e| e.timestamp)
}

/// The session following the one logged most recently, starting over after the last session.
#[must_use]
pub fn next_session<'a>(program: &'a Program, entries: &[LogEntry]) -> Option<&'a Session> {
    let first = program.sessions.first()?;
    let Some(last) = entries.iter().rev().max_by_key(|e| e.timestamp) else {
        return Some(first);
    };
    match program.position(&last.session_id) {
        Some(index) => program.sessions.get((index + 1) % program.sessions.len()),
        None => Some(first),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressHint {
    None,
    Target { rep_min: u32, rep_max: u32 },
    Earned { increment: f32 },
}

impl fmt::Display for ProgressHint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProgressHint::None => write!(f, "—"),
            ProgressHint::Target { rep_min, rep_max } => {
                write!(f, "Target {rep_min}-{rep_max} reps")
            }
            ProgressHint::Earned { increment } => write!(f, "Earned: next time +{increment}"),
        }
    }
}

/// Hint shown while logging a set of the item.
///
/// A load jump is earned once the item has been logged before and the current set is clean and
/// reaches the top of the rep range.
#[must_use]
pub fn progress_hint(
    item: &SessionItem,
    last: Option<&LogEntry>,
    clean: bool,
    reps: Option<u32>,
) -> ProgressHint {
    let Some(rule) = item.rule.filter(|_| item.log_kind == LogKind::LoadReps) else {
        return ProgressHint::None;
    };
    match reps {
        Some(reps) if last.is_some() && clean && rule.is_earned(reps) => ProgressHint::Earned {
            increment: rule.increment,
        },
        _ => ProgressHint::Target {
            rep_min: rule.rep_min,
            rep_max: rule.rep_max,
        },
    }
}
