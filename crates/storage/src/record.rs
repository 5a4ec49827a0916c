//! Serializable records in the interchange format shared with stored programs, profiles and logs.

use atl_domain::{self as domain, ParseError, Property};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid timestamp {0}")]
    InvalidTimestamp(i64),
}

/// A number that older records store as a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Text(String),
}

impl From<domain::Frequency> for Number {
    fn from(value: domain::Frequency) -> Self {
        Number::Integer(i64::from(*value))
    }
}

impl TryFrom<Number> for domain::Frequency {
    type Error = ParseError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::Integer(value) => Ok(domain::Frequency::new(value)),
            Number::Text(value) => domain::Frequency::try_from(value.as_str()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub meta: ProgramMeta,
    pub sessions: Vec<Session>,
}

impl From<&domain::Program> for Program {
    fn from(value: &domain::Program) -> Self {
        Self {
            meta: ProgramMeta::from(&value.meta),
            sessions: value.sessions.iter().map(Session::from).collect(),
        }
    }
}

impl TryFrom<Program> for domain::Program {
    type Error = RecordError;

    fn try_from(value: Program) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: domain::ProgramMeta::try_from(value.meta)?,
            sessions: value
                .sessions
                .into_iter()
                .map(domain::Session::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramMeta {
    pub style: String,
    pub goal: String,
    pub freq: Number,
    #[serde(default)]
    pub recovery: Option<String>,
    pub units: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl From<&domain::ProgramMeta> for ProgramMeta {
    fn from(value: &domain::ProgramMeta) -> Self {
        Self {
            style: value.style.to_string(),
            goal: value.goal.to_string(),
            freq: value.frequency.into(),
            recovery: Some(value.recovery.to_string()),
            units: value.units.to_string(),
            created_at: value.created_at.timestamp_millis(),
        }
    }
}

impl TryFrom<ProgramMeta> for domain::ProgramMeta {
    type Error = RecordError;

    fn try_from(value: ProgramMeta) -> Result<Self, Self::Error> {
        Ok(Self {
            style: value.style.parse()?,
            goal: value.goal.parse()?,
            frequency: domain::Frequency::try_from(value.freq)?,
            recovery: value
                .recovery
                .map_or(Ok(domain::Recovery::Schedule), |r| r.parse())?,
            units: value.units.parse()?,
            created_at: DateTime::from_timestamp_millis(value.created_at)
                .ok_or(RecordError::InvalidTimestamp(value.created_at))?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub label: String,
    pub items: Vec<SessionItem>,
}

impl From<&domain::Session> for Session {
    fn from(value: &domain::Session) -> Self {
        Self {
            id: value.id.to_string(),
            label: value.label.clone(),
            items: value.items.iter().map(SessionItem::from).collect(),
        }
    }
}

impl TryFrom<Session> for domain::Session {
    type Error = RecordError;

    fn try_from(value: Session) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            label: value.label,
            items: value
                .items
                .into_iter()
                .map(domain::SessionItem::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionItem {
    pub id: String,
    pub name: String,
    pub log_type: String,
    pub pattern: String,
    #[serde(default)]
    pub rule: Option<ProgressionRule>,
    pub default_units: String,
}

impl From<&domain::SessionItem> for SessionItem {
    fn from(value: &domain::SessionItem) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            log_type: value.log_kind.to_string(),
            pattern: value.pattern.to_string(),
            rule: value.rule.as_ref().map(ProgressionRule::from),
            default_units: value.default_units.to_string(),
        }
    }
}

impl TryFrom<SessionItem> for domain::SessionItem {
    type Error = RecordError;

    fn try_from(value: SessionItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: value.name,
            log_kind: value.log_type.parse()?,
            pattern: value.pattern.parse()?,
            rule: value
                .rule
                .map(domain::ProgressionRule::try_from)
                .transpose()?,
            default_units: value.default_units.parse()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionRule {
    pub rep_min: u32,
    pub rep_max: u32,
    pub inc: f32,
    pub trigger: String,
}

impl From<&domain::ProgressionRule> for ProgressionRule {
    fn from(value: &domain::ProgressionRule) -> Self {
        Self {
            rep_min: value.rep_min,
            rep_max: value.rep_max,
            inc: value.increment,
            trigger: value.trigger.name().to_string(),
        }
    }
}

impl TryFrom<ProgressionRule> for domain::ProgressionRule {
    type Error = ParseError;

    fn try_from(value: ProgressionRule) -> Result<Self, Self::Error> {
        Ok(Self {
            rep_min: value.rep_min,
            rep_max: value.rep_max,
            increment: value.inc,
            trigger: domain::Trigger::from_name(&value.trigger)?,
        })
    }
}

/// Builder configuration. Missing fields take the default profile's values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Profile {
    pub style: String,
    pub goal: String,
    pub freq: Number,
    pub recovery: String,
    pub units: String,
    pub gender: String,

    pub eq_barbell: bool,
    pub eq_dumbbell: bool,
    pub eq_cables: bool,
    pub eq_landmine: bool,
    pub eq_pullup: bool,
    pub eq_dip: bool,
    pub eq_bench: bool,
    pub eq_cardio: bool,

    pub mv_squat: String,
    pub mv_hinge: String,
    pub mv_overhead: String,
    pub mv_dips: String,
    pub mv_pullups: String,
    pub inj_spine: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self::from(&domain::Profile::default())
    }
}

impl From<&domain::Profile> for Profile {
    fn from(value: &domain::Profile) -> Self {
        let equipment = &value.equipment;
        let tolerances = &value.tolerances;
        Self {
            style: value.style.to_string(),
            goal: value.goal.to_string(),
            freq: Number::Text(value.frequency.to_string()),
            recovery: value.recovery.to_string(),
            units: value.units.to_string(),
            gender: value.gender_name().to_string(),
            eq_barbell: equipment.barbell,
            eq_dumbbell: equipment.dumbbell,
            eq_cables: equipment.cables,
            eq_landmine: equipment.landmine,
            eq_pullup: equipment.pullup,
            eq_dip: equipment.dip,
            eq_bench: equipment.bench,
            eq_cardio: equipment.cardio,
            mv_squat: tolerances.squat.to_string(),
            mv_hinge: tolerances.hinge.to_string(),
            mv_overhead: tolerances.overhead.to_string(),
            mv_dips: tolerances.dips.to_string(),
            mv_pullups: tolerances.pullups.to_string(),
            inj_spine: value.spine.to_string(),
        }
    }
}

impl TryFrom<Profile> for domain::Profile {
    type Error = ParseError;

    fn try_from(value: Profile) -> Result<Self, Self::Error> {
        Ok(Self {
            style: value.style.parse()?,
            goal: value.goal.parse()?,
            frequency: domain::Frequency::try_from(value.freq)?,
            recovery: value.recovery.parse()?,
            units: value.units.parse()?,
            gender: match value.gender.as_str() {
                "" | "unspecified" => None,
                gender => Some(gender.parse()?),
            },
            equipment: domain::OwnedEquipment {
                barbell: value.eq_barbell,
                dumbbell: value.eq_dumbbell,
                cables: value.eq_cables,
                landmine: value.eq_landmine,
                pullup: value.eq_pullup,
                dip: value.eq_dip,
                bench: value.eq_bench,
                cardio: value.eq_cardio,
            },
            tolerances: domain::Tolerances {
                squat: value.mv_squat.parse()?,
                hinge: value.mv_hinge.parse()?,
                overhead: value.mv_overhead.parse()?,
                dips: value.mv_dips.parse()?,
                pullups: value.mv_pullups.parse()?,
            },
            spine: value.inj_spine.parse()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
    pub date: NaiveDate,
    pub session_id: String,
    #[serde(default)]
    pub session_label: String,
    pub item_id: String,
    #[serde(default)]
    pub item_name: String,
    pub log_type: String,
    pub result: LogResult,
    #[serde(default)]
    pub clean: bool,
    #[serde(default)]
    pub notes: String,
}

impl From<&domain::LogEntry> for LogEntry {
    fn from(value: &domain::LogEntry) -> Self {
        Self {
            ts: value.timestamp.timestamp_millis(),
            date: value.date,
            session_id: value.session_id.to_string(),
            session_label: value.session_label.clone(),
            item_id: value.item_id.to_string(),
            item_name: value.item_name.clone(),
            log_type: value.result.log_kind().to_string(),
            result: LogResult::from(&value.result),
            clean: value.clean,
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<LogEntry> for domain::LogEntry {
    type Error = RecordError;

    fn try_from(value: LogEntry) -> Result<Self, Self::Error> {
        let log_kind = value.log_type.parse::<domain::LogKind>()?;
        Ok(Self {
            timestamp: DateTime::from_timestamp_millis(value.ts)
                .ok_or(RecordError::InvalidTimestamp(value.ts))?,
            date: value.date,
            session_id: value.session_id.into(),
            session_label: value.session_label,
            item_id: value.item_id.into(),
            item_name: value.item_name,
            result: value.result.into_domain(log_kind)?,
            clean: value.clean,
            notes: value.notes,
        })
    }
}

/// Logged values. Which fields are present depends on the entry's log type.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct LogResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f32>,
}

impl LogResult {
    fn into_domain(self, log_kind: domain::LogKind) -> Result<domain::LogResult, ParseError> {
        Ok(match log_kind {
            domain::LogKind::LoadReps => domain::LogResult::LoadReps {
                weight: self.weight,
                reps: self.reps,
                units: self
                    .units
                    .as_deref()
                    .map_or(Ok(domain::LoadUnits::Pounds), str::parse)?,
            },
            domain::LogKind::Timed => domain::LogResult::Timed {
                seconds: self.seconds,
                intensity: match self.intensity.as_deref() {
                    None | Some("") => None,
                    Some(intensity) => Some(intensity.parse()?),
                },
            },
            domain::LogKind::Circuit => domain::LogResult::Circuit {
                rounds: self.rounds,
                minutes: self.minutes,
            },
        })
    }
}

impl From<&domain::LogResult> for LogResult {
    fn from(value: &domain::LogResult) -> Self {
        match *value {
            domain::LogResult::LoadReps {
                weight,
                reps,
                units,
            } => Self {
                weight,
                reps,
                units: Some(units.to_string()),
                ..Self::default()
            },
            domain::LogResult::Timed { seconds, intensity } => Self {
                seconds,
                intensity: intensity.map(|i| i.to_string()),
                ..Self::default()
            },
            domain::LogResult::Circuit { rounds, minutes } => Self {
                rounds,
                minutes,
                ..Self::default()
            },
        }
    }
}
