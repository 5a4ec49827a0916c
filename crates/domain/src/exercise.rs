use std::slice::Iter;

/// Movement category used to group exercises and to enforce session diversity.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Pattern {
    Push,
    Pull,
    Squat,
    Hinge,
    Accessory,
    Core,
    Mobility,
    Cardio,
    Dips,
}

impl Pattern {
    /// Main patterns may appear at most once per session. Accessory, core and mobility work may
    /// repeat.
    #[must_use]
    pub fn is_main(self) -> bool {
        !matches!(self, Pattern::Accessory | Pattern::Core | Pattern::Mobility)
    }

    #[must_use]
    pub fn is_lower_body_compound(self) -> bool {
        matches!(self, Pattern::Squat | Pattern::Hinge)
    }

    #[must_use]
    pub fn is_upper_body_compound(self) -> bool {
        matches!(self, Pattern::Push | Pattern::Pull)
    }
}

impl Property for Pattern {
    const KIND: &'static str = "pattern";

    fn iter() -> Iter<'static, Pattern> {
        static PATTERNS: [Pattern; 9] = [
            Pattern::Push,
            Pattern::Pull,
            Pattern::Squat,
            Pattern::Hinge,
            Pattern::Accessory,
            Pattern::Core,
            Pattern::Mobility,
            Pattern::Cardio,
            Pattern::Dips,
        ];
        PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Pattern::Push => "push",
            Pattern::Pull => "pull",
            Pattern::Squat => "squat",
            Pattern::Hinge => "hinge",
            Pattern::Accessory => "accessory",
            Pattern::Core => "core",
            Pattern::Mobility => "mobility",
            Pattern::Cardio => "cardio",
            Pattern::Dips => "dips",
        }
    }
}

/// How the result of an exercise is logged.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LogKind {
    LoadReps,
    Timed,
    Circuit,
}

impl Property for LogKind {
    const KIND: &'static str = "log type";

    fn iter() -> Iter<'static, LogKind> {
        static LOG_KINDS: [LogKind; 3] = [LogKind::LoadReps, LogKind::Timed, LogKind::Circuit];
        LOG_KINDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            LogKind::LoadReps => "loadreps",
            LogKind::Timed => "timed",
            LogKind::Circuit => "circuit",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Bodyweight,
    Barbell,
    Rack,
    Dumbbell,
    Cables,
    Landmine,
    PullUpBar,
    DipStation,
    Bench,
    Cardio,
}

impl Property for Equipment {
    const KIND: &'static str = "equipment";

    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 10] = [
            Equipment::Bodyweight,
            Equipment::Barbell,
            Equipment::Rack,
            Equipment::Dumbbell,
            Equipment::Cables,
            Equipment::Landmine,
            Equipment::PullUpBar,
            Equipment::DipStation,
            Equipment::Bench,
            Equipment::Cardio,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "bw",
            Equipment::Barbell => "barbell",
            Equipment::Rack => "rack",
            Equipment::Dumbbell => "dumbbell",
            Equipment::Cables => "cables",
            Equipment::Landmine => "landmine",
            Equipment::PullUpBar => "pullup",
            Equipment::DipStation => "dip",
            Equipment::Bench => "bench",
            Equipment::Cardio => "cardio",
        }
    }
}

macro_rules! display_property {
    ($($ty: ty),+) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                    write!(f, "{}", self.name())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = $crate::ParseError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Property>::from_name(s)
                }
            }
        )+
    };
}

pub(crate) use display_property;

display_property!(Pattern, LogKind, Equipment);

/// An enumerated value with a stable wire name.
pub trait Property: Clone + Copy + Sized + 'static {
    const KIND: &'static str;

    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;

    fn from_name(value: &str) -> Result<Self, ParseError> {
        Self::iter()
            .find(|p| p.name() == value)
            .copied()
            .ok_or_else(|| ParseError::Unknown {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown {kind} \"{value}\"")]
    Unknown { kind: &'static str, value: String },
    #[error("invalid number \"{0}\"")]
    InvalidNumber(String),
}
