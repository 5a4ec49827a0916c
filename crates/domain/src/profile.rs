use std::{collections::HashSet, fmt, slice::Iter};

use derive_more::{Deref, Display};

use crate::{
    Equipment, ParseError, Pattern, ReadError, WriteError,
    exercise::{Property, display_property},
};

pub trait ProfileRepository {
    fn read_profile(&self) -> Result<Option<Profile>, ReadError>;
    fn write_profile(&self, profile: &Profile) -> Result<(), WriteError>;
}

/// The input of program generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub style: Style,
    pub goal: Goal,
    pub frequency: Frequency,
    pub recovery: Recovery,
    pub units: Units,
    pub gender: Option<Gender>,
    pub equipment: OwnedEquipment,
    pub tolerances: Tolerances,
    pub spine: SpineSensitivity,
}

impl Profile {
    #[must_use]
    pub fn is_female(&self) -> bool {
        self.gender == Some(Gender::Female)
    }

    /// Wire name of the gender, `unspecified` if none was given.
    #[must_use]
    pub fn gender_name(&self) -> &'static str {
        self.gender.map_or("unspecified", Gender::name)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            style: Style::General,
            goal: Goal::Muscle,
            frequency: Frequency::default(),
            recovery: Recovery::Schedule,
            units: Units::Pounds,
            gender: None,
            equipment: OwnedEquipment::default(),
            tolerances: Tolerances::default(),
            spine: SpineSensitivity::High,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Style {
    General,
    Traditional,
    Hit,
    Calisthenics,
    Tactical,
    Pilates,
}

impl Property for Style {
    const KIND: &'static str = "style";

    fn iter() -> Iter<'static, Style> {
        static STYLES: [Style; 6] = [
            Style::General,
            Style::Traditional,
            Style::Hit,
            Style::Calisthenics,
            Style::Tactical,
            Style::Pilates,
        ];
        STYLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Style::General => "general",
            Style::Traditional => "traditional",
            Style::Hit => "hit",
            Style::Calisthenics => "calisthenics",
            Style::Tactical => "tactical",
            Style::Pilates => "pilates",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Goal {
    Muscle,
    Strength,
    Recomp,
    Endurance,
    Mobility,
}

impl Property for Goal {
    const KIND: &'static str = "goal";

    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 5] = [
            Goal::Muscle,
            Goal::Strength,
            Goal::Recomp,
            Goal::Endurance,
            Goal::Mobility,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Muscle => "muscle",
            Goal::Strength => "strength",
            Goal::Recomp => "recomp",
            Goal::Endurance => "endurance",
            Goal::Mobility => "mobility",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Recovery {
    Schedule,
    Recovered,
}

impl Property for Recovery {
    const KIND: &'static str = "recovery style";

    fn iter() -> Iter<'static, Recovery> {
        static RECOVERY: [Recovery; 2] = [Recovery::Schedule, Recovery::Recovered];
        RECOVERY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Recovery::Schedule => "schedule",
            Recovery::Recovered => "recovered",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Units {
    Pounds,
    Kilograms,
}

impl Units {
    /// Smallest load jump, also the default for hypertrophy and endurance work.
    #[must_use]
    pub fn small_increment(self) -> f32 {
        match self {
            Units::Pounds => 2.5,
            Units::Kilograms => 1.25,
        }
    }

    #[must_use]
    pub fn large_increment(self) -> f32 {
        match self {
            Units::Pounds => 5.0,
            Units::Kilograms => 2.5,
        }
    }
}

impl Property for Units {
    const KIND: &'static str = "unit system";

    fn iter() -> Iter<'static, Units> {
        static UNITS: [Units; 2] = [Units::Pounds, Units::Kilograms];
        UNITS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Units::Pounds => "lb",
            Units::Kilograms => "kg",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Gender {
    Male,
    Female,
}

impl Property for Gender {
    const KIND: &'static str = "gender";

    fn iter() -> Iter<'static, Gender> {
        static GENDER: [Gender; 2] = [Gender::Male, Gender::Female];
        GENDER.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tolerance {
    Good,
    Limited,
    Avoid,
}

impl Property for Tolerance {
    const KIND: &'static str = "movement tolerance";

    fn iter() -> Iter<'static, Tolerance> {
        static TOLERANCE: [Tolerance; 3] = [Tolerance::Good, Tolerance::Limited, Tolerance::Avoid];
        TOLERANCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Tolerance::Good => "good",
            Tolerance::Limited => "limited",
            Tolerance::Avoid => "avoid",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SpineSensitivity {
    None,
    Mild,
    High,
}

impl Property for SpineSensitivity {
    const KIND: &'static str = "spine sensitivity";

    fn iter() -> Iter<'static, SpineSensitivity> {
        static SPINE: [SpineSensitivity; 3] = [
            SpineSensitivity::None,
            SpineSensitivity::Mild,
            SpineSensitivity::High,
        ];
        SPINE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SpineSensitivity::None => "none",
            SpineSensitivity::Mild => "mild",
            SpineSensitivity::High => "high",
        }
    }
}

display_property!(
    Style,
    Goal,
    Recovery,
    Units,
    Gender,
    Tolerance,
    SpineSensitivity
);

/// Sessions per week, always within [`Frequency::MIN`] and [`Frequency::MAX`].
#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frequency(u32);

impl Frequency {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 6;

    /// Out-of-range values are clamped, never rejected.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<&str> for Frequency {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<i64>() {
            Ok(parsed_value) => Ok(Frequency::new(parsed_value)),
            Err(_) => Err(ParseError::InvalidNumber(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct OwnedEquipment {
    /// Barbell and rack.
    pub barbell: bool,
    pub dumbbell: bool,
    pub cables: bool,
    pub landmine: bool,
    pub pullup: bool,
    pub dip: bool,
    pub bench: bool,
    pub cardio: bool,
}

impl OwnedEquipment {
    #[must_use]
    pub fn bodyweight_only() -> Self {
        Self {
            barbell: false,
            dumbbell: false,
            cables: false,
            landmine: false,
            pullup: false,
            dip: false,
            bench: false,
            cardio: false,
        }
    }

    /// Owned equipment covering the given tags. A rack counts as a barbell setup, bodyweight needs
    /// nothing.
    #[must_use]
    pub fn from_tags(tags: impl IntoIterator<Item = Equipment>) -> Self {
        let mut owned = Self::bodyweight_only();
        for tag in tags {
            match tag {
                Equipment::Bodyweight => {}
                Equipment::Barbell | Equipment::Rack => owned.barbell = true,
                Equipment::Dumbbell => owned.dumbbell = true,
                Equipment::Cables => owned.cables = true,
                Equipment::Landmine => owned.landmine = true,
                Equipment::PullUpBar => owned.pullup = true,
                Equipment::DipStation => owned.dip = true,
                Equipment::Bench => owned.bench = true,
                Equipment::Cardio => owned.cardio = true,
            }
        }
        owned
    }

    /// Equipment tags available to the profile. Bodyweight is always available.
    #[must_use]
    pub fn tags(&self) -> HashSet<Equipment> {
        let mut tags = HashSet::from([Equipment::Bodyweight]);
        if self.barbell {
            tags.extend([Equipment::Barbell, Equipment::Rack]);
        }
        for (owned, tag) in [
            (self.dumbbell, Equipment::Dumbbell),
            (self.cables, Equipment::Cables),
            (self.landmine, Equipment::Landmine),
            (self.pullup, Equipment::PullUpBar),
            (self.dip, Equipment::DipStation),
            (self.bench, Equipment::Bench),
            (self.cardio, Equipment::Cardio),
        ] {
            if owned {
                tags.insert(tag);
            }
        }
        tags
    }
}

impl Default for OwnedEquipment {
    fn default() -> Self {
        Self {
            barbell: true,
            dumbbell: true,
            cables: true,
            landmine: false,
            pullup: true,
            dip: true,
            bench: true,
            cardio: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerances {
    pub squat: Tolerance,
    pub hinge: Tolerance,
    pub overhead: Tolerance,
    pub dips: Tolerance,
    pub pullups: Tolerance,
}

impl Tolerances {
    #[must_use]
    pub fn all(tolerance: Tolerance) -> Self {
        Self {
            squat: tolerance,
            hinge: tolerance,
            overhead: tolerance,
            dips: tolerance,
            pullups: tolerance,
        }
    }

    /// Whether exercises of the given pattern are ruled out entirely.
    ///
    /// The overhead rating has no catalog pattern of its own and never excludes by pattern.
    #[must_use]
    pub fn avoids(&self, pattern: Pattern) -> bool {
        let tolerance = match pattern {
            Pattern::Squat => self.squat,
            Pattern::Hinge => self.hinge,
            Pattern::Dips => self.dips,
            _ => return false,
        };
        tolerance == Tolerance::Avoid
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            squat: Tolerance::Limited,
            hinge: Tolerance::Limited,
            overhead: Tolerance::Limited,
            dips: Tolerance::Good,
            pullups: Tolerance::Good,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}d/w / {}",
            self.style, self.goal, self.frequency, self.units
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(-3, 2)]
    #[case(1, 2)]
    #[case(2, 2)]
    #[case(4, 4)]
    #[case(6, 6)]
    #[case(10, 6)]
    fn test_frequency_new(#[case] value: i64, #[case] expected: u32) {
        assert_eq!(*Frequency::new(value), expected);
    }

    #[rstest]
    #[case("3", Ok(Frequency::new(3)))]
    #[case(" 5 ", Ok(Frequency::new(5)))]
    #[case("12", Ok(Frequency::new(6)))]
    #[case("three", Err(ParseError::InvalidNumber("three".to_string())))]
    fn test_frequency_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<Frequency, ParseError>,
    ) {
        assert_eq!(Frequency::try_from(value), expected);
    }

    #[test]
    fn test_owned_equipment_tags() {
        assert_eq!(
            OwnedEquipment::bodyweight_only().tags(),
            HashSet::from([Equipment::Bodyweight])
        );
        assert_eq!(
            OwnedEquipment {
                barbell: true,
                cardio: true,
                ..OwnedEquipment::bodyweight_only()
            }
            .tags(),
            HashSet::from([
                Equipment::Bodyweight,
                Equipment::Barbell,
                Equipment::Rack,
                Equipment::Cardio
            ])
        );
    }

    #[test]
    fn test_owned_equipment_from_tags() {
        assert_eq!(
            OwnedEquipment::from_tags([Equipment::Bodyweight]),
            OwnedEquipment::bodyweight_only()
        );
        assert_eq!(
            OwnedEquipment::from_tags([
                Equipment::Rack,
                Equipment::PullUpBar,
                Equipment::DipStation
            ]),
            OwnedEquipment {
                barbell: true,
                pullup: true,
                dip: true,
                ..OwnedEquipment::bodyweight_only()
            }
        );
        let owned = OwnedEquipment::default();
        assert_eq!(OwnedEquipment::from_tags(owned.tags()), owned);
    }

    #[rstest]
    #[case(Pattern::Squat, true)]
    #[case(Pattern::Hinge, false)]
    #[case(Pattern::Dips, true)]
    #[case(Pattern::Push, false)]
    #[case(Pattern::Pull, false)]
    fn test_tolerances_avoids(#[case] pattern: Pattern, #[case] expected: bool) {
        let tolerances = Tolerances {
            squat: Tolerance::Avoid,
            hinge: Tolerance::Limited,
            overhead: Tolerance::Avoid,
            dips: Tolerance::Avoid,
            pullups: Tolerance::Avoid,
        };
        assert_eq!(tolerances.avoids(pattern), expected);
    }

    #[rstest]
    #[case(Units::Pounds, 2.5, 5.0)]
    #[case(Units::Kilograms, 1.25, 2.5)]
    fn test_units_increments(#[case] units: Units, #[case] small: f32, #[case] large: f32) {
        assert_approx_eq::assert_approx_eq!(units.small_increment(), small);
        assert_approx_eq::assert_approx_eq!(units.large_increment(), large);
    }

    #[test]
    fn test_profile_gender_name() {
        let mut profile = Profile::default();
        assert_eq!(profile.gender_name(), "unspecified");
        profile.gender = Some(Gender::Female);
        assert_eq!(profile.gender_name(), "female");
        assert!(profile.is_female());
    }

    #[test]
    fn test_profile_display() {
        assert_eq!(Profile::default().to_string(), "general / muscle / 3d/w / lb");
    }
}
