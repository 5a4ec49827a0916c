use std::collections::HashSet;

use crate::{Equipment, Pattern, Profile, SpineSensitivity, Tolerance, catalog};

/// Names and patterns already claimed by earlier blocks of the session under construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Claimed {
    pub names: HashSet<&'static str>,
    pub patterns: HashSet<Pattern>,
}

impl Claimed {
    pub fn claim(&mut self, exercise: &catalog::Exercise) {
        self.names.insert(exercise.name);
        self.patterns.insert(exercise.pattern);
    }

    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Decides which catalog exercises a profile may be given at a point in a session.
pub struct EligibilityFilter<'a> {
    profile: &'a Profile,
    equipment: HashSet<Equipment>,
}

impl<'a> EligibilityFilter<'a> {
    #[must_use]
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            equipment: profile.equipment.tags(),
        }
    }

    #[must_use]
    pub fn eligible(
        &self,
        exercise: &catalog::Exercise,
        claimed: &Claimed,
        preferred: Option<Pattern>,
    ) -> bool {
        if preferred.is_some_and(|p| p != exercise.pattern) {
            return false;
        }

        if self.profile.tolerances.avoids(exercise.pattern) {
            return false;
        }

        if !exercise.requires_any_of(&self.equipment) {
            return false;
        }

        if claimed.has_name(exercise.name) {
            return false;
        }

        if exercise.pattern.is_main() && claimed.patterns.contains(&exercise.pattern) {
            return false;
        }

        let name = exercise.name.to_lowercase();

        if self.profile.spine == SpineSensitivity::High && loads_spine(&name) {
            return false;
        }

        if name.contains("pull-up") && self.profile.tolerances.pullups != Tolerance::Good {
            return false;
        }

        if name == "dips" && self.profile.tolerances.dips != Tolerance::Good {
            return false;
        }

        true
    }

    /// Eligible exercises of the pool in catalog order.
    #[must_use]
    pub fn candidates(
        &self,
        pool: &'static [catalog::Exercise],
        claimed: &Claimed,
        preferred: Option<Pattern>,
    ) -> Vec<&'static catalog::Exercise> {
        pool.iter()
            .filter(|e| self.eligible(e, claimed, preferred))
            .collect()
    }
}

fn loads_spine(lowercase_name: &str) -> bool {
    lowercase_name.contains("deadlift")
        || lowercase_name == "squat"
        || lowercase_name == "back squat"
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{LogKind, OwnedEquipment, Tolerances, catalog::Pool};

    use super::*;

    fn exercise(name: &'static str, pattern: Pattern) -> catalog::Exercise {
        catalog::Exercise {
            name,
            pattern,
            log_kind: LogKind::LoadReps,
            equipment: &[Equipment::Bodyweight],
        }
    }

    fn profile() -> Profile {
        Profile {
            tolerances: Tolerances::all(Tolerance::Good),
            spine: SpineSensitivity::None,
            ..Profile::default()
        }
    }

    #[test]
    fn test_eligible_preferred_pattern() {
        let profile = profile();
        let filter = EligibilityFilter::new(&profile);
        let claimed = Claimed::default();
        let push_up = exercise("Push-up", Pattern::Push);

        assert!(filter.eligible(&push_up, &claimed, None));
        assert!(filter.eligible(&push_up, &claimed, Some(Pattern::Push)));
        assert!(!filter.eligible(&push_up, &claimed, Some(Pattern::Pull)));
    }

    #[rstest]
    #[case(Pattern::Squat)]
    #[case(Pattern::Hinge)]
    #[case(Pattern::Dips)]
    fn test_eligible_avoided_pattern(#[case] pattern: Pattern) {
        let mut profile = profile();
        let filter = EligibilityFilter::new(&profile);
        assert!(filter.eligible(&exercise("A", pattern), &Claimed::default(), None));

        profile.tolerances = Tolerances::all(Tolerance::Avoid);
        let filter = EligibilityFilter::new(&profile);
        assert!(!filter.eligible(&exercise("A", pattern), &Claimed::default(), None));
    }

    #[test]
    fn test_eligible_equipment() {
        let profile = Profile {
            equipment: OwnedEquipment::bodyweight_only(),
            ..profile()
        };
        let filter = EligibilityFilter::new(&profile);
        let landmine_press = catalog::Exercise {
            name: "Landmine press",
            pattern: Pattern::Push,
            log_kind: LogKind::LoadReps,
            equipment: &[Equipment::Landmine],
        };

        assert!(!filter.eligible(&landmine_press, &Claimed::default(), None));
        assert!(filter.eligible(
            &exercise("Push-up", Pattern::Push),
            &Claimed::default(),
            None
        ));
    }

    #[test]
    fn test_eligible_claimed_name() {
        let profile = profile();
        let filter = EligibilityFilter::new(&profile);
        let curl = exercise("Curl", Pattern::Accessory);
        let mut claimed = Claimed::default();
        claimed.claim(&curl);

        assert!(!filter.eligible(&curl, &claimed, None));
        assert!(filter.eligible(&exercise("Lateral raise", Pattern::Accessory), &claimed, None));
    }

    #[rstest]
    #[case(Pattern::Push, false)]
    #[case(Pattern::Squat, false)]
    #[case(Pattern::Cardio, false)]
    #[case(Pattern::Dips, false)]
    #[case(Pattern::Accessory, true)]
    #[case(Pattern::Core, true)]
    #[case(Pattern::Mobility, true)]
    fn test_eligible_claimed_pattern(#[case] pattern: Pattern, #[case] expected: bool) {
        let profile = profile();
        let filter = EligibilityFilter::new(&profile);
        let mut claimed = Claimed::default();
        claimed.claim(&exercise("A", pattern));

        assert_eq!(filter.eligible(&exercise("B", pattern), &claimed, None), expected);
    }

    #[rstest]
    #[case("Trap bar deadlift", Pattern::Hinge, false)]
    #[case("Squat", Pattern::Squat, false)]
    #[case("Back squat", Pattern::Squat, false)]
    #[case("Goblet squat", Pattern::Squat, true)]
    #[case("RDL (light/controlled)", Pattern::Hinge, true)]
    fn test_eligible_high_spine_sensitivity(
        #[case] name: &'static str,
        #[case] pattern: Pattern,
        #[case] expected: bool,
    ) {
        let mut profile = profile();
        let filter = EligibilityFilter::new(&profile);
        assert!(filter.eligible(&exercise(name, pattern), &Claimed::default(), None));

        profile.spine = SpineSensitivity::High;
        let filter = EligibilityFilter::new(&profile);
        assert_eq!(
            filter.eligible(&exercise(name, pattern), &Claimed::default(), None),
            expected
        );
    }

    #[rstest]
    #[case(Tolerance::Good, true)]
    #[case(Tolerance::Limited, false)]
    #[case(Tolerance::Avoid, false)]
    fn test_eligible_pull_up_and_dip_tolerance(
        #[case] tolerance: Tolerance,
        #[case] expected: bool,
    ) {
        let mut profile = profile();
        profile.tolerances.pullups = tolerance;
        profile.tolerances.dips = if tolerance == Tolerance::Avoid {
            Tolerance::Limited
        } else {
            tolerance
        };
        let filter = EligibilityFilter::new(&profile);

        assert_eq!(
            filter.eligible(
                &exercise("Pull-up (variation)", Pattern::Pull),
                &Claimed::default(),
                None
            ),
            expected
        );
        assert_eq!(
            filter.eligible(&exercise("Dips", Pattern::Dips), &Claimed::default(), None),
            expected
        );
    }

    #[test]
    fn test_candidates_keep_catalog_order() {
        let profile = Profile {
            equipment: OwnedEquipment::bodyweight_only(),
            ..profile()
        };
        let filter = EligibilityFilter::new(&profile);

        assert_eq!(
            filter
                .candidates(Pool::Squat.exercises(), &Claimed::default(), Some(Pattern::Squat))
                .iter()
                .map(|e| e.name)
                .collect::<Vec<_>>(),
            vec!["Split squat", "Step-up"]
        );
    }
}
