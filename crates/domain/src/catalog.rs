use std::slice::Iter;

use crate::{Equipment, LogKind, Pattern, Property};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub pattern: Pattern,
    pub log_kind: LogKind,
    /// The exercise can be performed with any one of these.
    pub equipment: &'static [Equipment],
}

impl Exercise {
    #[must_use]
    pub fn requires_any_of(&self, tags: &std::collections::HashSet<Equipment>) -> bool {
        self.equipment.iter().any(|e| tags.contains(e))
    }
}

/// Named group of exercises a recipe block draws from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Pool {
    Push,
    Pull,
    Squat,
    Hinge,
    Accessory,
    Core,
    Mobility,
    Cardio,
    Tactical,
    Calisthenics,
}

impl Pool {
    /// Exercises of the pool. Order is the tie-break basis for selection and must stay stable.
    #[must_use]
    pub fn exercises(self) -> &'static [Exercise] {
        match self {
            Pool::Push => PUSH,
            Pool::Pull => PULL,
            Pool::Squat => SQUAT,
            Pool::Hinge => HINGE,
            Pool::Accessory => ACCESSORY,
            Pool::Core => CORE,
            Pool::Mobility => MOBILITY,
            Pool::Cardio => CARDIO,
            Pool::Tactical => TACTICAL,
            Pool::Calisthenics => CALISTHENICS,
        }
    }
}

impl Property for Pool {
    const KIND: &'static str = "pool";

    fn iter() -> Iter<'static, Pool> {
        static POOLS: [Pool; 10] = [
            Pool::Push,
            Pool::Pull,
            Pool::Squat,
            Pool::Hinge,
            Pool::Accessory,
            Pool::Core,
            Pool::Mobility,
            Pool::Cardio,
            Pool::Tactical,
            Pool::Calisthenics,
        ];
        POOLS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Pool::Push => "push",
            Pool::Pull => "pull",
            Pool::Squat => "squat",
            Pool::Hinge => "hinge",
            Pool::Accessory => "accessories",
            Pool::Core => "core",
            Pool::Mobility => "mobility",
            Pool::Cardio => "cardio",
            Pool::Tactical => "tactical",
            Pool::Calisthenics => "calisthenics",
        }
    }
}

const fn load_reps(
    name: &'static str,
    pattern: Pattern,
    equipment: &'static [Equipment],
) -> Exercise {
    Exercise {
        name,
        pattern,
        log_kind: LogKind::LoadReps,
        equipment,
    }
}

const fn timed(name: &'static str, pattern: Pattern, equipment: &'static [Equipment]) -> Exercise {
    Exercise {
        name,
        pattern,
        log_kind: LogKind::Timed,
        equipment,
    }
}

const PUSH: &[Exercise] = &[
    load_reps(
        "Incline press",
        Pattern::Push,
        &[Equipment::Bench, Equipment::Barbell, Equipment::Dumbbell],
    ),
    load_reps(
        "Flat press",
        Pattern::Push,
        &[Equipment::Bench, Equipment::Barbell, Equipment::Dumbbell],
    ),
    load_reps("Landmine press", Pattern::Push, &[Equipment::Landmine]),
    load_reps("Push-up", Pattern::Push, &[Equipment::Bodyweight]),
];

const PULL: &[Exercise] = &[
    load_reps("Cable row", Pattern::Pull, &[Equipment::Cables]),
    load_reps("Seated row (attachment)", Pattern::Pull, &[Equipment::Cables]),
    load_reps("Lat pulldown", Pattern::Pull, &[Equipment::Cables]),
    load_reps("One-arm dumbbell row", Pattern::Pull, &[Equipment::Dumbbell]),
    load_reps(
        "Pull-up",
        Pattern::Pull,
        &[Equipment::PullUpBar, Equipment::Bodyweight],
    ),
];

const SQUAT: &[Exercise] = &[
    load_reps(
        "Split squat",
        Pattern::Squat,
        &[Equipment::Dumbbell, Equipment::Bodyweight],
    ),
    load_reps(
        "Step-up",
        Pattern::Squat,
        &[Equipment::Bench, Equipment::Dumbbell, Equipment::Bodyweight],
    ),
    load_reps("Goblet squat", Pattern::Squat, &[Equipment::Dumbbell]),
    load_reps("Squat", Pattern::Squat, &[Equipment::Rack, Equipment::Barbell]),
];

const HINGE: &[Exercise] = &[
    load_reps(
        "Hip thrust / glute bridge",
        Pattern::Hinge,
        &[Equipment::Bench, Equipment::Barbell, Equipment::Bodyweight],
    ),
    load_reps("Cable pull-through", Pattern::Hinge, &[Equipment::Cables]),
    load_reps(
        "RDL (light/controlled)",
        Pattern::Hinge,
        &[Equipment::Barbell, Equipment::Dumbbell],
    ),
    load_reps("Trap bar deadlift", Pattern::Hinge, &[Equipment::Barbell]),
];

const ACCESSORY: &[Exercise] = &[
    load_reps(
        "Lateral raise",
        Pattern::Accessory,
        &[Equipment::Dumbbell, Equipment::Cables],
    ),
    load_reps(
        "Curl",
        Pattern::Accessory,
        &[Equipment::Dumbbell, Equipment::Cables, Equipment::Barbell],
    ),
    load_reps("Triceps pressdown", Pattern::Accessory, &[Equipment::Cables]),
    load_reps(
        "Calf raise",
        Pattern::Accessory,
        &[Equipment::Bodyweight, Equipment::Barbell, Equipment::Dumbbell],
    ),
    load_reps(
        "Dips",
        Pattern::Dips,
        &[Equipment::DipStation, Equipment::Bodyweight],
    ),
];

const CORE: &[Exercise] = &[
    timed("Breath + bracing", Pattern::Core, &[Equipment::Bodyweight]),
    timed("Dead bug / hollow hold", Pattern::Core, &[Equipment::Bodyweight]),
    timed("Side plank", Pattern::Core, &[Equipment::Bodyweight]),
];

const MOBILITY: &[Exercise] = &[
    timed("Hip mobility flow", Pattern::Mobility, &[Equipment::Bodyweight]),
    timed(
        "Thoracic mobility flow",
        Pattern::Mobility,
        &[Equipment::Bodyweight],
    ),
];

const CARDIO: &[Exercise] = &[
    timed("Run/ruck/bike interval", Pattern::Cardio, &[Equipment::Cardio]),
    timed("Rower interval", Pattern::Cardio, &[Equipment::Cardio]),
];

const TACTICAL: &[Exercise] = &[
    timed("Push-up interval", Pattern::Push, &[Equipment::Bodyweight]),
    timed("Squat / lunge interval", Pattern::Squat, &[Equipment::Bodyweight]),
    Exercise {
        name: "Core circuit",
        pattern: Pattern::Core,
        log_kind: LogKind::Circuit,
        equipment: &[Equipment::Bodyweight],
    },
    timed("Run/ruck/bike interval", Pattern::Cardio, &[Equipment::Cardio]),
];

const CALISTHENICS: &[Exercise] = &[
    load_reps("Push-up (variation)", Pattern::Push, &[Equipment::Bodyweight]),
    load_reps(
        "Pull-up (variation)",
        Pattern::Pull,
        &[Equipment::PullUpBar, Equipment::Bodyweight],
    ),
    load_reps(
        "Dip (variation)",
        Pattern::Dips,
        &[Equipment::DipStation, Equipment::Bodyweight],
    ),
    load_reps(
        "Split squat progression",
        Pattern::Squat,
        &[Equipment::Bodyweight],
    ),
    timed("Hollow hold / plank", Pattern::Core, &[Equipment::Bodyweight]),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_pool_duplicate_names() {
        for pool in Pool::iter() {
            let mut names = HashSet::new();
            for exercise in pool.exercises() {
                assert!(
                    names.insert(exercise.name),
                    "duplicate name {} in {}",
                    exercise.name,
                    pool.name()
                );
            }
        }
    }

    #[test]
    fn test_pool_exercises() {
        for pool in Pool::iter() {
            assert!(!pool.exercises().is_empty(), "empty pool {}", pool.name());

            for exercise in pool.exercises() {
                let name = exercise.name.to_lowercase();
                assert!(!exercise.equipment.is_empty());
                if name.contains("pull-up") {
                    assert!(exercise.equipment.contains(&Equipment::PullUpBar));
                }
                if name.contains("dip") {
                    assert!(exercise.equipment.contains(&Equipment::DipStation));
                    assert_eq!(exercise.pattern, Pattern::Dips);
                }
                if name.contains("dumbbell") {
                    assert!(exercise.equipment.contains(&Equipment::Dumbbell));
                }
                if name.contains("cable") {
                    assert!(exercise.equipment.contains(&Equipment::Cables));
                }
                if exercise.pattern == Pattern::Mobility {
                    assert_eq!(exercise.log_kind, LogKind::Timed);
                }
            }
        }
    }

    #[rstest]
    #[case(Pool::Push, Pattern::Push)]
    #[case(Pool::Pull, Pattern::Pull)]
    #[case(Pool::Squat, Pattern::Squat)]
    #[case(Pool::Hinge, Pattern::Hinge)]
    #[case(Pool::Core, Pattern::Core)]
    #[case(Pool::Mobility, Pattern::Mobility)]
    #[case(Pool::Cardio, Pattern::Cardio)]
    fn test_pattern_pools(#[case] pool: Pool, #[case] pattern: Pattern) {
        assert!(pool.exercises().iter().all(|e| e.pattern == pattern));
    }

    #[test]
    fn test_exercise_requires_any_of() {
        let push_up = PUSH[3];
        assert!(push_up.requires_any_of(&HashSet::from([Equipment::Bodyweight])));
        assert!(!PUSH[2].requires_any_of(&HashSet::from([Equipment::Bodyweight])));
    }
}
