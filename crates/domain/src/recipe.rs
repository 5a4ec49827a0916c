use crate::{Frequency, Pattern, Style, catalog::Pool};

/// Where a block draws its exercise from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub pool: Pool,
    pub pattern: Option<Pattern>,
}

/// A slot in a session. Sources are tried in order until one yields an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub name: &'static str,
    pub sources: &'static [Source],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub label: String,
    pub blocks: &'static [Block],
}

impl Recipe {
    fn new(label: impl Into<String>, blocks: &'static [Block]) -> Self {
        Self {
            label: label.into(),
            blocks,
        }
    }
}

/// Session structure for the given style and frequency.
#[must_use]
pub fn recipes_for(style: Style, frequency: Frequency) -> Vec<Recipe> {
    match style {
        Style::General | Style::Traditional => split(frequency),
        Style::Hit => hit(frequency),
        Style::Calisthenics => repeated(frequency, CALISTHENICS),
        Style::Tactical => repeated(frequency, TACTICAL),
        Style::Pilates => repeated(frequency, PILATES),
    }
}

fn split(frequency: Frequency) -> Vec<Recipe> {
    let sessions: &[(&str, &'static [Block])] = match *frequency {
        ..=2 => &[("Full Body A", FULL_BODY_A), ("Full Body B", FULL_BODY_B)],
        3 => &[("Push", PUSH_DAY), ("Pull", PULL_DAY), ("Legs", LEGS_DAY)],
        4 => &[
            ("Upper A", UPPER_A),
            ("Lower A", LOWER_A),
            ("Upper B", UPPER_B),
            ("Lower B", LOWER_B),
        ],
        5 => &[
            ("Upper A", UPPER_A),
            ("Lower A", LOWER_A),
            ("Push", PUSH_DAY),
            ("Pull", PULL_DAY),
            ("Legs", LEGS_DAY),
        ],
        _ => &[
            ("Push A", PUSH_DAY),
            ("Pull A", PULL_DAY),
            ("Legs A", LEGS_DAY),
            ("Push B", PUSH_DAY),
            ("Pull B", PULL_DAY),
            ("Legs B", LEGS_DAY),
        ],
    };
    sessions
        .iter()
        .map(|(label, blocks)| Recipe::new(*label, blocks))
        .collect()
}

fn hit(frequency: Frequency) -> Vec<Recipe> {
    [("Day A", HIT_A), ("Day B", HIT_B), ("Day C", HIT_C)]
        .into_iter()
        .take(*frequency as usize)
        .map(|(label, blocks)| Recipe::new(label, blocks))
        .collect()
}

fn repeated(frequency: Frequency, blocks: &'static [Block]) -> Vec<Recipe> {
    (1..=*frequency)
        .map(|n| Recipe::new(format!("Session {n}"), blocks))
        .collect()
}

const fn source(pool: Pool, pattern: Pattern) -> Source {
    Source {
        pool,
        pattern: Some(pattern),
    }
}

const PUSH: Block = Block {
    name: "push",
    sources: &[source(Pool::Push, Pattern::Push)],
};
const PULL: Block = Block {
    name: "pull",
    sources: &[source(Pool::Pull, Pattern::Pull)],
};
const SQUAT: Block = Block {
    name: "squat",
    sources: &[source(Pool::Squat, Pattern::Squat)],
};
const HINGE: Block = Block {
    name: "hinge",
    sources: &[source(Pool::Hinge, Pattern::Hinge)],
};
const DIPS: Block = Block {
    name: "dips",
    sources: &[source(Pool::Accessory, Pattern::Dips)],
};
const ACCESSORY: Block = Block {
    name: "accessory",
    sources: &[Source {
        pool: Pool::Accessory,
        pattern: None,
    }],
};
const CORE: Block = Block {
    name: "core",
    sources: &[source(Pool::Core, Pattern::Core)],
};
const MOBILITY: Block = Block {
    name: "mobility",
    sources: &[source(Pool::Mobility, Pattern::Mobility)],
};
const CARDIO: Block = Block {
    name: "cardio",
    sources: &[source(Pool::Cardio, Pattern::Cardio)],
};

const FULL_BODY_A: &[Block] = &[PUSH, PULL, SQUAT, ACCESSORY, CORE];
const FULL_BODY_B: &[Block] = &[PULL, PUSH, HINGE, ACCESSORY, CARDIO];
const PUSH_DAY: &[Block] = &[PUSH, DIPS, ACCESSORY, CORE];
const PULL_DAY: &[Block] = &[PULL, ACCESSORY, ACCESSORY, CORE];
const LEGS_DAY: &[Block] = &[SQUAT, HINGE, ACCESSORY, MOBILITY];
const UPPER_A: &[Block] = &[PUSH, PULL, ACCESSORY, ACCESSORY];
const LOWER_A: &[Block] = &[SQUAT, HINGE, ACCESSORY, CORE];
const UPPER_B: &[Block] = &[PULL, PUSH, DIPS, ACCESSORY];
const LOWER_B: &[Block] = &[HINGE, SQUAT, ACCESSORY, MOBILITY];

const HIT_A: &[Block] = &[PUSH, PULL, DIPS, ACCESSORY];
const HIT_B: &[Block] = &[SQUAT, HINGE, ACCESSORY, CORE];
const HIT_C: &[Block] = &[ACCESSORY, ACCESSORY, ACCESSORY, CORE];

const PILATES: &[Block] = &[CORE, MOBILITY, CORE, MOBILITY];

const TACTICAL: &[Block] = &[
    Block {
        name: "push",
        sources: &[source(Pool::Tactical, Pattern::Push)],
    },
    PULL,
    Block {
        name: "squat",
        sources: &[source(Pool::Tactical, Pattern::Squat)],
    },
    Block {
        name: "conditioning",
        sources: &[
            source(Pool::Tactical, Pattern::Cardio),
            source(Pool::Tactical, Pattern::Core),
        ],
    },
];

const CALISTHENICS: &[Block] = &[
    Block {
        name: "push",
        sources: &[source(Pool::Calisthenics, Pattern::Push)],
    },
    Block {
        name: "pull",
        sources: &[
            source(Pool::Calisthenics, Pattern::Pull),
            source(Pool::Pull, Pattern::Pull),
        ],
    },
    Block {
        name: "squat",
        sources: &[
            source(Pool::Calisthenics, Pattern::Squat),
            source(Pool::Squat, Pattern::Squat),
        ],
    },
    Block {
        name: "core",
        sources: &[
            source(Pool::Calisthenics, Pattern::Core),
            source(Pool::Core, Pattern::Core),
        ],
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::Property;

    use super::*;

    fn labels(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.label.as_str()).collect()
    }

    #[rstest]
    #[case(2, vec!["Full Body A", "Full Body B"])]
    #[case(3, vec!["Push", "Pull", "Legs"])]
    #[case(4, vec!["Upper A", "Lower A", "Upper B", "Lower B"])]
    #[case(5, vec!["Upper A", "Lower A", "Push", "Pull", "Legs"])]
    #[case(6, vec!["Push A", "Pull A", "Legs A", "Push B", "Pull B", "Legs B"])]
    fn test_recipes_for_split(#[case] frequency: i64, #[case] expected: Vec<&str>) {
        for style in [Style::General, Style::Traditional] {
            assert_eq!(
                labels(&recipes_for(style, Frequency::new(frequency))),
                expected
            );
        }
    }

    #[rstest]
    #[case(1, vec!["Day A", "Day B"])]
    #[case(2, vec!["Day A", "Day B"])]
    #[case(3, vec!["Day A", "Day B", "Day C"])]
    #[case(6, vec!["Day A", "Day B", "Day C"])]
    fn test_recipes_for_hit(#[case] frequency: i64, #[case] expected: Vec<&str>) {
        assert_eq!(labels(&recipes_for(Style::Hit, Frequency::new(frequency))), expected);
    }

    #[rstest]
    #[case(Style::Calisthenics)]
    #[case(Style::Tactical)]
    #[case(Style::Pilates)]
    fn test_recipes_for_repeated(#[case] style: Style) {
        let recipes = recipes_for(style, Frequency::new(4));
        assert_eq!(
            labels(&recipes),
            vec!["Session 1", "Session 2", "Session 3", "Session 4"]
        );
        assert!(recipes.iter().all(|r| r.blocks == recipes[0].blocks));
    }

    #[test]
    fn test_recipes_for_clamps_frequency() {
        assert_eq!(recipes_for(Style::General, Frequency::new(10)).len(), 6);
        assert_eq!(recipes_for(Style::Pilates, Frequency::new(0)).len(), 2);
    }

    #[test]
    fn test_hit_day_b_blocks() {
        let recipes = recipes_for(Style::Hit, Frequency::new(3));
        assert_eq!(
            recipes[1]
                .blocks
                .iter()
                .map(|b| b.name)
                .collect::<Vec<_>>(),
            vec!["squat", "hinge", "accessory", "core"]
        );
    }

    #[test]
    fn test_sources_match_pool_patterns() {
        for style in Style::iter() {
            for frequency in Frequency::MIN..=Frequency::MAX {
                for recipe in recipes_for(*style, Frequency::new(i64::from(frequency))) {
                    for block in recipe.blocks {
                        assert!(!block.sources.is_empty());
                        for source in block.sources {
                            if let Some(pattern) = source.pattern {
                                assert!(
                                    source.pool.exercises().iter().any(|e| e.pattern == pattern),
                                    "no {pattern} exercise in {:?}",
                                    source.pool
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}
