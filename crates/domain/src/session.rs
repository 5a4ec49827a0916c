use derive_more::{Deref, Display, From};
use log::debug;

use crate::{
    Claimed, EligibilityFilter, IdGenerator, LogKind, Pattern, Profile, ProgressionRule, Recipe,
    Units, catalog, rule_for, select,
};

#[derive(Deref, Display, From, Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionID(String);

#[derive(Deref, Display, From, Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemID(String);

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionID,
    pub label: String,
    pub items: Vec<SessionItem>,
}

impl Session {
    #[must_use]
    pub fn item(&self, id: &ItemID) -> Option<&SessionItem> {
        self.items.iter().find(|i| i.id == *id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionItem {
    pub id: ItemID,
    pub name: String,
    pub log_kind: LogKind,
    pub pattern: Pattern,
    pub rule: Option<ProgressionRule>,
    pub default_units: Units,
}

/// Fills the blocks of one recipe for a profile.
pub struct SessionBuilder<'a> {
    profile: &'a Profile,
    filter: EligibilityFilter<'a>,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            filter: EligibilityFilter::new(profile),
        }
    }

    /// Blocks without an eligible exercise are left out of the session.
    pub fn build(
        &self,
        recipe: &Recipe,
        session_index: usize,
        ids: &mut impl IdGenerator,
    ) -> Session {
        let mut claimed = Claimed::default();
        let mut items = vec![];

        for (block_index, block) in recipe.blocks.iter().enumerate() {
            let seed = self.seed(&recipe.label, session_index, block.name, block_index);

            let selection = block
                .sources
                .iter()
                .enumerate()
                .find_map(|(k, source)| {
                    let candidates = self.filter.candidates(
                        source.pool.exercises(),
                        &claimed,
                        source.pattern,
                    );
                    let exercise = if k == 0 {
                        select(&candidates, &seed, &claimed)
                    } else {
                        select(&candidates, &format!("{seed}|{k}"), &claimed)
                    };
                    if exercise.is_some() && k > 0 {
                        debug!(
                            "block {} of {} filled from fallback source {k}",
                            block.name, recipe.label
                        );
                    }
                    exercise
                });

            match selection {
                Some(exercise) => {
                    claimed.claim(exercise);
                    items.push(self.item(exercise, ids));
                }
                None => {
                    debug!(
                        "no eligible exercise for block {} of {}",
                        block.name, recipe.label
                    );
                }
            }
        }

        Session {
            id: ids.next_session_id(),
            label: recipe.label.clone(),
            items,
        }
    }

    fn seed(&self, label: &str, session_index: usize, block: &str, block_index: usize) -> String {
        let profile = self.profile;
        format!(
            "{}|{}|{}|{}|{label}|{session_index}|{block}|{block_index}",
            profile.style,
            profile.goal,
            profile.units,
            profile.gender_name()
        )
    }

    fn item(&self, exercise: &catalog::Exercise, ids: &mut impl IdGenerator) -> SessionItem {
        SessionItem {
            id: ids.next_item_id(),
            name: exercise.name.to_string(),
            log_kind: exercise.log_kind,
            pattern: exercise.pattern,
            rule: match exercise.log_kind {
                LogKind::LoadReps => rule_for(self.profile, exercise.pattern),
                LogKind::Timed | LogKind::Circuit => None,
            },
            default_units: self.profile.units,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use crate::{
        Frequency, Goal, OwnedEquipment, SequentialIds, SpineSensitivity, Style, Tolerance,
        Tolerances, recipes_for,
    };

    use super::*;

    fn profile(style: Style) -> Profile {
        Profile {
            style,
            goal: Goal::Muscle,
            tolerances: Tolerances::all(Tolerance::Good),
            spine: SpineSensitivity::None,
            ..Profile::default()
        }
    }

    #[test]
    fn test_build_assigns_ids_in_order() {
        let profile = profile(Style::Hit);
        let recipes = recipes_for(profile.style, profile.frequency);
        let mut ids = SequentialIds::default();

        let session = SessionBuilder::new(&profile).build(&recipes[0], 0, &mut ids);

        assert_eq!(session.items.len(), 4);
        assert_eq!(
            session.items.iter().map(|i| i.id.to_string()).collect::<Vec<_>>(),
            vec!["I1", "I2", "I3", "I4"]
        );
        assert_eq!(session.id, SessionID::from("S5".to_string()));
        assert_eq!(session.label, "Day A");
    }

    #[test]
    fn test_build_is_deterministic() {
        for style in [Style::General, Style::Hit, Style::Tactical, Style::Calisthenics] {
            let profile = profile(style);
            let builder = SessionBuilder::new(&profile);
            for (index, recipe) in recipes_for(style, Frequency::new(6)).iter().enumerate() {
                assert_eq!(
                    builder.build(recipe, index, &mut SequentialIds::default()),
                    builder.build(recipe, index, &mut SequentialIds::default())
                );
            }
        }
    }

    #[test]
    fn test_build_session_invariants() {
        for style in [Style::General, Style::Hit, Style::Pilates, Style::Calisthenics] {
            let profile = profile(style);
            let builder = SessionBuilder::new(&profile);
            for (index, recipe) in recipes_for(style, Frequency::new(6)).iter().enumerate() {
                let session = builder.build(recipe, index, &mut SequentialIds::default());
                let names = session.items.iter().map(|i| &i.name).collect::<HashSet<_>>();
                assert_eq!(names.len(), session.items.len());
                let main_patterns = session
                    .items
                    .iter()
                    .filter(|i| i.pattern.is_main())
                    .map(|i| i.pattern)
                    .collect::<Vec<_>>();
                assert_eq!(
                    main_patterns.iter().collect::<HashSet<_>>().len(),
                    main_patterns.len()
                );
            }
        }
    }

    #[test]
    fn test_build_rules_only_for_load_reps() {
        let profile = profile(Style::Tactical);
        let recipes = recipes_for(profile.style, profile.frequency);
        let session =
            SessionBuilder::new(&profile).build(&recipes[0], 0, &mut SequentialIds::default());

        for item in &session.items {
            assert_eq!(item.rule.is_some(), item.log_kind == LogKind::LoadReps);
            assert_eq!(item.default_units, Units::Pounds);
        }
    }

    #[test]
    fn test_build_uses_fallback_source() {
        let profile = Profile {
            tolerances: Tolerances {
                pullups: Tolerance::Limited,
                ..Tolerances::all(Tolerance::Good)
            },
            ..profile(Style::Calisthenics)
        };
        let recipes = recipes_for(profile.style, profile.frequency);
        let session =
            SessionBuilder::new(&profile).build(&recipes[0], 0, &mut SequentialIds::default());

        let pull = session
            .items
            .iter()
            .find(|i| i.pattern == Pattern::Pull)
            .unwrap();
        assert!(
            ["Cable row", "Seated row (attachment)", "Lat pulldown", "One-arm dumbbell row"]
                .contains(&pull.name.as_str())
        );
    }

    #[test]
    fn test_build_skips_unfillable_block() {
        let profile = Profile {
            equipment: OwnedEquipment::bodyweight_only(),
            tolerances: Tolerances {
                pullups: Tolerance::Avoid,
                dips: Tolerance::Avoid,
                ..Tolerances::all(Tolerance::Good)
            },
            ..profile(Style::Calisthenics)
        };
        let recipes = recipes_for(profile.style, profile.frequency);
        let session =
            SessionBuilder::new(&profile).build(&recipes[0], 0, &mut SequentialIds::default());

        assert_eq!(recipes[0].blocks.len(), 4);
        assert_eq!(session.items.len(), 3);
        assert!(session.items.iter().all(|i| i.pattern != Pattern::Pull));
    }

    #[test]
    fn test_session_item() {
        let profile = profile(Style::Pilates);
        let recipes = recipes_for(profile.style, profile.frequency);
        let session =
            SessionBuilder::new(&profile).build(&recipes[0], 0, &mut SequentialIds::default());

        assert_eq!(
            session.item(&ItemID::from("I1".to_string())).map(|i| i.pattern),
            Some(Pattern::Core)
        );
        assert_eq!(session.item(&ItemID::from("I9".to_string())), None);
    }
}
