use std::slice::Iter;

use crate::{Gender, Goal, Pattern, Profile, Property, SpineSensitivity, Style, Units};

/// Target rep range and load jump for a load+reps exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionRule {
    pub rep_min: u32,
    pub rep_max: u32,
    pub increment: f32,
    pub trigger: Trigger,
}

impl ProgressionRule {
    fn hypertrophy(units: Units) -> Self {
        Self {
            rep_min: 8,
            rep_max: 12,
            increment: units.small_increment(),
            trigger: Trigger::CleanAtTop,
        }
    }

    /// Whether a clean set with the given reps earns the next load jump.
    #[must_use]
    pub fn is_earned(&self, reps: u32) -> bool {
        match self.trigger {
            Trigger::CleanAtTop => reps >= self.rep_max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Advance when a clean set reaches the top of the rep range.
    CleanAtTop,
}

impl Property for Trigger {
    const KIND: &'static str = "trigger";

    fn iter() -> Iter<'static, Trigger> {
        static TRIGGERS: [Trigger; 1] = [Trigger::CleanAtTop];
        TRIGGERS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Trigger::CleanAtTop => "clean_at_top",
        }
    }
}

/// One override of the baseline rule. Stages are applied cumulatively in [`Stage::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Goal,
    HighIntensity,
    SpineProtection,
    FemaleDefault,
}

impl Stage {
    pub const ORDER: [Stage; 4] = [
        Stage::Goal,
        Stage::HighIntensity,
        Stage::SpineProtection,
        Stage::FemaleDefault,
    ];

    #[must_use]
    pub fn applies(self, profile: &Profile, pattern: Pattern) -> bool {
        match self {
            Stage::Goal => matches!(profile.goal, Goal::Strength | Goal::Endurance),
            Stage::HighIntensity => {
                profile.style == Style::Hit
                    && (pattern.is_lower_body_compound() || pattern.is_upper_body_compound())
            }
            Stage::SpineProtection => {
                profile.spine == SpineSensitivity::High && pattern.is_lower_body_compound()
            }
            Stage::FemaleDefault => profile.gender == Some(Gender::Female),
        }
    }

    pub fn adjust(self, rule: &mut ProgressionRule, profile: &Profile, pattern: Pattern) {
        let units = profile.units;
        match self {
            Stage::Goal => match profile.goal {
                Goal::Strength => {
                    rule.rep_min = 3;
                    rule.rep_max = 6;
                    rule.increment = units.large_increment();
                }
                Goal::Endurance => {
                    rule.rep_min = 12;
                    rule.rep_max = 20;
                    rule.increment = units.small_increment();
                }
                Goal::Muscle | Goal::Recomp | Goal::Mobility => {}
            },
            Stage::HighIntensity => {
                let (min, max) = if pattern.is_lower_body_compound() {
                    (5, 8)
                } else {
                    (6, 10)
                };
                rule.rep_min = rule.rep_min.min(min);
                rule.rep_max = rule.rep_max.min(max);
            }
            Stage::SpineProtection => {
                rule.rep_min = rule.rep_min.max(6);
                rule.rep_max = rule.rep_max.max(10);
                rule.increment = units.small_increment();
            }
            Stage::FemaleDefault => {
                rule.rep_min += 1;
                rule.rep_max += 2;
                rule.increment = units.small_increment();
            }
        }
    }
}

/// Progression rule for a load+reps exercise of the given pattern.
///
/// There is no rule for the mobility goal.
#[must_use]
pub fn rule_for(profile: &Profile, pattern: Pattern) -> Option<ProgressionRule> {
    if profile.goal == Goal::Mobility {
        return None;
    }

    let mut rule = ProgressionRule::hypertrophy(profile.units);
    for stage in Stage::ORDER {
        if stage.applies(profile, pattern) {
            stage.adjust(&mut rule, profile, pattern);
        }
    }
    Some(rule)
}
