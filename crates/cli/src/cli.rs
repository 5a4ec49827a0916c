//! Command line definitions

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use atl_domain::{
    Equipment, Frequency, Gender, Goal, Intensity, LoadUnits, LogKind, LogResult, OwnedEquipment,
    Profile, Property, Recovery, SessionItem, SpineSensitivity, Style, Tolerance, Units,
};
use atl_storage::record;
use clap::{Args, Parser, Subcommand};
use log::debug;

/// Deterministic workout program generator
#[derive(Parser, Debug)]
#[command(name = "atl", version)]
pub struct Cli {
    /// Directory holding the stored profile, program and training log
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<log::LevelFilter>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a program from the profile, store both and print the program
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print the stored program
    Show,

    /// Print the session to train next
    Next,

    /// Record a result for an item of the stored program
    Log(LogArgs),

    /// Print the effective profile
    Profile {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Store the effective profile
        #[arg(long)]
        save: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// Profile file replacing the stored profile
    #[arg(short, long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Training style (general, traditional, hit, calisthenics, tactical, pilates)
    #[arg(long)]
    pub style: Option<Style>,

    /// Goal (muscle, strength, recomp, endurance, mobility)
    #[arg(long)]
    pub goal: Option<Goal>,

    /// Sessions per week, clamped to 2-6
    #[arg(long, allow_negative_numbers = true)]
    pub freq: Option<i64>,

    /// Recovery style (schedule, recovered)
    #[arg(long)]
    pub recovery: Option<Recovery>,

    /// Unit system (lb, kg)
    #[arg(long)]
    pub units: Option<Units>,

    /// Gender (unspecified, male, female)
    #[arg(long)]
    pub gender: Option<String>,

    /// Owned equipment, replacing the current set (bw, barbell, rack, dumbbell, cables, landmine,
    /// pullup, dip, bench, cardio)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub equipment: Option<Vec<Equipment>>,

    /// Squat tolerance (good, limited, avoid)
    #[arg(long)]
    pub mv_squat: Option<Tolerance>,

    /// Hinge tolerance (good, limited, avoid)
    #[arg(long)]
    pub mv_hinge: Option<Tolerance>,

    /// Overhead tolerance (good, limited, avoid)
    #[arg(long)]
    pub mv_overhead: Option<Tolerance>,

    /// Dip tolerance (good, limited, avoid)
    #[arg(long)]
    pub mv_dips: Option<Tolerance>,

    /// Pull-up tolerance (good, limited, avoid)
    #[arg(long)]
    pub mv_pullups: Option<Tolerance>,

    /// Spine sensitivity (none, mild, high)
    #[arg(long)]
    pub spine: Option<SpineSensitivity>,
}

impl ProfileArgs {
    /// Applies the profile file and the overrides to the given profile.
    pub fn apply(&self, mut profile: Profile) -> Result<Profile> {
        if let Some(path) = &self.profile {
            debug!("reading profile from {}", path.display());
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read profile {}", path.display()))?;
            let record = serde_json::from_str::<record::Profile>(&content)
                .with_context(|| format!("failed to parse profile {}", path.display()))?;
            profile = Profile::try_from(record)
                .with_context(|| format!("invalid profile {}", path.display()))?;
        }
        if let Some(style) = self.style {
            profile.style = style;
        }
        if let Some(goal) = self.goal {
            profile.goal = goal;
        }
        if let Some(freq) = self.freq {
            profile.frequency = Frequency::new(freq);
        }
        if let Some(recovery) = self.recovery {
            profile.recovery = recovery;
        }
        if let Some(units) = self.units {
            profile.units = units;
        }
        if let Some(gender) = &self.gender {
            profile.gender = match gender.as_str() {
                "unspecified" => None,
                gender => Some(Gender::from_name(gender)?),
            };
        }
        if let Some(equipment) = &self.equipment {
            profile.equipment = OwnedEquipment::from_tags(equipment.iter().copied());
        }
        let tolerances = &mut profile.tolerances;
        for (tolerance, rating) in [
            (&mut tolerances.squat, self.mv_squat),
            (&mut tolerances.hinge, self.mv_hinge),
            (&mut tolerances.overhead, self.mv_overhead),
            (&mut tolerances.dips, self.mv_dips),
            (&mut tolerances.pullups, self.mv_pullups),
        ] {
            if let Some(rating) = rating {
                *tolerance = rating;
            }
        }
        if let Some(spine) = self.spine {
            profile.spine = spine;
        }
        Ok(profile)
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct LogArgs {
    /// Session ID
    #[arg(short, long)]
    pub session: String,

    /// Item ID
    #[arg(short, long)]
    pub item: String,

    /// Load used
    #[arg(short, long)]
    pub weight: Option<f32>,

    /// Repetitions done
    #[arg(short, long)]
    pub reps: Option<u32>,

    /// Load units (lb, kg, bw, bw+), defaults to the item's units
    #[arg(short, long)]
    pub units: Option<LoadUnits>,

    /// Duration of a timed item
    #[arg(long)]
    pub seconds: Option<u32>,

    /// Perceived intensity of a timed item (easy, moderate, hard)
    #[arg(long)]
    pub intensity: Option<Intensity>,

    /// Rounds completed in a circuit
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Time taken for a circuit
    #[arg(long)]
    pub minutes: Option<f32>,

    /// All reps done with clean form
    #[arg(short, long)]
    pub clean: bool,

    #[arg(short, long, default_value = "")]
    pub notes: String,
}

impl LogArgs {
    /// The result in the shape the item is logged in. Values not belonging to it are ignored.
    ///
    /// Reps, seconds, rounds and minutes must be positive. A weight is required unless the load
    /// is plain bodyweight, and must not be negative.
    pub fn result(&self, item: &SessionItem) -> Result<LogResult> {
        Ok(match item.log_kind {
            LogKind::LoadReps => {
                let Some(reps) = self.reps.filter(|reps| *reps > 0) else {
                    bail!("Enter reps.");
                };
                let units = self
                    .units
                    .unwrap_or_else(|| LoadUnits::from(item.default_units));
                let weight = match (units, self.weight) {
                    (LoadUnits::Bodyweight, _) => None,
                    (_, Some(weight)) if weight >= 0.0 => Some(weight),
                    _ => bail!("Enter weight."),
                };
                LogResult::LoadReps {
                    weight,
                    reps: Some(reps),
                    units,
                }
            }
            LogKind::Timed => {
                let Some(seconds) = self.seconds.filter(|seconds| *seconds > 0) else {
                    bail!("Enter seconds.");
                };
                LogResult::Timed {
                    seconds: Some(seconds),
                    intensity: self.intensity,
                }
            }
            LogKind::Circuit => {
                let Some(rounds) = self.rounds.filter(|rounds| *rounds > 0) else {
                    bail!("Enter rounds.");
                };
                let Some(minutes) = self.minutes.filter(|minutes| *minutes > 0.0) else {
                    bail!("Enter total minutes.");
                };
                LogResult::Circuit {
                    rounds: Some(rounds),
                    minutes: Some(minutes),
                }
            }
        })
    }
}
