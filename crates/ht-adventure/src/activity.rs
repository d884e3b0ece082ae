//! Side activities that build experience between fights.

use std::fmt;
use std::str::FromStr;

use ht_core::RandomSource;

use crate::progression::apply_level_ups;
use crate::state::AdventureState;

/// A battle-readiness activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    /// Hunt for experience and materials.
    Hunt,
    /// Train for a modest, steady gain.
    Practice,
    /// Work for gold and a little experience.
    Job,
}

impl Activity {
    /// All activities.
    pub const ALL: [Activity; 3] = [Self::Hunt, Self::Practice, Self::Job];

    /// Verb used in refusal messages.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Hunt => "hunt",
            Self::Practice => "practice",
            Self::Job => "do jobs",
        }
    }

    fn loot(&self) -> (f64, &'static [&'static str]) {
        match self {
            Self::Hunt => (0.4, &["Ration", "Leather Strip", "Minor Rune"]),
            Self::Practice => (0.3, &["Minor Amulet", "Training Token"]),
            Self::Job => (0.2, &["Tool Kit", "Minor Rune"]),
        }
    }
}

impl FromStr for Activity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hunt" => Ok(Self::Hunt),
            "practice" => Ok(Self::Practice),
            "job" | "work" => Ok(Self::Job),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hunt => "hunt",
            Self::Practice => "practice",
            Self::Job => "job",
        };
        f.write_str(name)
    }
}

/// Run one activity. The caller is responsible for the defeat check.
pub fn perform<R: RandomSource>(
    state: &mut AdventureState,
    activity: Activity,
    rng: &mut R,
) -> Vec<String> {
    let level = i64::from(state.level);
    let mut lines = Vec::new();

    match activity {
        Activity::Hunt => {
            let xp = 10 + rng.int_inclusive(0, 10) + level * 2;
            state.grant_xp(xp);
            lines.push(format!("You go hunting and gain {xp} XP."));
        }
        Activity::Practice => {
            let xp = 8 + rng.int_inclusive(0, 6) + level;
            state.grant_xp(xp);
            lines.push(format!("You spend time practicing and gain {xp} XP."));
        }
        Activity::Job => {
            let xp = 6 + rng.int_inclusive(0, 8) + level / 2;
            let gold = 5 + rng.int_inclusive(0, 9) + level;
            state.grant_xp(xp);
            state.grant_gold(gold);
            lines.push(format!("You complete a job: +{xp} XP and +{gold} gold."));
        }
    }

    let (chance, pool) = activity.loot();
    if rng.chance(chance)
        && let Some(item) = rng.pick(pool)
    {
        state.add_item(*item);
        let label = match activity {
            Activity::Hunt => "You found",
            Activity::Practice => "Practice reward",
            Activity::Job => "Job bonus",
        };
        lines.push(format!("{label}: {item}"));
    }

    lines.extend(advance_readiness(state));
    lines.extend(apply_level_ups(state, rng));
    lines
}

/// Count one activity toward the readiness requirement, if one is set.
fn advance_readiness(state: &mut AdventureState) -> Vec<String> {
    if state.required_activities_for_readiness == 0 {
        return Vec::new();
    }
    state.activity_progress += 1;
    let mut lines = vec![format!(
        "Activity progress: {}/{}",
        state.activity_progress, state.required_activities_for_readiness
    )];
    if state.activity_progress >= state.required_activities_for_readiness {
        state.ready_for_battle = true;
        state.required_activities_for_readiness = 0;
        state.activity_progress = 0;
        lines.push("You feel prepared for battle after completing your training and tasks.".into());
    }
    lines
}
