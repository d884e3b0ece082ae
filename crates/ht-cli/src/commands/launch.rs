use ht_adventure::AdventureConfig;
use ht_core::{LaunchParams, SessionMode};
use ht_story::StoryConfig;

use super::adventure::AdventureOptions;

pub fn run(mode: &str, query: &str, seed: Option<u64>) -> Result<(), String> {
    let mode: SessionMode = mode.parse().map_err(|e: ht_core::CoreError| e.to_string())?;
    let params = LaunchParams::from_query(mode, query);
    tracing::debug!(%mode, name = %params.name, genre = %params.genre, "launching");

    match mode {
        SessionMode::Adventure => {
            let mut config = AdventureConfig::from_launch(&params);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            super::adventure::run(config, &AdventureOptions::default())
        }
        SessionMode::Story => {
            let mut config = StoryConfig::from_launch(&params);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            super::story::run(config, None)
        }
    }
}
