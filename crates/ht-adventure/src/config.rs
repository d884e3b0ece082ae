//! Configuration for an adventure session.

use ht_core::{Genre, LaunchParams, SessionMode};

/// Upper bound for the activity readiness requirement.
pub const MAX_REQUIRED_ACTIVITIES: u32 = 10;

/// Configuration for an adventure session.
#[derive(Debug, Clone)]
pub struct AdventureConfig {
    /// RNG seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Player display name.
    pub player_name: String,
    /// Content genre.
    pub genre: Genre,
    /// Activities needed before the readiness flag is set (0 disables).
    pub required_activities: u32,
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player_name: SessionMode::Adventure.default_name().to_string(),
            genre: Genre::Fantasy,
            required_activities: 0,
        }
    }
}

impl AdventureConfig {
    /// Start from launch parameters.
    pub fn from_launch(params: &LaunchParams) -> Self {
        Self::default()
            .with_name(&params.name)
            .with_genre(params.genre)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the player name. Blank names keep the default.
    pub fn with_name(mut self, name: &str) -> Self {
        let name = name.trim();
        if !name.is_empty() {
            self.player_name = name.to_string();
        }
        self
    }

    /// Set the genre.
    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    /// Set the activity requirement (clamped to 0-10).
    pub fn with_required_activities(mut self, count: u32) -> Self {
        self.required_activities = count.min(MAX_REQUIRED_ACTIVITIES);
        self
    }

    /// Parameters for starting a fresh session like this one.
    pub fn launch_params(&self) -> LaunchParams {
        LaunchParams {
            name: self.player_name.clone(),
            genre: self.genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = AdventureConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.player_name, "Adventurer");
        assert_eq!(cfg.genre, Genre::Fantasy);
        assert_eq!(cfg.required_activities, 0);
    }

    #[test]
    fn builder_methods() {
        let cfg = AdventureConfig::default()
            .with_seed(7)
            .with_name("Ari")
            .with_genre(Genre::Mystery)
            .with_required_activities(3);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.player_name, "Ari");
        assert_eq!(cfg.genre, Genre::Mystery);
        assert_eq!(cfg.required_activities, 3);
    }

    #[test]
    fn blank_name_and_large_requirement() {
        let cfg = AdventureConfig::default()
            .with_name("   ")
            .with_required_activities(99);
        assert_eq!(cfg.player_name, "Adventurer");
        assert_eq!(cfg.required_activities, MAX_REQUIRED_ACTIVITIES);
    }

    #[test]
    fn from_launch_params() {
        let params = LaunchParams::from_query(SessionMode::Adventure, "name=Vex&genre=sci-fi");
        let cfg = AdventureConfig::from_launch(&params);
        assert_eq!(cfg.player_name, "Vex");
        assert_eq!(cfg.genre, Genre::SciFi);
        assert_eq!(cfg.launch_params(), params);
    }
}
