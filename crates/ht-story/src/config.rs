//! Configuration for a story session.

use ht_core::{Genre, LaunchParams, SessionMode};

/// Configuration for a story session.
#[derive(Debug, Clone)]
pub struct StoryConfig {
    /// RNG seed for reproducible prompts; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Storyteller display name.
    pub player_name: String,
    /// Content genre.
    pub genre: Genre,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player_name: SessionMode::Story.default_name().to_string(),
            genre: Genre::Fantasy,
        }
    }
}

impl StoryConfig {
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

    /// Set the display name. Blank names keep the default.
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

    /// Parameters for starting a fresh story like this one.
    pub fn launch_params(&self) -> LaunchParams {
        LaunchParams {
            name: self.player_name.clone(),
            genre: self.genre,
        }
    }
}
