//! Session launch parameters.
//!
//! A session is started from a `name=...&genre=...` query string, and the
//! "new session" action points back at the setup route for its mode with
//! the same two parameters.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::error::CoreError;
use crate::genre::Genre;

/// Which kind of session is being launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Stat-tracking adventure game.
    Adventure,
    /// Free-form collaborative story.
    Story,
}

impl SessionMode {
    /// Display name used when the query omits one.
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Adventure => "Adventurer",
            Self::Story => "Storyteller",
        }
    }

    /// Route of the setup screen for this mode.
    pub fn setup_route(&self) -> &'static str {
        match self {
            Self::Adventure => "/game-setup",
            Self::Story => "/story-setup",
        }
    }
}

impl FromStr for SessionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adventure" | "game" => Ok(Self::Adventure),
            "story" => Ok(Self::Story),
            other => Err(CoreError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adventure => write!(f, "adventure"),
            Self::Story => write!(f, "story"),
        }
    }
}

/// Display name and genre a session starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParams {
    /// Player display name.
    pub name: String,
    /// Content genre.
    pub genre: Genre,
}

impl LaunchParams {
    /// Defaults for a mode: its default name and the fantasy genre.
    pub fn defaults(mode: SessionMode) -> Self {
        Self {
            name: mode.default_name().to_string(),
            genre: Genre::Fantasy,
        }
    }

    /// Read `name` and `genre` from a form-encoded query string.
    ///
    /// A leading `?` is ignored. A missing or blank name uses the mode's
    /// default; a missing or unrecognized genre falls back to fantasy.
    pub fn from_query(mode: SessionMode, query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut params = Self::defaults(mode);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "name" if !value.trim().is_empty() => params.name = value.trim().to_string(),
                "genre" => params.genre = Genre::parse_lenient(&value),
                _ => {}
            }
        }
        params
    }

    /// Encode as a query string (without the leading `?`).
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("name", &self.name)
            .append_pair("genre", self.genre.as_str())
            .finish()
    }

    /// Link to the setup route of `mode` carrying these parameters.
    pub fn setup_link(&self, mode: SessionMode) -> String {
        format!("{}?{}", mode.setup_route(), self.to_query())
    }
}
