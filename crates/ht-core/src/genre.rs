//! Genre selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A content pack theme. Every session is bound to exactly one genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    /// Swords, sorcery, and dragons.
    #[default]
    Fantasy,
    /// Starships, androids, and dimensional rifts.
    SciFi,
    /// Manors, cults, and cold cases.
    Mystery,
}

impl Genre {
    /// All genres in display order.
    pub const ALL: [Genre; 3] = [Genre::Fantasy, Genre::SciFi, Genre::Mystery];

    /// The identifier used in query strings and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fantasy => "fantasy",
            Self::SciFi => "sci-fi",
            Self::Mystery => "mystery",
        }
    }

    /// Capitalized label for status displays.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fantasy => "Fantasy",
            Self::SciFi => "Sci-fi",
            Self::Mystery => "Mystery",
        }
    }

    /// Parse a genre, falling back to fantasy for anything unrecognized.
    pub fn parse_lenient(input: &str) -> Self {
        match input.parse() {
            Ok(genre) => genre,
            Err(_) => {
                tracing::debug!(input, "unrecognized genre, using fantasy");
                Self::Fantasy
            }
        }
    }
}

impl FromStr for Genre {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fantasy" => Ok(Self::Fantasy),
            "sci-fi" | "scifi" | "sci_fi" => Ok(Self::SciFi),
            "mystery" => Ok(Self::Mystery),
            other => Err(CoreError::UnknownGenre(other.to_string())),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_genres() {
        assert_eq!("fantasy".parse::<Genre>().unwrap(), Genre::Fantasy);
        assert_eq!("Sci-Fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("scifi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!(" mystery ".parse::<Genre>().unwrap(), Genre::Mystery);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        let err = "western".parse::<Genre>().unwrap_err();
        assert_eq!(err, CoreError::UnknownGenre("western".to_string()));
    }

    #[test]
    fn lenient_parse_falls_back_to_fantasy() {
        assert_eq!(Genre::parse_lenient("western"), Genre::Fantasy);
        assert_eq!(Genre::parse_lenient(""), Genre::Fantasy);
        assert_eq!(Genre::parse_lenient("mystery"), Genre::Mystery);
    }

    #[test]
    fn display_and_label() {
        assert_eq!(Genre::SciFi.to_string(), "sci-fi");
        assert_eq!(Genre::SciFi.label(), "Sci-fi");
        assert_eq!(Genre::Mystery.label(), "Mystery");
    }

    #[test]
    fn serde_uses_query_identifiers() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, "\"sci-fi\"");
        let back: Genre = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Genre::SciFi);
    }
}
