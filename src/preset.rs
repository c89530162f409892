//! Team and game-type presets
//!
//! Presets are immutable once constructed and shared by reference
//! (`Arc`) across matches. They are loaded from the preset store or built
//! from defaults; the engine never mutates them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::duration::parse_mmss;
use crate::error::ScoreboardError;

// ─── Serde defaults ─────────────────────────────────────────────────────────

fn default_quarters() -> u32 {
    4
}

fn default_quarter_time() -> String {
    "10:00".to_string()
}

fn default_quarter_rest() -> String {
    "02:00".to_string()
}

fn default_halftime_rest() -> String {
    "05:00".to_string()
}

// ─── Team ───────────────────────────────────────────────────────────────────

/// A team identity preset for the board: name, logo, and two hex colors.
///
/// Colors are stored as given; normalization and contrast math live in
/// [`crate::colors`] and are a presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,

    /// Path or URI to a logo image; may be empty.
    #[serde(default)]
    pub logo: String,

    pub color_primary: String,
    pub color_secondary: String,
}

impl Team {
    pub fn new(name: &str, logo: &str, color_primary: &str, color_secondary: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            logo: logo.to_string(),
            color_primary: color_primary.to_string(),
            color_secondary: color_secondary.to_string(),
        })
    }

    /// Default home-side preset, used when no teams are stored.
    pub fn default_home() -> Arc<Self> {
        Self::new("Home", "", "#ff0000", "#ffffff")
    }

    /// Default visiting-side preset.
    pub fn default_visitors() -> Arc<Self> {
        Self::new("Visitors", "", "#0000ff", "#ffffff")
    }
}

// ─── GameType ───────────────────────────────────────────────────────────────

/// A named preset describing the temporal structure of a game: how many
/// periods, how long each one runs, and the rests between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameType {
    pub name: String,

    /// Number of periods; at least 1.
    #[serde(default = "default_quarters")]
    pub quarters: u32,

    /// Length of one period, `MM:SS`.
    #[serde(default = "default_quarter_time")]
    pub time_per_quarter: String,

    /// Rest between consecutive periods, `MM:SS`.
    #[serde(default = "default_quarter_rest")]
    pub rest_between_quarters: String,

    /// Halftime rest, `MM:SS`.
    #[serde(default = "default_halftime_rest")]
    pub halftime_rest: String,
}

impl GameType {
    pub fn new(
        name: &str,
        quarters: u32,
        time_per_quarter: &str,
        rest_between_quarters: &str,
        halftime_rest: &str,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            quarters,
            time_per_quarter: time_per_quarter.to_string(),
            rest_between_quarters: rest_between_quarters.to_string(),
            halftime_rest: halftime_rest.to_string(),
        })
    }

    /// Default preset: four 10-minute quarters.
    pub fn standard() -> Arc<Self> {
        Self::new("Standard", 4, "10:00", "02:00", "05:00")
    }

    /// Check the preset invariant: all three duration fields parse under the
    /// MM:SS grammar. Stored presets are validated on load so a bad file
    /// cannot surface as a mid-game clock failure.
    pub fn validate(&self) -> Result<(), ScoreboardError> {
        parse_mmss(&self.time_per_quarter)?;
        parse_mmss(&self.rest_between_quarters)?;
        parse_mmss(&self.halftime_rest)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_game_type_is_valid() {
        assert!(GameType::standard().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_durations() {
        let gt = GameType {
            name: "Broken".to_string(),
            quarters: 4,
            time_per_quarter: "ten minutes".to_string(),
            rest_between_quarters: "02:00".to_string(),
            halftime_rest: "05:00".to_string(),
        };
        assert!(gt.validate().is_err());
    }

    #[test]
    fn game_type_deserializes_with_defaults() {
        let gt: GameType = toml::from_str(r#"name = "Youth""#).unwrap();
        assert_eq!(gt.quarters, 4);
        assert_eq!(gt.time_per_quarter, "10:00");
        assert_eq!(gt.rest_between_quarters, "02:00");
        assert_eq!(gt.halftime_rest, "05:00");
    }

    #[test]
    fn team_deserializes_without_logo() {
        let team: Team = toml::from_str(
            r##"
            name = "Lions"
            color_primary = "#aa0000"
            color_secondary = "#ffffff"
            "##,
        )
        .unwrap();
        assert_eq!(team.name, "Lions");
        assert!(team.logo.is_empty());
    }
}
