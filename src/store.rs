//! Preset persistence
//!
//! Teams and game types live in TOML files under the platform data
//! directory (`~/.local/share/basketboard/` on Linux); the general app
//! config (last-selected presets, default pregame countdown) goes through
//! confy. Missing files are seeded with defaults on first load, so a fresh
//! install always has something to put on the board.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::match_state::Match;
use crate::preset::{GameType, Team};

const APP_NAME: &str = "basketboard";
const TEAMS_FILE: &str = "teams.toml";
const GAME_TYPES_FILE: &str = "game_types.toml";

/// Errors during preset file operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read preset file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write preset file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preset TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize presets")]
    SerializeToml(#[from] toml::ser::Error),

    #[error("failed to load app config")]
    Config(#[from] confy::ConfyError),
}

// ─── App config ─────────────────────────────────────────────────────────────

/// General configuration: what the operator had selected last time, and the
/// default pregame countdown. Selections are stored as stable indices into
/// the preset lists, never recovered by equality lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub last_selected_local: usize,
    pub last_selected_visit: usize,
    pub last_selected_game_type: usize,
    pub pregame_countdown: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            last_selected_local: 0,
            last_selected_visit: 1,
            last_selected_game_type: 0,
            pregame_countdown: "00:00".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn load() -> Result<Self, StoreError> {
        Ok(confy::load(APP_NAME, None)?)
    }

    pub fn save(&self) -> Result<(), StoreError> {
        Ok(confy::store(APP_NAME, None, self)?)
    }
}

// ─── File formats ───────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
struct TeamsFile {
    #[serde(default)]
    teams: Vec<Team>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GameTypesFile {
    #[serde(default)]
    game_types: Vec<GameType>,
}

// ─── Store ──────────────────────────────────────────────────────────────────

/// Ordered preset lists backed by TOML files in a data directory.
pub struct PresetStore {
    data_dir: PathBuf,
    teams: Vec<Arc<Team>>,
    game_types: Vec<Arc<GameType>>,
}

impl PresetStore {
    /// Open the store at the platform data directory and load (seeding
    /// defaults for anything missing).
    pub fn open() -> Result<Self, StoreError> {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME);
        Self::open_at(base)
    }

    /// Open the store rooted at an explicit directory.
    pub fn open_at(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|e| StoreError::CreateDir {
            path: data_dir.clone(),
            source: e,
        })?;

        let mut store = Self {
            data_dir,
            teams: Vec::new(),
            game_types: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    pub fn teams(&self) -> &[Arc<Team>] {
        &self.teams
    }

    pub fn game_types(&self) -> &[Arc<GameType>] {
        &self.game_types
    }

    fn load(&mut self) -> Result<(), StoreError> {
        let teams_path = self.data_dir.join(TEAMS_FILE);
        let mut teams: Vec<Arc<Team>> = read_or_seed(&teams_path, TeamsFile::default)?
            .teams
            .into_iter()
            .map(Arc::new)
            .collect();

        // The board always needs two sides.
        if teams.is_empty() {
            teams.push(Team::default_home());
        }
        if teams.len() == 1 {
            teams.push(Team::default_visitors());
        }

        let gt_path = self.data_dir.join(GAME_TYPES_FILE);
        let mut game_types: Vec<Arc<GameType>> = read_or_seed(&gt_path, GameTypesFile::default)?
            .game_types
            .into_iter()
            .filter(|gt| match gt.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(game_type = %gt.name, error = %e, "dropping preset with invalid duration");
                    false
                }
            })
            .map(Arc::new)
            .collect();

        if game_types.is_empty() {
            game_types.push(GameType::standard());
        }

        self.teams = teams;
        self.game_types = game_types;
        Ok(())
    }

    /// Persist the current team list.
    pub fn save_teams(&self) -> Result<(), StoreError> {
        let file = TeamsFile {
            teams: self.teams.iter().map(|t| (**t).clone()).collect(),
        };
        write_toml(&self.data_dir.join(TEAMS_FILE), &file)
    }

    /// Persist the current game-type list.
    pub fn save_game_types(&self) -> Result<(), StoreError> {
        let file = GameTypesFile {
            game_types: self.game_types.iter().map(|gt| (**gt).clone()).collect(),
        };
        write_toml(&self.data_dir.join(GAME_TYPES_FILE), &file)
    }

    /// Append a team preset.
    pub fn add_team(&mut self, team: Arc<Team>) {
        self.teams.push(team);
    }

    /// Append a game-type preset. Fails closed on invalid durations.
    pub fn add_game_type(&mut self, game_type: Arc<GameType>) -> Result<(), crate::ScoreboardError> {
        game_type.validate()?;
        self.game_types.push(game_type);
        Ok(())
    }

    /// Build a match from preset indices, clamping each into range.
    pub fn build_match(&self, local: usize, visit: usize, game_type: usize) -> Match {
        let clamp = |idx: usize, len: usize| idx.min(len.saturating_sub(1));
        Match::new(
            self.teams[clamp(local, self.teams.len())].clone(),
            self.teams[clamp(visit, self.teams.len())].clone(),
            self.game_types[clamp(game_type, self.game_types.len())].clone(),
        )
    }

    /// Build the startup match from the stored selection.
    pub fn initial_match(&self, config: &BoardConfig) -> Match {
        self.build_match(
            config.last_selected_local,
            config.last_selected_visit,
            config.last_selected_game_type,
        )
    }
}

fn read_or_seed<T: Serialize + for<'de> Deserialize<'de>>(
    path: &Path,
    default: impl FnOnce() -> T,
) -> Result<T, StoreError> {
    if !path.exists() {
        let seeded = default();
        write_toml(path, &seeded)?;
        return Ok(seeded);
    }

    let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| StoreError::ParseToml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_toml<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let content = toml::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(|e| StoreError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
