pub mod colors;
pub mod duration;
pub mod error;
pub mod events;
pub mod logging;
pub mod manager;
pub mod match_state;
pub mod preset;
pub mod repl;
pub mod service;
pub mod snapshot;
pub mod store;
pub mod timer;


// Re-exports for convenience
pub use duration::{format_mmss, parse_mmss};
pub use error::ScoreboardError;
pub use events::{EventSink, GameEvent};
pub use manager::GameManager;
pub use match_state::Match;
pub use preset::{GameType, Team};
pub use service::ScoreboardService;
pub use snapshot::{GameSnapshot, TeamView};
pub use store::{BoardConfig, PresetStore, StoreError};
pub use timer::{CountdownTimer, TimerEvent};
