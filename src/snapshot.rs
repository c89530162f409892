//! Read-only view state
//!
//! On every `Updated` event the display and operator views pull a
//! [`GameSnapshot`] and re-render from it. The snapshot is a plain
//! serializable value with no references into the engine, so it can cross a
//! process or web-view boundary as-is.

use serde::Serialize;

/// Team identity as rendered on the board.
#[derive(Debug, Clone, Serialize)]
pub struct TeamView {
    pub name: String,
    pub logo: String,
    pub color_primary: String,
    pub color_secondary: String,
}

/// Point-in-time state of the whole board.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    // ─── Game clock ─────────────────────────────────────────────────────────
    pub clock_secs: u32,
    /// Clock as `MM:SS`.
    pub clock_display: String,
    pub clock_running: bool,

    // ─── Pregame countdown ──────────────────────────────────────────────────
    pub pregame_display: String,
    pub pregame_running: bool,

    // ─── Match state ────────────────────────────────────────────────────────
    pub current_period: u32,
    pub points_local: u32,
    pub points_visit: u32,
    pub fouls_local: u32,
    pub fouls_visit: u32,

    // ─── Identities ─────────────────────────────────────────────────────────
    pub team_local: TeamView,
    pub team_visit: TeamView,
    pub game_type: String,
    pub quarters: u32,
}

impl std::fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[P{} {}] {} {} - {} {} (fouls {}-{}){}",
            self.current_period,
            self.clock_display,
            self.team_local.name,
            self.points_local,
            self.points_visit,
            self.team_visit.name,
            self.fouls_local,
            self.fouls_visit,
            if self.clock_running { " *" } else { "" },
        )
    }
}
