//! Match model
//!
//! A [`Match`] is the mutable state of one game in progress: the two team
//! identities, the game-type preset, and the dynamic score/foul/period
//! fields. It emits no notifications of its own; the manager is the
//! notification boundary.

use std::sync::Arc;

use crate::preset::{GameType, Team};

/// One game in progress or about to be played.
///
/// Counters are unsigned, so the "never negative" invariant is structural;
/// signed deltas are applied with saturating arithmetic and clamp at zero.
#[derive(Debug, Clone)]
pub struct Match {
    pub team_local: Arc<Team>,
    pub team_visit: Arc<Team>,
    pub game_type: Arc<GameType>,

    /// Current period, starting at 1.
    pub current_period: u32,
    pub points_local: u32,
    pub points_visit: u32,
    pub fouls_local: u32,
    pub fouls_visit: u32,
}

impl Match {
    pub fn new(team_local: Arc<Team>, team_visit: Arc<Team>, game_type: Arc<GameType>) -> Self {
        Self {
            team_local,
            team_visit,
            game_type,
            current_period: 1,
            points_local: 0,
            points_visit: 0,
            fouls_local: 0,
            fouls_visit: 0,
        }
    }

    /// Add (or subtract) points for the local side, clamped at zero.
    pub fn score_local(&mut self, delta: i32) {
        self.points_local = self.points_local.saturating_add_signed(delta);
    }

    /// Add (or subtract) points for the visiting side, clamped at zero.
    pub fn score_visit(&mut self, delta: i32) {
        self.points_visit = self.points_visit.saturating_add_signed(delta);
    }

    /// Adjust local fouls, clamped at zero.
    pub fn foul_local(&mut self, delta: i32) {
        self.fouls_local = self.fouls_local.saturating_add_signed(delta);
    }

    /// Adjust visiting fouls, clamped at zero.
    pub fn foul_visit(&mut self, delta: i32) {
        self.fouls_visit = self.fouls_visit.saturating_add_signed(delta);
    }

    /// Zero both point totals.
    pub fn reset_scores(&mut self) {
        self.points_local = 0;
        self.points_visit = 0;
    }

    /// Zero both foul totals.
    pub fn reset_fouls(&mut self) {
        self.fouls_local = 0;
        self.fouls_visit = 0;
    }

    /// Move to the next period and reset fouls. Points and the clock are
    /// untouched; period/time coupling is the manager's job.
    pub fn advance_period(&mut self) {
        self.current_period += 1;
        self.reset_fouls();
    }
}
