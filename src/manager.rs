//! Game manager
//!
//! [`GameManager`] is the single point of mutation for a running game: it
//! owns the current [`Match`], the game clock, and the pregame countdown,
//! and it is the only place events are emitted from. Operator actions call
//! its methods; the host calls [`GameManager::tick_second`] once per second;
//! views subscribe with an [`EventSink`] and re-read the snapshot on every
//! `Updated`.
//!
//! Event wiring:
//! - game-clock tick → `Updated` (refresh only)
//! - game-clock finished → `Siren`, then `Updated`
//! - pregame finished → `Siren`, then the game clock auto-starts (normal
//!   start semantics), then `Updated`
//!
//! The pregame-to-game transition is the only automatic one; periods and
//! match replacement are always operator-initiated.

use tracing::info;

use crate::error::ScoreboardError;
use crate::events::{EventSink, GameEvent};
use crate::match_state::Match;
use crate::snapshot::{GameSnapshot, TeamView};
use crate::timer::{CountdownTimer, TimerEvent};

/// Owns one match and two timers; re-emits a unified `Updated`/`Siren`
/// stream for any number of subscribed views.
pub struct GameManager {
    game: Match,
    clock: CountdownTimer,
    pregame: CountdownTimer,
    sinks: Vec<Box<dyn EventSink + Send + Sync>>,
}

impl GameManager {
    /// Build a manager around an initial match. The game clock starts at the
    /// match's quarter length, paused; the pregame countdown starts unset.
    pub fn new(game: Match) -> Result<Self, ScoreboardError> {
        let clock = CountdownTimer::new(&game.game_type.time_per_quarter)?;
        let pregame = CountdownTimer::new("00:00")?;
        Ok(Self {
            game,
            clock,
            pregame,
            sinks: Vec::new(),
        })
    }

    /// Register a view. Every sink sees every emission from then on.
    pub fn subscribe<S: EventSink + Send + Sync + 'static>(&mut self, sink: S) {
        self.sinks.push(Box::new(sink));
    }

    fn emit(&mut self, event: GameEvent) {
        for sink in &mut self.sinks {
            sink.handle_event(event);
        }
    }

    // ─── Game clock ─────────────────────────────────────────────────────────

    /// Toggle the game clock between running and paused. No-op when the
    /// clock is at zero.
    pub fn start_pause_clock(&mut self) {
        if self.clock.remaining_secs() == 0 {
            return;
        }
        if self.clock.is_running() {
            self.clock.pause();
        } else {
            self.clock.start();
        }
        self.emit(GameEvent::Updated);
    }

    /// Reset the clock to the current game type's quarter length.
    pub fn reset_clock(&mut self) {
        // The quarter length was validated when the match was configured.
        let mmss = self.game.game_type.time_per_quarter.clone();
        if self.clock.reset(&mmss).is_ok() {
            self.emit(GameEvent::Updated);
        }
    }

    /// Set the clock to an explicit value, leaving it paused.
    ///
    /// On a malformed string the clock keeps both its remaining time and its
    /// running state; nothing is emitted.
    pub fn set_clock(&mut self, mmss: &str) -> Result<(), ScoreboardError> {
        self.clock.reset(mmss)?;
        self.emit(GameEvent::Updated);
        Ok(())
    }

    // ─── Score and fouls ────────────────────────────────────────────────────

    /// Add (or subtract) local points, clamped at zero.
    pub fn score_local(&mut self, delta: i32) {
        self.game.score_local(delta);
        self.emit(GameEvent::Updated);
    }

    /// Add (or subtract) visiting points, clamped at zero.
    pub fn score_visit(&mut self, delta: i32) {
        self.game.score_visit(delta);
        self.emit(GameEvent::Updated);
    }

    /// Adjust local fouls, clamped at zero. Pass 1 for the usual increment.
    pub fn foul_local(&mut self, delta: i32) {
        self.game.foul_local(delta);
        self.emit(GameEvent::Updated);
    }

    /// Adjust visiting fouls, clamped at zero.
    pub fn foul_visit(&mut self, delta: i32) {
        self.game.foul_visit(delta);
        self.emit(GameEvent::Updated);
    }

    // ─── Period ─────────────────────────────────────────────────────────────

    /// Advance to the next period: fouls reset, clock back to the quarter
    /// length, points untouched.
    pub fn advance_period(&mut self) {
        self.game.advance_period();
        let mmss = self.game.game_type.time_per_quarter.clone();
        let _ = self.clock.reset(&mmss);
        info!(period = self.game.current_period, "period advanced");
        self.emit(GameEvent::Updated);
    }

    // ─── Pregame countdown ──────────────────────────────────────────────────

    /// Configure the pregame countdown without starting it.
    pub fn set_pregame_countdown(&mut self, mmss: &str) -> Result<(), ScoreboardError> {
        self.pregame.reset(mmss)?;
        self.emit(GameEvent::Updated);
        Ok(())
    }

    /// Start the pregame countdown if it has time on it.
    pub fn start_pregame(&mut self) {
        if self.pregame.remaining_secs() == 0 {
            return;
        }
        self.pregame.start();
        self.emit(GameEvent::Updated);
    }

    // ─── Match configuration ────────────────────────────────────────────────

    /// Replace the current match: both timers pause, the clock resets to the
    /// new quarter length, the pregame countdown clears. Emits `Updated`
    /// once at the end. Fails without side effects if the new game type's
    /// quarter length does not parse.
    pub fn configure_match(&mut self, game: Match) -> Result<(), ScoreboardError> {
        // Validate before touching anything; a bad preset must not leave the
        // timers half-reconfigured.
        let mmss = game.game_type.time_per_quarter.clone();
        crate::duration::parse_mmss(&mmss)?;

        self.clock.pause();
        self.pregame.pause();
        let _ = self.clock.reset(&mmss);
        let _ = self.pregame.reset("00:00");

        info!(
            local = %game.team_local.name,
            visit = %game.team_visit.name,
            game_type = %game.game_type.name,
            "match configured"
        );
        self.game = game;
        self.emit(GameEvent::Updated);
        Ok(())
    }

    // ─── Tick driver ────────────────────────────────────────────────────────

    /// Advance both timers by one elapsed second and fan out the resulting
    /// events. Called by the host's 1 Hz scheduler; tests call it directly.
    pub fn tick_second(&mut self) {
        // Pregame first: its finish may auto-start the clock, and that start
        // takes effect on the *next* second, not this one.
        let clock_was_running = self.clock.is_running();
        let mut auto_started = false;
        for event in self.pregame.tick() {
            match event {
                // The pregame display is only polled; no refresh per tick.
                TimerEvent::Tick { .. } => {}
                TimerEvent::Finished => {
                    info!("pregame countdown finished, starting game clock");
                    self.emit(GameEvent::Siren);
                    self.clock.start();
                    auto_started = !clock_was_running && self.clock.is_running();
                    self.emit(GameEvent::Updated);
                }
            }
        }

        if auto_started {
            return;
        }

        for event in self.clock.tick() {
            match event {
                TimerEvent::Tick { .. } => self.emit(GameEvent::Updated),
                TimerEvent::Finished => {
                    info!("game clock reached zero");
                    self.emit(GameEvent::Siren);
                    self.emit(GameEvent::Updated);
                }
            }
        }
    }

    // ─── Read access ────────────────────────────────────────────────────────

    pub fn current_match(&self) -> &Match {
        &self.game
    }

    pub fn clock(&self) -> &CountdownTimer {
        &self.clock
    }

    pub fn pregame(&self) -> &CountdownTimer {
        &self.pregame
    }

    /// Point-in-time copy of everything a view renders.
    pub fn snapshot(&self) -> GameSnapshot {
        let team_view = |team: &crate::preset::Team| TeamView {
            name: team.name.clone(),
            logo: team.logo.clone(),
            color_primary: team.color_primary.clone(),
            color_secondary: team.color_secondary.clone(),
        };

        GameSnapshot {
            clock_secs: self.clock.remaining_secs(),
            clock_display: self.clock.remaining_mmss(),
            clock_running: self.clock.is_running(),
            pregame_display: self.pregame.remaining_mmss(),
            pregame_running: self.pregame.is_running(),
            current_period: self.game.current_period,
            points_local: self.game.points_local,
            points_visit: self.game.points_visit,
            fouls_local: self.game.fouls_local,
            fouls_visit: self.game.fouls_visit,
            team_local: team_view(&self.game.team_local),
            team_visit: team_view(&self.game.team_visit),
            game_type: self.game.game_type.name.clone(),
            quarters: self.game.game_type.quarters,
        }
    }
}
