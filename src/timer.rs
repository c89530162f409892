//! Countdown timer state machine
//!
//! A `CountdownTimer` counts whole seconds down to zero. It owns no clock of
//! its own: the host drives it by calling [`CountdownTimer::tick`] once per
//! elapsed second (the service layer runs a 1 Hz interval; tests call it
//! directly). Operations return the [`TimerEvent`]s they produce and the
//! caller fans them out, so there is no hidden callback state.
//!
//! # Lifecycle
//!
//! 1. Built (or reset) from an `MM:SS` string, paused
//! 2. `start()` begins the countdown, `pause()` halts it
//! 3. Each driven second decrements and yields a `Tick`
//! 4. The decrement that reaches zero yields the `00:00` tick, stops the
//!    timer, and yields exactly one `Finished`

use tracing::debug;

use crate::duration::{format_mmss, parse_mmss};
use crate::error::ScoreboardError;

/// Events produced by a countdown timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// The remaining time changed (one second elapsed, or the timer was
    /// set/reset to a new value).
    Tick {
        remaining_secs: u32,
        formatted: String,
    },

    /// The countdown reached zero. Fires exactly once per reach-zero, after
    /// the `00:00` tick.
    Finished,
}

/// A single countable-down interval with start/pause/reset semantics.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    remaining: u32,
    running: bool,
}

impl CountdownTimer {
    /// Create a paused timer from an `MM:SS` string.
    pub fn new(mmss: &str) -> Result<Self, ScoreboardError> {
        Ok(Self {
            remaining: parse_mmss(mmss)?,
            running: false,
        })
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    pub fn remaining_mmss(&self) -> String {
        format_mmss(self.remaining)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Overwrite the remaining time without touching the running state.
    ///
    /// Returns the immediate tick carrying the new value so observers can
    /// refresh. The timer is left unchanged on parse failure.
    pub fn set_from_mmss(&mut self, mmss: &str) -> Result<TimerEvent, ScoreboardError> {
        self.remaining = parse_mmss(mmss)?;
        Ok(self.current_tick())
    }

    /// Reset to the given value and leave the timer paused.
    ///
    /// All-or-nothing: the string is parsed before any state changes, so a
    /// malformed value leaves both the remaining time and the running state
    /// untouched.
    pub fn reset(&mut self, mmss: &str) -> Result<TimerEvent, ScoreboardError> {
        let secs = parse_mmss(mmss)?;
        self.pause();
        self.remaining = secs;
        debug!(remaining = secs, "timer reset");
        Ok(self.current_tick())
    }

    /// Begin counting down. No-op if already running or nothing remains.
    pub fn start(&mut self) {
        if self.remaining == 0 || self.running {
            return;
        }
        self.running = true;
        debug!(remaining = self.remaining, "timer started");
    }

    /// Halt the countdown without changing the remaining time. Idempotent;
    /// no tick can be observed after this returns.
    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            debug!(remaining = self.remaining, "timer paused");
        }
    }

    /// Advance by one elapsed second of wall-clock time.
    ///
    /// Decrement-then-check: the tick showing `00:00` is emitted before the
    /// single `Finished` event, and the timer transitions to not-running in
    /// the same call.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        if !self.running {
            return Vec::new();
        }

        let mut events = Vec::new();
        if self.remaining > 0 {
            self.remaining -= 1;
            events.push(self.current_tick());
        }
        if self.remaining == 0 {
            self.running = false;
            debug!("timer finished");
            events.push(TimerEvent::Finished);
        }
        events
    }

    fn current_tick(&self) -> TimerEvent {
        TimerEvent::Tick {
            remaining_secs: self.remaining,
            formatted: self.remaining_mmss(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks_of(events: &[TimerEvent]) -> Vec<u32> {
        events
            .iter()
            .filter_map(|e| match e {
                TimerEvent::Tick { remaining_secs, .. } => Some(*remaining_secs),
                TimerEvent::Finished => None,
            })
            .collect()
    }

    #[test]
    fn new_timer_is_paused_with_parsed_value() {
        let timer = CountdownTimer::new("05:00").unwrap();
        assert_eq!(timer.remaining_secs(), 300);
        assert_eq!(timer.remaining_mmss(), "05:00");
        assert!(!timer.is_running());
    }

    #[test]
    fn new_rejects_malformed_input() {
        assert!(CountdownTimer::new("bad").is_err());
        assert!(CountdownTimer::new("10:60").is_err());
    }

    #[test]
    fn full_countdown_emits_strictly_decreasing_ticks_then_one_finished() {
        let mut timer = CountdownTimer::new("00:05").unwrap();
        timer.start();

        let mut all = Vec::new();
        for _ in 0..5 {
            all.extend(timer.tick());
        }

        assert_eq!(ticks_of(&all), vec![4, 3, 2, 1, 0]);
        assert_eq!(
            all.iter()
                .filter(|e| matches!(e, TimerEvent::Finished))
                .count(),
            1
        );
        // Finished comes after the 00:00 tick.
        assert_eq!(all.last(), Some(&TimerEvent::Finished));
        assert!(!timer.is_running());

        // A dead timer stays silent.
        assert!(timer.tick().is_empty());
    }

    #[test]
    fn final_tick_shows_zero_before_finished() {
        let mut timer = CountdownTimer::new("00:01").unwrap();
        timer.start();
        let events = timer.tick();
        assert_eq!(
            events,
            vec![
                TimerEvent::Tick {
                    remaining_secs: 0,
                    formatted: "00:00".to_string(),
                },
                TimerEvent::Finished,
            ]
        );
    }

    #[test]
    fn starting_at_zero_is_a_no_op() {
        let mut timer = CountdownTimer::new("00:00").unwrap();
        timer.start();
        assert!(!timer.is_running());
        assert!(timer.tick().is_empty());
    }

    #[test]
    fn start_and_pause_are_idempotent() {
        let mut timer = CountdownTimer::new("01:00").unwrap();
        timer.start();
        timer.start();
        assert!(timer.is_running());

        timer.pause();
        timer.pause();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 60);
    }

    #[test]
    fn paused_timer_does_not_tick() {
        let mut timer = CountdownTimer::new("01:00").unwrap();
        timer.start();
        timer.tick();
        timer.pause();
        assert!(timer.tick().is_empty());
        assert_eq!(timer.remaining_secs(), 59);
    }

    #[test]
    fn reset_leaves_timer_paused_and_returns_tick() {
        let mut timer = CountdownTimer::new("10:00").unwrap();
        timer.start();

        let event = timer.reset("02:30").unwrap();
        assert_eq!(
            event,
            TimerEvent::Tick {
                remaining_secs: 150,
                formatted: "02:30".to_string(),
            }
        );
        assert!(!timer.is_running());
    }

    #[test]
    fn failed_reset_changes_nothing() {
        let mut timer = CountdownTimer::new("10:00").unwrap();
        timer.start();

        assert!(timer.reset("oops").is_err());
        assert_eq!(timer.remaining_secs(), 600);
        assert!(timer.is_running());
    }

    #[test]
    fn set_from_mmss_keeps_running_state() {
        let mut timer = CountdownTimer::new("10:00").unwrap();
        timer.start();
        timer.set_from_mmss("00:10").unwrap();
        assert!(timer.is_running());
        assert_eq!(timer.remaining_secs(), 10);
    }
}
