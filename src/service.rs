//! Tokio host for the game engine
//!
//! The engine itself is synchronous and single-threaded; this service is the
//! host that gives it wall-clock time and a place for concurrent views to
//! live. It wraps the manager in an `Arc<RwLock>` (all access serialized, so
//! concurrent score edits cannot lose updates), drives `tick_second()` from
//! a 1 Hz interval task, and fans events out over a broadcast channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::events::{EventSink, GameEvent};
use crate::manager::GameManager;

/// Capacity of the event fan-out channel. Slow views lag rather than block
/// the engine; they re-sync from the next snapshot anyway.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Sink that forwards engine emissions onto the broadcast channel.
struct BroadcastSink(broadcast::Sender<GameEvent>);

impl EventSink for BroadcastSink {
    fn handle_event(&mut self, event: GameEvent) {
        // No receivers yet is fine; views come and go.
        let _ = self.0.send(event);
    }
}

/// Runs a [`GameManager`] on the tokio runtime.
pub struct ScoreboardService {
    manager: Arc<RwLock<GameManager>>,
    events: broadcast::Sender<GameEvent>,
    driver: Option<JoinHandle<()>>,
}

impl ScoreboardService {
    /// Wrap a manager. A forwarding sink is registered so every engine
    /// emission reaches every broadcast subscriber.
    pub fn new(mut manager: GameManager) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        manager.subscribe(BroadcastSink(events.clone()));

        Self {
            manager: Arc::new(RwLock::new(manager)),
            events,
            driver: None,
        }
    }

    /// Shared handle to the manager. Operator frontends take the write lock
    /// per action; views only ever read.
    pub fn manager(&self) -> Arc<RwLock<GameManager>> {
        Arc::clone(&self.manager)
    }

    /// Subscribe to the event stream. Only emissions after this call are
    /// delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Spawn the 1 Hz driver task. Idempotent.
    pub fn start(&mut self) {
        if self.driver.is_some() {
            return;
        }
        let manager = Arc::clone(&self.manager);
        self.driver = Some(tokio::spawn(async move {
            // First tick one full second from now, not immediately.
            let start = tokio::time::Instant::now() + Duration::from_secs(1);
            let mut interval = tokio::time::interval_at(start, Duration::from_secs(1));
            loop {
                interval.tick().await;
                manager.write().await.tick_second();
            }
        }));
        debug!("tick driver started");
    }

    /// Abort the driver task. Timers keep their state; calling
    /// [`ScoreboardService::start`] again resumes the countdowns.
    pub fn stop(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.abort();
            debug!("tick driver stopped");
        }
    }
}

impl Drop for ScoreboardService {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_state::Match;
    use crate::preset::{GameType, Team};

    fn service() -> ScoreboardService {
        let game = Match::new(
            Team::default_home(),
            Team::default_visitors(),
            GameType::standard(),
        );
        ScoreboardService::new(GameManager::new(game).unwrap())
    }

    #[tokio::test]
    async fn broadcasts_operator_mutations() {
        let service = service();
        let mut rx = service.subscribe();

        service.manager().write().await.score_local(2);

        assert_eq!(rx.recv().await.unwrap(), GameEvent::Updated);
        assert_eq!(service.manager().read().await.snapshot().points_local, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn driver_runs_the_clock_down() {
        let mut service = service();
        {
            let manager = service.manager();
            let mut m = manager.write().await;
            m.set_clock("00:02").unwrap();
            m.start_pause_clock();
        }
        let mut rx = service.subscribe();
        service.start();

        // Second 1: plain refresh.
        assert_eq!(rx.recv().await.unwrap(), GameEvent::Updated);
        // Second 2: 00:00 refresh, siren, final refresh.
        assert_eq!(rx.recv().await.unwrap(), GameEvent::Updated);
        assert_eq!(rx.recv().await.unwrap(), GameEvent::Siren);
        assert_eq!(rx.recv().await.unwrap(), GameEvent::Updated);

        let manager = service.manager();
        let snapshot = manager.read().await.snapshot();
        assert_eq!(snapshot.clock_display, "00:00");
        assert!(!snapshot.clock_running);

        service.stop();
    }

    #[tokio::test]
    async fn start_is_idempotent_and_stop_aborts() {
        let mut service = service();
        service.start();
        service.start();
        service.stop();
        service.stop();
    }
}
