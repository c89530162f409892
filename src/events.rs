//! Notification contract between the game engine and its views
//!
//! The manager exposes two channels: `Updated` (re-read the snapshot and
//! re-render) and `Siren` (produce an audible/visual alert). Any number of
//! sinks may subscribe; every sink sees every emission, synchronously with
//! the mutation that caused it. Delivery order among sinks is unspecified.

/// Events emitted by [`crate::manager::GameManager`] for display and
/// operator views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Game state changed; views should pull a fresh snapshot.
    Updated,
    /// A countdown reached zero; views should alert.
    Siren,
}

/// Trait for systems that react to game events.
/// Implement this for display views, operator consoles, alert hardware, etc.
pub trait EventSink {
    /// Handle a single event.
    fn handle_event(&mut self, event: GameEvent);

    /// Handle multiple events (default implementation calls `handle_event`
    /// for each).
    fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.handle_event(*event);
        }
    }
}
