//! Event handling for TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use scrivano_error::{ScrivanoError, ScrivanoResult, TuiError, TuiErrorKind};
use std::time::Duration;

/// Event types for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Tick event for periodic updates
    Tick,
    /// Key press event
    Key(KeyEvent),
}

/// Event handler that polls for terminal events.
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with specified tick rate in milliseconds.
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Get the next event, blocking until an event is available or timeout.
    ///
    /// Ticks fire on timeout so the caller can drain pipeline events and
    /// redraw even when the keyboard is idle.
    #[tracing::instrument(skip(self))]
    pub fn next(&self) -> ScrivanoResult<Option<Event>> {
        if event::poll(self.tick_rate).map_err(|e| {
            ScrivanoError::from(TuiError::new(TuiErrorKind::EventPoll(e.to_string())))
        })? {
            match event::read().map_err(|e| {
                ScrivanoError::from(TuiError::new(TuiErrorKind::EventRead(e.to_string())))
            })? {
                CrosstermEvent::Key(key) => Ok(Some(Event::Key(key))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(Event::Tick))
        }
    }
}
