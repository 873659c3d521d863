//! Per-tick input handler for terminal environments.
//!
//! Keys feed two channels: edge events (rotate, level skip) queued once per
//! key-down, and hold state (left, right, soft drop) sampled once per tick.
//!
//! Terminals with crossterm keyboard enhancement report key releases, so a hold
//! lasts until the release arrives. Other terminals only repeat key-down
//! events; there every press or repeat holds the key for the next tick, plus
//! an optional timeout after the last one seen.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::trace;

use crate::map::{binding_for, HoldKey, KeyBinding};
use crate::types::{HeldKeys, InputEvent, TickInput, HOLD_TIMEOUT_MS, MAX_TICK_EVENTS};

/// How a hold ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldRelease {
    /// The terminal sends key-release events
    ReleaseEvents,
    /// No release events: the hold expires this long after the last press or repeat
    Timeout(Duration),
}

impl Default for HoldRelease {
    fn default() -> Self {
        HoldRelease::Timeout(Duration::from_millis(HOLD_TIMEOUT_MS))
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct HoldState {
    /// Last press/repeat while held; `None` once released or expired
    last_seen: Option<Instant>,
    /// A press arrived since the last tick
    latched: bool,
}

/// Collects key events between ticks.
#[derive(Debug, Clone)]
pub struct InputHandler {
    holds: [HoldState; 3],
    pending: ArrayVec<InputEvent, MAX_TICK_EVENTS>,
    release: HoldRelease,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_release(HoldRelease::default())
    }

    pub fn with_release(release: HoldRelease) -> Self {
        Self {
            holds: [HoldState::default(); 3],
            pending: ArrayVec::new(),
            release,
        }
    }

    /// Feed one key event seen at `now`.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        let Some(binding) = binding_for(key.code) else {
            return;
        };

        match (binding, key.kind) {
            (KeyBinding::Press(event), KeyEventKind::Press) => {
                // Overflow means the game is far behind; extra presses are dropped.
                if self.pending.try_push(event).is_err() {
                    trace!(?event, "tick event queue full, press dropped");
                }
            }
            (KeyBinding::Press(_), _) => {}
            (KeyBinding::Hold(hold), KeyEventKind::Press | KeyEventKind::Repeat) => {
                let state = &mut self.holds[hold.index()];
                state.last_seen = Some(now);
                state.latched = true;
            }
            (KeyBinding::Hold(hold), KeyEventKind::Release) => {
                // A tap released before the tick still counts through `latched`.
                self.holds[hold.index()].last_seen = None;
            }
        }
    }

    fn is_held(&self, hold: HoldKey, now: Instant) -> bool {
        let state = self.holds[hold.index()];
        if state.latched {
            return true;
        }
        match (self.release, state.last_seen) {
            (_, None) => false,
            (HoldRelease::ReleaseEvents, Some(_)) => true,
            (HoldRelease::Timeout(timeout), Some(at)) => now.saturating_duration_since(at) <= timeout,
        }
    }

    /// Current hold state without consuming anything
    pub fn held(&self, now: Instant) -> HeldKeys {
        HeldKeys {
            left: self.is_held(HoldKey::Left, now),
            right: self.is_held(HoldKey::Right, now),
            down: self.is_held(HoldKey::Down, now),
        }
    }

    /// Drain queued edge events and sample holds for one tick.
    pub fn take_tick_input(&mut self, now: Instant) -> TickInput {
        let held = self.held(now);

        for state in &mut self.holds {
            state.latched = false;
            if let (HoldRelease::Timeout(timeout), Some(at)) = (self.release, state.last_seen) {
                if now.saturating_duration_since(at) > timeout {
                    state.last_seen = None;
                }
            }
        }

        TickInput {
            events: std::mem::take(&mut self.pending),
            held,
        }
    }

    /// Forget all holds and queued events
    pub fn reset(&mut self) {
        self.holds = [HoldState::default(); 3];
        self.pending.clear();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
