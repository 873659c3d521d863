//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the two input channels the core consumes
//! each tick: edge-triggered events and level-triggered hold state. Nothing
//! here knows about the game rules.

pub mod handler;
pub mod map;

pub use megatetris_types as types;

pub use handler::{HoldRelease, InputHandler};
pub use map::{binding_for, should_quit, HoldKey, KeyBinding};
