//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state. It has no dependency on
//! the terminal, input devices or the clock: a session advances only when
//! [`Session::tick`] is called, and the same seed always deals the same pieces.
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size occupancy grid with row clearing
//! - [`pieces`]: shape catalog and the I-piece rotation table
//! - [`piece`]: the active piece and its rotate/move/descend probes
//! - [`rng`]: shuffled 7-piece queue
//! - [`scoring`]: score, lines, level and fall interval
//! - [`session`]: one game, tick by tick
//! - [`status`]: the seam through which progress reaches a display
//!
//! # Game Rules
//!
//! - **Rotation**: quarter turns about the anchor; the I piece steps through a
//!   fixed four-state table once; O never rotates. A rotation that would leave
//!   the board or overlap the stack is refused. No wall kicks.
//! - **Gravity**: the piece falls one row every `fall_interval` ticks. Holding
//!   soft drop adds one extra descent per tick.
//! - **Locking**: a piece that cannot descend locks immediately.
//! - **Scoring**: 100 for the first row of a clear, 50 more for each further
//!   row in the same pass. Reaching `1000 * level` points levels up.
//! - **Game over**: any locked cell in the top row.
//!
//! # Example
//!
//! ```
//! use megatetris_core::{GameConfig, Session, TickOutcome};
//! use megatetris_core::types::{HeldKeys, TickInput};
//!
//! let mut game = Session::new(GameConfig::default(), ());
//!
//! let soft_drop = TickInput::held(HeldKeys { down: true, ..HeldKeys::default() });
//! while game.lines() == 0 && game.tick(&soft_drop) == TickOutcome::Running {}
//!
//! // Stacking pieces in the middle column never completes a row.
//! assert!(game.is_game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod status;

pub use megatetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::Tetromino;
pub use pieces::{get_shape, rotate_offsets, PieceShape, I_ROTATIONS};
pub use rng::PieceQueue;
pub use scoring::Progression;
pub use session::{DropOutcome, GameConfig, Session, TickOutcome};
pub use status::StatusSink;
