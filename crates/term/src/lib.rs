//! Terminal front end for the game.
//!
//! Renders into a plain framebuffer that is diffed and flushed through
//! crossterm, instead of going through a widget toolkit. Cells are two
//! columns wide so the board keeps a roughly square aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod status;

pub use megatetris_core as core;
pub use megatetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{level_background, AnchorY, GameView, Scene, Viewport, LEVEL_BACKGROUNDS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use status::StatusPanel;
