//! Megatetris (workspace facade crate).
//!
//! Re-exports the game crates under `megatetris::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use megatetris_core as core;
pub use megatetris_input as input;
pub use megatetris_term as term;
pub use megatetris_types as types;
