#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements depth-limited minimax for maze-chase games. You
//! provide a game state implementing the capability traits from
//! [`mazechase_game_types`] and a scoring function that turns a board into
//! anything ordered, and the engine picks the protagonist's next action.
//!
//! We lean on the host's game state for all of the game logic, and in
//! particular for successor generation, which is used to produce the next
//! board states. The engine itself never mutates a state and keeps nothing
//! between calls; every decision is recomputed from scratch.
//!
//! ```ignore
//! use mazechase_minimax::{MinimaxRunner, SearchOptions};
//! use mazechase_minimax::scoring::standard_score;
//!
//! // `state` is your game state, implementing the capability traits from
//! // `mazechase_game_types`.
//! let runner = MinimaxRunner::new(
//!     state,
//!     |state: &MazeState| standard_score(state),
//!     "standard",
//!     SearchOptions::default(),
//! );
//!
//! // Search three full rounds ahead; every agent moves once per round.
//! let action = runner.choose_action(3);
//! ```

pub mod paranoid;
pub mod scoring;

pub use paranoid::{MinimaxReturn, MinimaxRunner, Scorable, SearchOptions};

#[cfg(test)]
pub(crate) mod fixtures;
