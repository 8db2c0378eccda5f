#![deny(warnings, missing_copy_implementations, missing_debug_implementations, missing_docs)]
//! Shared vocabulary and capability traits for maze-chase game states.
//!
//! The search crates in this workspace never implement the game rules
//! themselves. A host provides a game-state type and implements the
//! capability traits in [`types`]; the engine and scoring code consume states
//! exclusively through those traits, each of which covers exactly one concern
//! so callers can name the narrowest bound they actually need.

pub mod types;

pub use types::{
    Action, ActionQueryableGame, AdversaryGettableGame, AdversaryState, AgentCountQueryableGame,
    AgentIndex, OutcomeDeterminableGame, PelletGettableGame, Position, PowerPelletGettableGame,
    ProtagonistGettableGame, ScoreGettableGame, SimulableGame,
};
