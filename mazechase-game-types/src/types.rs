//! The core types and capability traits every game state is queried through.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single move available to an agent.
///
/// `Stay` is the distinguished no-op: it is its own reverse and never counts
/// as a heading for movement shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move one cell up the grid (decreasing `y`).
    North,
    /// Move one cell down the grid (increasing `y`).
    South,
    /// Move one cell right (increasing `x`).
    East,
    /// Move one cell left (decreasing `x`).
    West,
    /// Stand still.
    Stay,
}

impl Action {
    /// Every action, directional moves first, `Stay` last.
    pub const fn all() -> [Action; 5] {
        [
            Action::North,
            Action::South,
            Action::East,
            Action::West,
            Action::Stay,
        ]
    }

    /// The opposite direction. `Stay` reverses to itself.
    pub const fn reverse(self) -> Action {
        match self {
            Action::North => Action::South,
            Action::South => Action::North,
            Action::East => Action::West,
            Action::West => Action::East,
            Action::Stay => Action::Stay,
        }
    }

    /// Whether this action is the no-op.
    pub const fn is_stay(self) -> bool {
        matches!(self, Action::Stay)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "north",
            Action::South => "south",
            Action::East => "east",
            Action::West => "west",
            Action::Stay => "stay",
        };
        write!(f, "{}", name)
    }
}

/// Identifies whose turn it is.
///
/// Index 0 is the maximizing protagonist; every other index is a minimizing
/// adversary. Agents take turns in increasing index order, wrapping back to
/// the protagonist once everyone has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentIndex(pub u8);

impl AgentIndex {
    /// The maximizing agent.
    pub const PROTAGONIST: AgentIndex = AgentIndex(0);

    /// Whether this index is the protagonist.
    pub const fn is_protagonist(self) -> bool {
        self.0 == 0
    }

    #[allow(missing_docs)]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The agent that moves after this one in a cycle of `agent_count` agents.
    pub fn next(self, agent_count: usize) -> AgentIndex {
        AgentIndex(((self.as_usize() + 1) % agent_count) as u8)
    }
}

/// A cell on the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    /// Grid (Manhattan) distance to `other`.
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell reached by taking `action` from this cell.
    pub fn shifted(&self, action: Action) -> Position {
        let (dx, dy) = match action {
            Action::North => (0, -1),
            Action::South => (0, 1),
            Action::East => (1, 0),
            Action::West => (-1, 0),
            Action::Stay => (0, 0),
        };
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snapshot of a single adversary, as reported by the host state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdversaryState {
    /// Where the adversary currently is.
    pub position: Position,
    /// Remaining turns of the frightened countdown; zero means hostile.
    pub frightened_turns: u32,
}

impl AdversaryState {
    /// True while the frightened countdown runs and the adversary can be
    /// captured instead of posing danger.
    pub fn is_frightened(&self) -> bool {
        self.frightened_turns > 0
    }
}

/// Query how many agents are in the game, protagonist included.
pub trait AgentCountQueryableGame {
    /// Total agent count. Always at least 1.
    fn agent_count(&self) -> usize;
}

/// Determine whether the game has been decided.
pub trait OutcomeDeterminableGame {
    /// The protagonist has won.
    fn is_won(&self) -> bool;

    /// The protagonist has lost.
    fn is_lost(&self) -> bool;
}

/// Query the legal actions for a given agent.
pub trait ActionQueryableGame {
    /// The finite, possibly empty, set of legal actions for `agent`, in the
    /// host's enumeration order. Callers may observe that order (first-seen
    /// wins ties), so hosts should keep it deterministic.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Action>;
}

/// Generate successor states.
pub trait SimulableGame: Sized {
    /// The state after `agent` takes `action`. Must not mutate `self`;
    /// passing an illegal action is a contract violation and may panic.
    fn generate_successor(&self, agent: AgentIndex, action: Action) -> Self;
}

/// Query the protagonist's place on the board.
pub trait ProtagonistGettableGame {
    /// The protagonist's current cell.
    fn protagonist_position(&self) -> Position;

    /// The direction the protagonist is currently facing, or [`Action::Stay`]
    /// if it is not moving.
    fn protagonist_heading(&self) -> Action;
}

/// Query the running game score.
pub trait ScoreGettableGame {
    /// The state's intrinsic score so far, from the protagonist's perspective.
    fn get_score(&self) -> f64;
}

/// Query the consumable pellets left on the board.
pub trait PelletGettableGame {
    /// Positions of every remaining pellet.
    fn get_all_pellets(&self) -> Vec<Position>;

    /// How many pellets remain.
    fn get_pellet_count(&self) -> usize;
}

/// Query the power pellets left on the board.
pub trait PowerPelletGettableGame {
    /// Positions of every remaining power pellet.
    fn get_all_power_pellets(&self) -> Vec<Position>;
}

/// Query the adversaries chasing the protagonist.
pub trait AdversaryGettableGame {
    /// One [`AdversaryState`] per adversary, in agent-index order starting
    /// at index 1.
    fn get_adversaries(&self) -> Vec<AdversaryState>;
}
