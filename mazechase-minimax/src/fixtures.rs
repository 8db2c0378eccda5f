//! Test-only game doubles.
//!
//! The production code never implements game rules; these minimal boards
//! exist so the engine and the scorer can be exercised against known
//! layouts.

use itertools::Itertools;
use mazechase_game_types::types::{
    Action, ActionQueryableGame, AdversaryGettableGame, AdversaryState, AgentCountQueryableGame,
    AgentIndex, OutcomeDeterminableGame, PelletGettableGame, Position, PowerPelletGettableGame,
    ProtagonistGettableGame, ScoreGettableGame, SimulableGame,
};

/// Grid world parsed from an ASCII layout.
///
/// `#` wall, `.` pellet, `o` power pellet, `P` protagonist, `G` hostile
/// adversary, `F` frightened adversary, space for an open cell. Adversaries
/// take agent indices 1.. in reading order.
#[derive(Debug, Clone)]
pub(crate) struct GridState {
    walls: Vec<Vec<bool>>,
    protagonist: Position,
    heading: Action,
    adversaries: Vec<AdversaryState>,
    pellets: Vec<Position>,
    power_pellets: Vec<Position>,
    score: f64,
    won: bool,
    lost: bool,
}

impl GridState {
    pub(crate) fn parse(layout: &str) -> GridState {
        let rows = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect_vec();

        let mut state = GridState {
            walls: vec![],
            protagonist: Position { x: 0, y: 0 },
            heading: Action::Stay,
            adversaries: vec![],
            pellets: vec![],
            power_pellets: vec![],
            score: 0.0,
            won: false,
            lost: false,
        };

        for (y, row) in rows.iter().enumerate() {
            let mut wall_row = vec![];
            for (x, cell) in row.chars().enumerate() {
                let here = Position {
                    x: x as i32,
                    y: y as i32,
                };
                wall_row.push(cell == '#');
                match cell {
                    'P' => state.protagonist = here,
                    'G' => state.adversaries.push(AdversaryState {
                        position: here,
                        frightened_turns: 0,
                    }),
                    'F' => state.adversaries.push(AdversaryState {
                        position: here,
                        frightened_turns: 40,
                    }),
                    '.' => state.pellets.push(here),
                    'o' => state.power_pellets.push(here),
                    _ => {}
                }
            }
            state.walls.push(wall_row);
        }

        state
    }

    pub(crate) fn headed(mut self, heading: Action) -> GridState {
        self.heading = heading;
        self
    }

    pub(crate) fn with_score(mut self, score: f64) -> GridState {
        self.score = score;
        self
    }

    fn is_wall(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 {
            return true;
        }
        self.walls
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
            .copied()
            .unwrap_or(true)
    }
}

impl AgentCountQueryableGame for GridState {
    fn agent_count(&self) -> usize {
        1 + self.adversaries.len()
    }
}

impl OutcomeDeterminableGame for GridState {
    fn is_won(&self) -> bool {
        self.won
    }

    fn is_lost(&self) -> bool {
        self.lost
    }
}

impl ActionQueryableGame for GridState {
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Action> {
        if agent.is_protagonist() {
            // The protagonist can always stand still.
            let mut actions = vec![Action::Stay];
            for action in [Action::North, Action::South, Action::East, Action::West] {
                if !self.is_wall(self.protagonist.shifted(action)) {
                    actions.push(action);
                }
            }
            actions
        } else {
            let adversary = &self.adversaries[agent.as_usize() - 1];
            [Action::North, Action::South, Action::East, Action::West]
                .into_iter()
                .filter(|action| !self.is_wall(adversary.position.shifted(*action)))
                .collect()
        }
    }
}

impl SimulableGame for GridState {
    fn generate_successor(&self, agent: AgentIndex, action: Action) -> GridState {
        let mut next = self.clone();

        if agent.is_protagonist() {
            let destination = self.protagonist.shifted(action);
            assert!(
                !self.is_wall(destination),
                "illegal protagonist action {:?}",
                action
            );
            next.protagonist = destination;
            if action != Action::Stay {
                next.heading = action;
            }
            if let Some(index) = next.pellets.iter().position(|pellet| *pellet == destination) {
                next.pellets.remove(index);
                next.score += 10.0;
                if next.pellets.is_empty() {
                    next.won = true;
                }
            }
            if let Some(index) = next
                .power_pellets
                .iter()
                .position(|pellet| *pellet == destination)
            {
                next.power_pellets.remove(index);
                for adversary in &mut next.adversaries {
                    adversary.frightened_turns = 40;
                }
            }
            if next
                .adversaries
                .iter()
                .any(|adversary| !adversary.is_frightened() && adversary.position == destination)
            {
                next.lost = true;
            }
        } else {
            let index = agent.as_usize() - 1;
            let destination = self.adversaries[index].position.shifted(action);
            assert!(
                !self.is_wall(destination),
                "illegal adversary action {:?}",
                action
            );
            next.adversaries[index].position = destination;
            if !next.adversaries[index].is_frightened() && destination == next.protagonist {
                next.lost = true;
            }
        }

        next
    }
}

impl ProtagonistGettableGame for GridState {
    fn protagonist_position(&self) -> Position {
        self.protagonist
    }

    fn protagonist_heading(&self) -> Action {
        self.heading
    }
}

impl ScoreGettableGame for GridState {
    fn get_score(&self) -> f64 {
        self.score
    }
}

impl PelletGettableGame for GridState {
    fn get_all_pellets(&self) -> Vec<Position> {
        self.pellets.clone()
    }

    fn get_pellet_count(&self) -> usize {
        self.pellets.len()
    }
}

impl PowerPelletGettableGame for GridState {
    fn get_all_power_pellets(&self) -> Vec<Position> {
        self.power_pellets.clone()
    }
}

impl AdversaryGettableGame for GridState {
    fn get_adversaries(&self) -> Vec<AdversaryState> {
        self.adversaries.clone()
    }
}

/// A game that never ends and counts how many successive moves led to each
/// node. Every agent always has the same two actions, so the engine's
/// cutoff logic is the only thing bounding the tree.
#[derive(Debug, Clone)]
pub(crate) struct DepthProbe {
    pub(crate) moves_made: usize,
    pub(crate) agents: usize,
}

impl AgentCountQueryableGame for DepthProbe {
    fn agent_count(&self) -> usize {
        self.agents
    }
}

impl OutcomeDeterminableGame for DepthProbe {
    fn is_won(&self) -> bool {
        false
    }

    fn is_lost(&self) -> bool {
        false
    }
}

impl ActionQueryableGame for DepthProbe {
    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Action> {
        vec![Action::East, Action::West]
    }
}

impl SimulableGame for DepthProbe {
    fn generate_successor(&self, _agent: AgentIndex, _action: Action) -> DepthProbe {
        DepthProbe {
            moves_made: self.moves_made + 1,
            agents: self.agents,
        }
    }
}

impl ProtagonistGettableGame for DepthProbe {
    fn protagonist_position(&self) -> Position {
        Position { x: 0, y: 0 }
    }

    fn protagonist_heading(&self) -> Action {
        Action::Stay
    }
}
