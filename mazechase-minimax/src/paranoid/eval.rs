use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

use derivative::Derivative;
use mazechase_game_types::types::{
    Action, ActionQueryableGame, AgentCountQueryableGame, AgentIndex, OutcomeDeterminableGame,
    ProtagonistGettableGame, SimulableGame,
};
use tracing::{info, info_span};

use super::{MinimaxReturn, Scorable, SearchOptions};

#[derive(Derivative, Clone)]
#[derivative(Debug)]
/// This is the struct that wraps a root game state and a scoring function
/// and can be used to run minimax.
///
/// It also outputs traces using the [tracing] crate.
pub struct MinimaxRunner<GameType, ScoreType, ScorableType> {
    /// The root state decisions are made from.
    pub game: GameType,
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
    /// Name recorded on the traces this runner emits.
    pub name: &'static str,
    options: SearchOptions<ScoreType>,
}

impl<GameType, ScoreType, ScorableType> MinimaxRunner<GameType, ScoreType, ScorableType>
where
    GameType: AgentCountQueryableGame
        + OutcomeDeterminableGame
        + ActionQueryableGame
        + SimulableGame
        + ProtagonistGettableGame,
    ScoreType: Clone
        + Debug
        + PartialOrd
        + Ord
        + Copy
        + Add<Output = ScoreType>
        + Sub<Output = ScoreType>,
    ScorableType: Scorable<GameType, ScoreType>,
{
    /// Construct a new `MinimaxRunner`.
    ///
    /// `score_function` can be a plain function or a closure thanks to the
    /// blanket [`Scorable`] impl.
    pub fn new(
        game: GameType,
        score_function: ScorableType,
        name: &'static str,
        options: SearchOptions<ScoreType>,
    ) -> Self {
        Self {
            game,
            score_function,
            name,
            options,
        }
    }

    /// Pick the protagonist's next action by searching `horizon` full rounds
    /// ahead.
    ///
    /// Returns `None` when the root itself is a cutoff: the game is already
    /// decided, the protagonist has no legal action, or `horizon` is zero.
    /// What to do then is the caller's decision; the engine does not invent
    /// a move.
    pub fn choose_action(&self, horizon: usize) -> Option<Action> {
        info_span!(
            "paranoid_minimax",
            runner_name = self.name,
            horizon,
            chosen_score = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
        )
        .in_scope(|| {
            let result = self.single_minimax(horizon);
            let chosen = result.chosen_action();

            let current_span = tracing::Span::current();
            current_span.record("chosen_score", format!("{:?}", result.score()).as_str());
            current_span.record("chosen_action", format!("{:?}", chosen).as_str());
            info!(?chosen, "finished minimax");

            chosen
        })
    }

    /// Runs the minimax algorithm to `horizon` full rounds and returns the
    /// whole explored tree.
    ///
    /// The return value is a recursive struct that tells you the propagated
    /// score of every node and the action chosen at every level. This is
    /// also the debugging entry point: pair it with
    /// [`MinimaxReturn::to_text_tree`] to see why a line was preferred.
    pub fn single_minimax(&self, horizon: usize) -> MinimaxReturn<ScoreType> {
        self.minimax(&self.game, AgentIndex::PROTAGONIST, 0, horizon)
    }

    fn minimax(
        &self,
        node: &GameType,
        agent: AgentIndex,
        depth: usize,
        horizon: usize,
    ) -> MinimaxReturn<ScoreType> {
        if node.is_won() || node.is_lost() || depth == horizon {
            return MinimaxReturn::Leaf {
                score: self.score_function.score(node),
            };
        }

        let agent_count = node.agent_count();
        assert!(
            agent.as_usize() < agent_count,
            "agent {:?} out of range for {} agents",
            agent,
            agent_count
        );

        let next_agent = agent.next(agent_count);
        // One full round has passed once control wraps back to the protagonist.
        let next_depth = if next_agent.is_protagonist() {
            depth + 1
        } else {
            depth
        };

        let legal_actions = node.legal_actions(agent);
        if legal_actions.is_empty() {
            // A stuck mover is a cutoff, not an error.
            return MinimaxReturn::Leaf {
                score: self.score_function.score(node),
            };
        }

        let mut options: Vec<(Action, MinimaxReturn<ScoreType>)> =
            Vec::with_capacity(legal_actions.len());

        if agent.is_protagonist() {
            let heading = node.protagonist_heading();
            let mut best: Option<(Action, ScoreType)> = None;

            for action in legal_actions.iter().copied() {
                let successor = node.generate_successor(agent, action);
                let result = self.minimax(&successor, next_agent, next_depth, horizon);

                // The shaping below adjusts the score used for comparison and
                // propagation; the subtree kept in `options` stays raw.
                let mut adjusted = *result.score();
                if action == Action::Stay && legal_actions.len() > 1 {
                    adjusted = adjusted - self.options.idle_penalty;
                }
                if action == heading && action != Action::Stay {
                    adjusted = adjusted + self.options.straight_bonus;
                }
                if action == heading.reverse() && heading != Action::Stay {
                    adjusted = adjusted - self.options.reverse_penalty;
                }

                match best {
                    None => best = Some((action, adjusted)),
                    Some((best_action, best_score)) => {
                        if adjusted > best_score {
                            best = Some((action, adjusted));
                        } else if adjusted == best_score {
                            if best_action == Action::Stay && action != Action::Stay {
                                best = Some((action, best_score));
                            } else if action == heading && best_action != heading {
                                best = Some((action, best_score));
                            }
                        }
                    }
                }

                options.push((action, result));
            }

            let (chosen, score) =
                best.expect("a non-empty action set always yields a best option");

            MinimaxReturn::Node {
                is_maximizing: true,
                moving_agent: agent,
                options,
                chosen,
                score,
            }
        } else {
            let mut best: Option<(Action, ScoreType)> = None;

            for action in legal_actions.iter().copied() {
                let successor = node.generate_successor(agent, action);
                let result = self.minimax(&successor, next_agent, next_depth, horizon);
                let value = *result.score();

                if best.map_or(true, |(_, best_score)| value < best_score) {
                    best = Some((action, value));
                }

                options.push((action, result));
            }

            let (chosen, score) =
                best.expect("a non-empty action set always yields a best option");

            MinimaxReturn::Node {
                is_maximizing: false,
                moving_agent: agent,
                options,
                chosen,
                score,
            }
        }
    }
}
