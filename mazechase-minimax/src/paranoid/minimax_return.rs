use std::fmt::Debug;

use mazechase_game_types::types::{Action, AgentIndex};
use text_trees::StringTreeNode;

/// This is returned from a run of the minimax algorithm.
/// It contains all the information we generated about the game tree.
#[derive(Debug, Clone)]
pub enum MinimaxReturn<ScoreType: Clone + Debug + PartialOrd + Ord + Copy> {
    /// An interior node: the moving agent had legal actions and we explored
    /// every one of them.
    Node {
        /// Whether the moving agent was the protagonist.
        is_maximizing: bool,
        /// Which agent moved at this node.
        moving_agent: AgentIndex,
        /// Every explored action with its subtree, in exploration order.
        /// Subtree scores are raw; the shaping adjustments live only in this
        /// node's `score`.
        options: Vec<(Action, Self)>,
        /// The action the moving agent settles on.
        chosen: Action,
        /// The propagated score: the best shaped score at maximizing nodes,
        /// the minimum raw score at minimizing nodes.
        score: ScoreType,
    },
    /// A cutoff: terminal state, exhausted horizon, or a mover with no legal
    /// actions.
    Leaf {
        #[allow(missing_docs)]
        score: ScoreType,
    },
}

impl<ScoreType> MinimaxReturn<ScoreType>
where
    ScoreType: Clone + Debug + PartialOrd + Ord + Copy,
{
    /// The score this node propagates to its parent.
    pub fn score(&self) -> &ScoreType {
        match self {
            MinimaxReturn::Node { score, .. } => score,
            MinimaxReturn::Leaf { score } => score,
        }
    }

    /// The action chosen where the search started, or `None` when the root
    /// itself was a cutoff (finished game, stuck root, or a zero horizon).
    pub fn chosen_action(&self) -> Option<Action> {
        match self {
            MinimaxReturn::Node { chosen, .. } => Some(*chosen),
            MinimaxReturn::Leaf { .. } => None,
        }
    }

    /// Every (agent, action) pair along the chosen line of play.
    ///
    /// This is useful for debugging as it shows each of the moves we and the
    /// adversaries made during the simulation.
    pub fn chosen_route(&self) -> Vec<(AgentIndex, Action)> {
        match self {
            MinimaxReturn::Leaf { .. } => vec![],
            MinimaxReturn::Node {
                moving_agent,
                options,
                chosen,
                ..
            } => {
                let mut route = vec![(*moving_agent, *chosen)];
                if let Some((_, subtree)) = options.iter().find(|(action, _)| action == chosen) {
                    route.extend(subtree.chosen_route());
                }
                route
            }
        }
    }

    /// This returns a visual representation of the explored game tree.
    /// It shows the moving agent, the action and the propagated score at
    /// each level.
    pub fn to_text_tree(&self) -> Option<String> {
        let tree_node = self.to_text_tree_node("".to_owned())?;
        Some(format!("{}", tree_node))
    }

    fn to_text_tree_node(&self, label: String) -> Option<StringTreeNode> {
        match self {
            MinimaxReturn::Leaf { .. } => None,
            MinimaxReturn::Node {
                moving_agent,
                options,
                score,
                ..
            } => {
                let mut node = StringTreeNode::new(format!("{} {:?}", label, score));
                for (action, result) in options {
                    if let Some(next_node) =
                        result.to_text_tree_node(format!("{} {:?}", action, moving_agent))
                    {
                        node.push_node(next_node);
                    }
                }

                Some(node)
            }
        }
    }
}
