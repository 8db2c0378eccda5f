//! The standard static evaluation function.
//!
//! Scores a state from the protagonist's perspective at search cutoffs. All
//! terms are additive onto the state's running score: progress on pellets,
//! attraction toward the nearest pellet and power pellet, and a
//! danger/opportunity term per adversary. The weights are hand-tuned; the
//! search layer above adds its own movement shaping on top of this.

use decorum::N64;
use mazechase_game_types::types::{
    AdversaryGettableGame, PelletGettableGame, Position, PowerPelletGettableGame,
    ProtagonistGettableGame, ScoreGettableGame,
};

/// Flat penalty per pellet still on the board.
const REMAINING_PELLET_PENALTY: f64 = 50.0;
/// Attraction toward the nearest pellet, scaled by 1 / (distance + 1).
const PELLET_ATTRACTION: f64 = 1000.0;
/// Attraction toward the nearest power pellet, same shape as pellets.
const POWER_PELLET_ATTRACTION: f64 = 200.0;
/// Reward for being adjacent to a frightened adversary.
const FRIGHTENED_CAPTURE_BONUS: f64 = 10_000.0;
/// Weight for closing in on a frightened adversary that is not yet adjacent.
/// TODO: tune a nonzero weight here; at 0.0 a frightened adversary is only
/// worth anything once it is already adjacent.
const FRIGHTENED_CHASE_WEIGHT: f64 = 0.0;
/// Penalty for a hostile adversary on an adjacent cell.
const ADJACENT_DANGER_PENALTY: f64 = 1000.0;
/// Hostile adversaries closer than this many cells use the near weight.
const DANGER_RADIUS: u32 = 5;
/// Distance-scaled penalty weight inside the danger radius.
const NEAR_DANGER_WEIGHT: f64 = 300.0;
/// Distance-scaled penalty weight beyond the danger radius.
const FAR_DANGER_WEIGHT: f64 = 200.0;

/// Score a state for the maximizing protagonist; higher is better.
///
/// Pure and stateless: identical states always produce identical scores.
pub fn standard_score<BoardType>(node: &BoardType) -> N64
where
    BoardType: ProtagonistGettableGame
        + ScoreGettableGame
        + PelletGettableGame
        + PowerPelletGettableGame
        + AdversaryGettableGame,
{
    let pos = node.protagonist_position();
    let mut score = node.get_score();

    score -= node.get_pellet_count() as f64 * REMAINING_PELLET_PENALTY;

    if let Some(dist) = nearest_distance(&pos, &node.get_all_pellets()) {
        score += PELLET_ATTRACTION / (f64::from(dist) + 1.0);
    }

    if let Some(dist) = nearest_distance(&pos, &node.get_all_power_pellets()) {
        score += POWER_PELLET_ATTRACTION / (f64::from(dist) + 1.0);
    }

    for adversary in node.get_adversaries() {
        let dist = pos.manhattan_distance(&adversary.position);

        if adversary.is_frightened() {
            if dist <= 1 {
                // Capturing dominates everything else nearby.
                score += FRIGHTENED_CAPTURE_BONUS;
            } else {
                score += FRIGHTENED_CHASE_WEIGHT / f64::from(dist);
            }
        } else if dist <= 1 {
            // Adjacent means near-certain loss on the adversary's turn.
            score -= ADJACENT_DANGER_PENALTY;
        } else if dist < DANGER_RADIUS {
            score -= NEAR_DANGER_WEIGHT / (f64::from(dist) + 1.0);
        } else {
            score -= FAR_DANGER_WEIGHT / (f64::from(dist) + 1.0);
        }
    }

    N64::from(score)
}

fn nearest_distance(from: &Position, targets: &[Position]) -> Option<u32> {
    targets
        .iter()
        .map(|target| from.manhattan_distance(target))
        .min()
}
