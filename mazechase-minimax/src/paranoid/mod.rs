//! There are multiple multiplayer variations to minimax, this module is for
//! the `paranoid` variant: every adversary is assumed to be working to
//! minimize the protagonist's score.
//!
//! Agents move one at a time in fixed index order, protagonist first. The
//! search horizon is measured in full rounds — it only deepens once control
//! wraps back to the protagonist — so a horizon of `D` means every agent gets
//! `D` moves regardless of how many adversaries there are.
//!
//! The search is plain depth-limited minimax: no pruning, no caching, no
//! iterative deepening. Every node is recomputed freshly on every call, and
//! the whole explored tree is returned for inspection.
//!
//! The protagonist's action comparisons are shaped by [`SearchOptions`]: an
//! idle penalty, a straight-line bonus, and a reversal penalty. The shaped
//! score is what a maximizing node propagates upward, so the bias compounds
//! across rounds rather than only steering the immediate choice.

mod score;
pub use score::{Scorable, SearchOptions};

mod minimax_return;
pub use minimax_return::MinimaxReturn;

mod eval;
pub use eval::MinimaxRunner;
