/// This trait is used to control something that can return a score from a
/// game board.
///
/// The blanket impl lets plain functions and closures act as scoring
/// functions; implement the trait directly to layer in extra structure.
pub trait Scorable<GameType, ScoreType> {
    /// Convert the given `GameType` into a `ScoreType`.
    fn score(&self, game: &GameType) -> ScoreType;
}

impl<GameType, ScoreType, FnLike: Fn(&GameType) -> ScoreType> Scorable<GameType, ScoreType>
    for FnLike
{
    fn score(&self, game: &GameType) -> ScoreType {
        (self)(game)
    }
}

/// Shaping weights applied to the protagonist's action comparisons.
///
/// These bias the search away from idling and needless backtracking and
/// toward committed movement. They adjust the score a maximizing node
/// propagates upward — so the bias compounds across rounds — while the raw
/// subtree scores stay untouched. Adversary nodes are never shaped.
///
/// The defaults are the hand-tuned weights of the standard runner:
///
/// ```
/// use decorum::N64;
/// use mazechase_minimax::paranoid::SearchOptions;
///
/// let defaults: SearchOptions<N64> = Default::default();
///
/// assert_eq!(defaults.idle_penalty, N64::from(100.0));
/// assert_eq!(defaults.straight_bonus, N64::from(20.0));
/// assert_eq!(defaults.reverse_penalty, N64::from(50.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions<ScoreType> {
    /// Subtracted when the protagonist stays put despite having another
    /// option.
    pub idle_penalty: ScoreType,
    /// Added when an action continues the current heading.
    pub straight_bonus: ScoreType,
    /// Subtracted when an action reverses the current heading.
    pub reverse_penalty: ScoreType,
}

impl<ScoreType> Default for SearchOptions<ScoreType>
where
    ScoreType: From<f64>,
{
    fn default() -> Self {
        Self {
            idle_penalty: 100.0.into(),
            straight_bonus: 20.0.into(),
            reverse_penalty: 50.0.into(),
        }
    }
}
