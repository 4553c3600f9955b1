use crate::cards::Card;

/// Everything that can go wrong in a single evaluation, odds or simulation call.
///
/// All variants except [`Error::Task`] describe malformed or contradictory input
/// and are raised before any work is done.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("must supply at least one card")]
    NoCards,

    #[error("must supply at least one player")]
    NoPlayers,

    #[error("minimum hole cards ({minimum}) exceeds the {holes} hole cards supplied")]
    MinimumExceedsHoleCards { minimum: usize, holes: usize },

    #[error("minimum hole cards ({minimum}) exceeds maximum hole cards ({maximum})")]
    MinimumExceedsMaximum { minimum: usize, maximum: usize },

    #[error("maximum hole cards must be greater than 0")]
    NonPositiveMaximum,

    #[error("hole cards accept a maximum of {limit} elements, got {count}")]
    TooManyHoleCards { count: usize, limit: usize },

    #[error("community cards accept a maximum of {limit} elements, got {count}")]
    TooManyCommunityCards { count: usize, limit: usize },

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("{needed} unknown cards requested but only {available} remain in the deck")]
    DeckExhausted { needed: usize, available: usize },

    #[error("{unknown} unknown cards from {available} have too many deals to count exactly")]
    TooManyScenarios { unknown: usize, available: usize },

    #[error("invalid card notation: {0}")]
    Parse(String),

    #[error("simulation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
