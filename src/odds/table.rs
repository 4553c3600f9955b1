use crate::HAND_SIZE;
use crate::cards::Card;
use crate::showdown::Usage;

/// Everything known about a deal whose equity we want.
///
/// Hole cards may be partially or entirely unknown; missing hole cards
/// are dealt to players in seat order, then the board is completed.
/// Built with consuming `with_*` setters:
///
/// ```
/// use poker_odds::{Card, Table, Usage};
/// let table = Table::new(vec![Card::parse("AsKs").unwrap(), Card::parse("JdJh").unwrap()])
///     .with_board(Card::parse("Qd Js 8d").unwrap())
///     .with_expected_hole(2)
///     .with_usage(Usage::between(0, 2));
/// assert_eq!(table.players(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub(crate) holes: Vec<Vec<Card>>,
    pub(crate) board: Vec<Card>,
    pub(crate) dead: Vec<Card>,
    pub(crate) expected_hole: Option<usize>,
    pub(crate) expected_board: usize,
    pub(crate) usage: Usage,
}

impl Table {
    pub fn new(holes: Vec<Vec<Card>>) -> Self {
        Self {
            holes,
            expected_board: HAND_SIZE,
            ..Self::default()
        }
    }
    pub fn with_board(self, board: Vec<Card>) -> Self {
        Self { board, ..self }
    }
    /// cards known to be out of play, e.g. folded or burned
    pub fn with_dead(self, dead: Vec<Card>) -> Self {
        Self { dead, ..self }
    }
    pub fn with_expected_hole(self, n: usize) -> Self {
        Self {
            expected_hole: Some(n),
            ..self
        }
    }
    pub fn with_expected_board(self, n: usize) -> Self {
        Self {
            expected_board: n,
            ..self
        }
    }
    pub fn with_usage(self, usage: Usage) -> Self {
        Self { usage, ..self }
    }

    pub fn players(&self) -> usize {
        self.holes.len()
    }
    /// hole cards per player once dealt, defaulting to the largest hand given
    pub fn expected_hole(&self) -> usize {
        self.expected_hole
            .unwrap_or_else(|| self.holes.iter().map(Vec::len).max().unwrap_or(0))
    }
    pub fn expected_board(&self) -> usize {
        self.expected_board
    }
    pub fn usage(&self) -> Usage {
        self.usage
    }
}
