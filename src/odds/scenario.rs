use super::table::Table;
use crate::cards::{Card, Deck, Hand};
use crate::error::Error;
use crate::eval::Value;
use crate::showdown::Selector;

/// A validated table plus the working buffers one scenario is dealt into.
///
/// Each player's hand and the board keep their known cards at the front;
/// dealing truncates back to those and appends the unknown cards, so the
/// same allocations serve every scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    holes: Vec<Vec<Card>>,
    board: Vec<Card>,
    known: Vec<usize>,
    known_board: usize,
    expected_hole: usize,
    expected_board: usize,
    selector: Selector,
    remaining: Vec<Card>,
    values: Vec<Value>,
}

impl TryFrom<&Table> for Scenario {
    type Error = Error;
    fn try_from(table: &Table) -> Result<Self, Self::Error> {
        let expected_hole = table.expected_hole();
        let expected_board = table.expected_board();
        if table.holes.is_empty() {
            return Err(Error::NoPlayers);
        }
        if expected_hole == 0 && expected_board == 0 {
            return Err(Error::NoCards);
        }
        if let Some(hole) = table.holes.iter().find(|h| h.len() > expected_hole) {
            return Err(Error::TooManyHoleCards {
                count: hole.len(),
                limit: expected_hole,
            });
        }
        if table.board.len() > expected_board {
            return Err(Error::TooManyCommunityCards {
                count: table.board.len(),
                limit: expected_board,
            });
        }
        let bounds = table.usage.bounds(expected_hole)?;
        let known = Hand::distinct(
            table
                .holes
                .iter()
                .flatten()
                .chain(table.board.iter())
                .chain(table.dead.iter()),
        )?;
        let remaining = Vec::<Card>::from(Hand::from(Deck::without(known)));
        let this = Self {
            holes: table
                .holes
                .iter()
                .map(|h| {
                    let mut hole = Vec::with_capacity(expected_hole);
                    hole.extend_from_slice(h);
                    hole
                })
                .collect(),
            board: {
                let mut board = Vec::with_capacity(expected_board);
                board.extend_from_slice(&table.board);
                board
            },
            known: table.holes.iter().map(Vec::len).collect(),
            known_board: table.board.len(),
            expected_hole,
            expected_board,
            selector: Selector::new(expected_hole, expected_board, bounds),
            remaining,
            values: Vec::with_capacity(table.holes.len()),
        };
        if this.unknown() > this.remaining.len() {
            return Err(Error::DeckExhausted {
                needed: this.unknown(),
                available: this.remaining.len(),
            });
        }
        Ok(this)
    }
}

impl Scenario {
    pub fn players(&self) -> usize {
        self.holes.len()
    }
    /// undealt cards, lowest first
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }
    /// missing hole cards per player, then missing board cards
    pub fn missing(&self) -> impl Iterator<Item = usize> + '_ {
        self.known
            .iter()
            .map(|&k| self.expected_hole - k)
            .chain(std::iter::once(self.expected_board - self.known_board))
    }
    /// number of cards a scenario has to deal
    pub fn unknown(&self) -> usize {
        self.missing().sum()
    }

    /// Fills the empty slots with `cards`: seat by seat, then the board.
    pub fn deal(&mut self, cards: &[Card]) {
        let mut cards = cards.iter().copied();
        for (hole, &known) in self.holes.iter_mut().zip(self.known.iter()) {
            hole.truncate(known);
            hole.extend(cards.by_ref().take(self.expected_hole - known));
        }
        self.board.truncate(self.known_board);
        self.board.extend(cards);
    }

    /// Deals one set of cards into a single slot group, where groups are
    /// the players in seat order followed by the board.
    pub fn deal_group(&mut self, group: usize, cards: Hand) {
        match self.holes.get_mut(group) {
            Some(hole) => {
                hole.truncate(self.known[group]);
                hole.extend(cards);
            }
            None => {
                self.board.truncate(self.known_board);
                self.board.extend(cards);
            }
        }
    }

    /// best value of every player in the currently dealt scenario
    pub fn values(&mut self) -> &[Value] {
        self.values.clear();
        for hole in self.holes.iter() {
            self.values.push(self.selector.value(hole, &self.board));
        }
        &self.values
    }
}
