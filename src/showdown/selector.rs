use super::usage::Bounds;
use crate::HAND_SIZE;
use crate::cards::{Card, Hand};
use crate::combos::Combinations;
use crate::eval::Value;

/// one legal choice of hole and community positions
#[derive(Debug, Clone)]
struct Pick {
    hole: Vec<usize>,
    board: Vec<usize>,
}

/// Every legal way to build a hand from `holes` hole cards and `board`
/// community cards under some [`Bounds`], as positions into those slices.
///
/// The picks depend only on the counts, so one selector is built per
/// table shape and reused for every scenario dealt into it. Only the
/// longest picks are kept: a shorter hand is missing kickers and can
/// never outrank a longer one.
#[derive(Debug, Clone)]
pub struct Selector {
    picks: Vec<Pick>,
}

impl Selector {
    pub fn new(holes: usize, board: usize, bounds: Bounds) -> Self {
        let all = |n: usize| (0..n).collect::<Vec<usize>>();
        if bounds.minimum == 0 && bounds.maximum >= holes {
            return Self {
                picks: vec![Pick {
                    hole: all(holes),
                    board: all(board),
                }],
            };
        }
        let mut picks = Vec::new();
        for j in bounds.minimum..=bounds.maximum {
            let need = HAND_SIZE.saturating_sub(j);
            let boards = Self::subsets(board, need.min(board));
            for hole in Self::subsets(holes, j) {
                for board in boards.iter() {
                    picks.push(Pick {
                        hole: hole.clone(),
                        board: board.clone(),
                    });
                }
            }
        }
        let longest = picks
            .iter()
            .map(|p| p.hole.len() + p.board.len())
            .max()
            .unwrap_or(0);
        picks.retain(|p| p.hole.len() + p.board.len() == longest);
        Self { picks }
    }

    /// positions of every k-subset of n, where choosing none is one subset
    fn subsets(n: usize, k: usize) -> Vec<Vec<usize>> {
        match k {
            0 => vec![vec![]],
            k => {
                let positions = (0..n).collect::<Vec<usize>>();
                Combinations::new(&positions, k).collect()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    fn hand(pick: &Pick, hole: &[Card], board: &[Card]) -> Hand {
        pick.hole
            .iter()
            .map(|&i| hole[i])
            .chain(pick.board.iter().map(|&i| board[i]))
            .collect()
    }

    /// Best value over every pick along with the index of the first pick
    /// reaching it. Callers guarantee the slices match the counts the
    /// selector was built for.
    pub fn best(&self, hole: &[Card], board: &[Card]) -> (Value, usize) {
        let mut best = (Value::default(), 0);
        for (i, pick) in self.picks.iter().enumerate() {
            let value = Value::from(Self::hand(pick, hole, board));
            if i == 0 || value > best.0 {
                best = (value, i);
            }
        }
        best
    }
    pub fn value(&self, hole: &[Card], board: &[Card]) -> Value {
        self.best(hole, board).0
    }

    /// chosen hole cards then chosen community cards, in input order
    pub fn pool(&self, pick: usize, hole: &[Card], board: &[Card]) -> Vec<Card> {
        let pick = &self.picks[pick];
        pick.hole
            .iter()
            .map(|&i| hole[i])
            .chain(pick.board.iter().map(|&i| board[i]))
            .collect()
    }
}
