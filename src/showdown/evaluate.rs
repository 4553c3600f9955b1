use super::evaluated::EvaluatedHand;
use super::selector::Selector;
use super::usage::Usage;
use crate::cards::{Card, Hand};
use crate::error::Error;
use crate::eval::{Arrangement, Strength};
use std::cmp::Ordering;

/// Finds the best hand that `hole` and `board` can make while honoring
/// `usage`.
///
/// Every legal split of hole and community cards is tried; the first
/// combination reaching the highest value is returned, with its cards in
/// presentation order (category-defining ranks first, kickers last).
pub fn evaluate(hole: &[Card], board: &[Card], usage: Usage) -> Result<EvaluatedHand, Error> {
    if hole.is_empty() && board.is_empty() {
        return Err(Error::NoCards);
    }
    let bounds = usage.bounds(hole.len())?;
    Hand::distinct(hole.iter().chain(board.iter()))?;
    let selector = Selector::new(hole.len(), board.len(), bounds);
    let (value, pick) = selector.best(hole, board);
    let pool = selector.pool(pick, hole, board);
    Ok(EvaluatedHand {
        strength: Strength::from(value),
        cards: Vec::<Card>::from(Arrangement::from((value, pool.as_slice()))),
        value,
    })
}

/// Orders `a` before `b` when `a` is the stronger hand.
///
/// `Less` plays the role of -1 ("a wins"), so sorting with this comparator
/// lists hands strongest first.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    b.value.cmp(&a.value)
}
