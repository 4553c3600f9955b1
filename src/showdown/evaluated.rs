use crate::cards::Card;
use crate::eval::{Strength, Value};
use std::cmp::Ordering;

/// The best hand found by [`evaluate`](super::evaluate).
///
/// Equality and ordering look only at `value`: two hands made of
/// different cards but the same ranks are tied.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvaluatedHand {
    pub strength: Strength,
    pub cards: Vec<Card>,
    pub value: Value,
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl Eq for EvaluatedHand {}
impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl std::fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{:<16}{}", self.strength.to_string(), cards.join(" "))
    }
}
