use super::value::Value;
use crate::HAND_SIZE;
use crate::cards::{Card, Hand, Rank, Suit};

/// The concrete, ordered cards behind a [`Value`].
///
/// Each output slot reads a rank from one of the value's fields (or, for
/// straights, steps one rank below the previous slot) and takes the first
/// unused card of that rank from the pool. Pool order therefore decides
/// which of several equal-ranked cards is shown. Flushes draw only from
/// the flush suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement(Vec<Card>);

impl Arrangement {
    /// ranks named by the value, in slot order
    fn ranks(value: Value) -> impl Iterator<Item = Rank> {
        value
            .ranking()
            .roles()
            .into_iter()
            .scan(value.rank(0), move |prev, role| {
                *prev = match role {
                    Some(field) => value.rank(field),
                    None => prev.lower(),
                };
                Some(*prev)
            })
    }

    /// the suit holding every rank of a flush
    fn suit(value: Value, pool: &[Card]) -> Option<Suit> {
        let hand = Hand::from(pool);
        let need = Self::ranks(value)
            .map(u16::from)
            .fold(0u16, |a, b| a | b);
        Suit::all()
            .into_iter()
            .find(|&suit| hand.of(suit) & need == need)
    }
}

impl From<(Value, &[Card])> for Arrangement {
    fn from((value, pool): (Value, &[Card])) -> Self {
        let suit = match value.ranking().is_suited() {
            true => Self::suit(value, pool),
            false => None,
        };
        let mut pool = pool
            .iter()
            .copied()
            .filter(|card| suit.is_none_or(|s| card.suit() == s))
            .collect::<Vec<Card>>();
        let limit = pool.len().min(HAND_SIZE);
        let mut cards = Vec::with_capacity(limit);
        for rank in Self::ranks(value) {
            if cards.len() == limit {
                break;
            }
            if let Some(i) = pool.iter().position(|c| c.rank() == rank) {
                cards.push(pool.remove(i));
            }
        }
        Self(cards)
    }
}

impl From<Arrangement> for Vec<Card> {
    fn from(a: Arrangement) -> Self {
        a.0
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
