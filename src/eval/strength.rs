use super::ranking::Ranking;
use super::value::Value;
use crate::cards::Rank;

/// The category reported to callers.
///
/// Identical to [`Ranking`] except that an ace-high straight flush is
/// reported as a royal flush. The distinction is presentational only:
/// both encode to the same [`Value`] category.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strength {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl From<Value> for Strength {
    fn from(value: Value) -> Self {
        match value.ranking() {
            Ranking::HighCard => Strength::HighCard,
            Ranking::OnePair => Strength::OnePair,
            Ranking::TwoPair => Strength::TwoPair,
            Ranking::ThreeOAK => Strength::ThreeOfAKind,
            Ranking::Straight => Strength::Straight,
            Ranking::Flush => Strength::Flush,
            Ranking::FullHouse => Strength::FullHouse,
            Ranking::FourOAK => Strength::FourOfAKind,
            Ranking::StraightFlush if value.rank(0) == Rank::Ace => Strength::RoyalFlush,
            Ranking::StraightFlush => Strength::StraightFlush,
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Strength::HighCard => write!(f, "High Card"),
            Strength::OnePair => write!(f, "One Pair"),
            Strength::TwoPair => write!(f, "Two Pair"),
            Strength::ThreeOfAKind => write!(f, "Three of a Kind"),
            Strength::Straight => write!(f, "Straight"),
            Strength::Flush => write!(f, "Flush"),
            Strength::FullHouse => write!(f, "Full House"),
            Strength::FourOfAKind => write!(f, "Four of a Kind"),
            Strength::StraightFlush => write!(f, "Straight Flush"),
            Strength::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn royal_is_ace_high_straight_flush() {
        assert_eq!(Strength::from(Value::from(135004160u32)), Strength::RoyalFlush);
        assert_eq!(Strength::from(Value::from(134938624u32)), Strength::StraightFlush);
        assert_eq!(Strength::from(Value::from(134414336u32)), Strength::StraightFlush);
    }

    #[test]
    fn ordered_weakest_first() {
        assert!(Strength::HighCard < Strength::OnePair);
        assert!(Strength::StraightFlush < Strength::RoyalFlush);
    }
}
