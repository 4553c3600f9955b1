use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` by `rank + 13 * suit`,
/// which is also the card's bit position inside a [`Hand`] mask. Every suit
/// therefore owns a contiguous 13-bit block, so a suit's rank submask is a
/// shift and a mask away.
///
/// # Representations
///
/// - `u8`: bit position `0..52`
/// - `u64`: single-bit set membership in a [`Hand`]
/// - `&str`: two characters, rank then suit, e.g. `"Ah"` or `"Tc"`
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 13)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 13)
    }
    /// Parses concatenated or whitespace separated card notation.
    ///
    /// `"AsKd"`, `"As Kd"` and `"As, Kd"` all yield the same two cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.replace(|c: char| c.is_whitespace() || c == ',', "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) + 13 * u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its bit position in a hand mask
/// Ts
/// 8 + 13 * 3 = 47
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.len() {
            2 if s.is_char_boundary(1) => {
                let rank = Rank::try_from(&s[0..1])?;
                let suit = Suit::try_from(&s[1..2])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(Error::Parse(format!("{:?} is not 2 characters", s))),
        }
    }
}
impl TryFrom<String> for Card {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl std::str::FromStr for Card {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
impl From<Card> for String {
    fn from(c: Card) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;

    #[test]
    fn bijective_rank_suit() {
        let card = Deck::new().draw();
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        let card = Deck::new().draw();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bit_position() {
        assert_eq!(u8::from(Card::try_from("2c").unwrap()), 0);
        assert_eq!(u8::from(Card::try_from("Ac").unwrap()), 12);
        assert_eq!(u8::from(Card::try_from("2d").unwrap()), 13);
        assert_eq!(u8::from(Card::try_from("As").unwrap()), 51);
    }

    #[test]
    fn text_round_trip() {
        for n in 0..52u8 {
            let card = Card::from(n);
            assert_eq!(Card::try_from(card.to_string().as_str()).unwrap(), card);
        }
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("As Kd,Qh7c").unwrap();
        let names = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["As", "Kd", "Qh", "7c"]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Card::try_from("1s").is_err());
        assert!(Card::try_from("Ax").is_err());
        assert!(Card::try_from("Asd").is_err());
        assert!(Card::parse("AsK").is_err());
    }
}
