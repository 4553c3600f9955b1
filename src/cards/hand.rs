use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;
use crate::Arbitrary;

/// Hand represents an unordered set of Cards stored as a single u64.
///
/// Only the low 52 bits are used, one per card at `rank + 13 * suit`. Each
/// suit owns a contiguous 13-bit block, so the rank pattern of a suit is a
/// shift and a mask, and the union of the four blocks is the set of ranks
/// present. Insertion is idempotent: adding a card twice leaves one bit set.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn full() -> Self {
        Self(Self::mask())
    }

    /// collects cards, rejecting any card seen twice
    pub fn distinct<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<Self, Error> {
        cards
            .into_iter()
            .try_fold(Self::empty(), |mut hand, card| match hand.contains(card) {
                true => Err(Error::DuplicateCard(*card)),
                false => {
                    hand.insert(*card);
                    Ok(hand)
                }
            })
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 | rhs.0)
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn intersects(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// 13-bit rank pattern of a single suit
    pub fn of(&self, suit: Suit) -> u16 {
        ((self.0 >> suit.offset()) & Rank::mask() as u64) as u16
    }
    /// 13-bit rank pattern across all suits
    pub fn ranks(&self) -> u16 {
        Suit::all()
            .into_iter()
            .map(|s| self.of(s))
            .fold(0u16, |a, b| a | b)
    }
    /// all four suit patterns, clubs first
    pub fn suits(&self) -> [u16; 4] {
        Suit::all().map(|s| self.of(s))
    }

    /// lowest card by index, deuce of clubs first
    pub fn lowest(&self) -> Option<Card> {
        match self.0 {
            0 => None,
            n => Some(Card::from(n.trailing_zeros() as u8)),
        }
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        Self::from(rand::random::<u64>())
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        let card = self.lowest()?;
        self.remove(card);
        Some(card)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000100000000000000000000000000000000001000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(cards.as_slice())
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn lowest_leaves_hand_intact() {
        let hand = Hand::try_from("Ts 3d Kh").unwrap();
        assert_eq!(hand.lowest(), Some(Card::try_from("3d").unwrap()));
        assert_eq!(hand.size(), 3);
        assert_eq!(Hand::empty().lowest(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(hand.of(Suit::Club), 0b_1000100010001); // 2c 6c Tc Ac
        assert_eq!(hand.of(Suit::Diamond), 0b_0001000100010); // 3d 7d Jd
        assert_eq!(hand.of(Suit::Heart), 0b_0010001000100); // 4h 8h Qh
        assert_eq!(hand.of(Suit::Spade), 0b_0100010001000); // 5s 9s Ks
        assert_eq!(hand.ranks(), Rank::mask());
    }

    #[test]
    fn duplicates_are_idempotent() {
        let hand = Hand::try_from("As As Kd").unwrap();
        assert_eq!(hand.size(), 2);
    }

    #[test]
    fn distinct_rejects_repeats() {
        let cards = Card::parse("As Kd As").unwrap();
        assert!(matches!(
            Hand::distinct(cards.iter()),
            Err(Error::DuplicateCard(c)) if c.to_string() == "As"
        ));
        assert_eq!(Hand::distinct(cards[..2].iter()).unwrap().size(), 2);
    }

    #[test]
    fn complement_is_undealt() {
        let hand = Hand::try_from("As Kd").unwrap();
        let rest = hand.complement();
        assert_eq!(rest.size(), 50);
        assert!(!rest.intersects(&hand));
        assert_eq!(Hand::add(rest, hand), Hand::full());
    }
}
