/// The encoded hand category, stored in the most significant field of a [`Value`].
///
/// Ordered weakest to strongest so that the category field alone sorts
/// hands across categories.
///
/// [`Value`]: super::value::Value
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Ranking {
    pub const SHIFT: u32 = 24;

    /// which rank field each of the five output cards reads
    ///
    /// `None` marks a card that continues a straight one rank below
    /// the previous card.
    pub fn roles(&self) -> [Option<usize>; 5] {
        match self {
            Ranking::HighCard | Ranking::Flush => [Some(0), Some(1), Some(2), Some(3), Some(4)],
            Ranking::OnePair => [Some(0), Some(0), Some(1), Some(2), Some(3)],
            Ranking::TwoPair => [Some(0), Some(0), Some(1), Some(1), Some(2)],
            Ranking::ThreeOAK => [Some(0), Some(0), Some(0), Some(1), Some(2)],
            Ranking::FullHouse => [Some(0), Some(0), Some(0), Some(1), Some(1)],
            Ranking::FourOAK => [Some(0), Some(0), Some(0), Some(0), Some(1)],
            Ranking::Straight | Ranking::StraightFlush => [Some(0), None, None, None, None],
        }
    }

    /// whether every card of the arranged hand shares one suit
    pub fn is_suited(&self) -> bool {
        matches!(self, Ranking::Flush | Ranking::StraightFlush)
    }
}

/// u32 isomorphism
/// the category occupies the bits above the five rank fields
impl From<Ranking> for u32 {
    fn from(r: Ranking) -> u32 {
        (r as u32) << Ranking::SHIFT
    }
}
impl From<u32> for Ranking {
    fn from(n: u32) -> Self {
        match n >> Ranking::SHIFT {
            0 => Ranking::HighCard,
            1 => Ranking::OnePair,
            2 => Ranking::TwoPair,
            3 => Ranking::ThreeOAK,
            4 => Ranking::Straight,
            5 => Ranking::Flush,
            6 => Ranking::FullHouse,
            7 => Ranking::FourOAK,
            8 => Ranking::StraightFlush,
            c => panic!("invalid ranking {}", c),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
