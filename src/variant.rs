use crate::cards::Card;
use crate::error::Error;
use crate::odds::{Odds, Simulation, Table};
use crate::showdown::{EvaluatedHand, Usage, evaluate};

/// Fixed-limit presets for the common poker games.
///
/// Each variant caps the hole and community cards a hand may carry and
/// fixes how many hole cards the best hand may draw on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Holdem,
    Omaha,
    Pineapple,
    Stud,
}

impl Variant {
    pub const fn holes(&self) -> usize {
        match self {
            Self::Holdem => 2,
            Self::Omaha => 4,
            Self::Pineapple => 3,
            Self::Stud => 7,
        }
    }
    pub const fn board(&self) -> usize {
        match self {
            Self::Stud => 0,
            _ => 5,
        }
    }
    pub const fn usage(&self) -> Usage {
        match self {
            Self::Holdem => Usage::between(0, 2),
            Self::Omaha => Usage::exactly(2),
            Self::Pineapple => Usage::between(0, 2),
            Self::Stud => Usage::between(0, 7),
        }
    }

    fn check_hole(&self, hole: &[Card]) -> Result<(), Error> {
        match hole.len() {
            n if n > self.holes() => Err(Error::TooManyHoleCards {
                count: n,
                limit: self.holes(),
            }),
            _ => Ok(()),
        }
    }
    fn check_board(&self, board: &[Card]) -> Result<(), Error> {
        match board.len() {
            n if n > self.board() => Err(Error::TooManyCommunityCards {
                count: n,
                limit: self.board(),
            }),
            _ => Ok(()),
        }
    }

    /// Best hand under this game's rules.
    pub fn evaluate(&self, hole: &[Card], board: &[Card]) -> Result<EvaluatedHand, Error> {
        self.check_hole(hole)?;
        self.check_board(board)?;
        evaluate(hole, board, self.usage())
    }

    /// Odds-shaped table for this game with every limit filled in.
    pub fn table(&self, holes: Vec<Vec<Card>>, board: Vec<Card>) -> Result<Table, Error> {
        holes.iter().try_for_each(|hole| self.check_hole(hole))?;
        self.check_board(&board)?;
        Ok(Table::new(holes)
            .with_board(board)
            .with_expected_hole(self.holes())
            .with_expected_board(self.board())
            .with_usage(self.usage()))
    }

    pub fn odds(&self, holes: Vec<Vec<Card>>, board: Vec<Card>) -> Result<Vec<Odds>, Error> {
        self.table(holes, board)?.exhaust()
    }

    pub fn simulation(&self, holes: Vec<Vec<Card>>, board: Vec<Card>) -> Result<Simulation, Error> {
        Simulation::try_from(&self.table(holes, board)?)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Holdem => write!(f, "Texas Hold'em"),
            Self::Omaha => write!(f, "Omaha"),
            Self::Pineapple => write!(f, "Pineapple"),
            Self::Stud => write!(f, "Seven Card Stud"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::eval::Strength;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn omaha_must_use_two() {
        // a flush needs two of the board spades matched in hand
        let hand = Variant::Omaha
            .evaluate(&cards("As Kd Ts Tc"), &cards("Ac 9s Qs 2s 5s"))
            .unwrap();
        assert_eq!(hand.strength, Strength::Flush);
        let hand = Variant::Omaha
            .evaluate(&cards("Ah Kd Ts Tc"), &cards("Ac 9s Qs 2s 5s"))
            .unwrap();
        assert_eq!(hand.strength, Strength::OnePair);
    }

    #[test]
    fn pineapple_plays_two_at_most() {
        // the third ace never plays
        let hand = Variant::Pineapple
            .evaluate(&cards("As Ad Ac"), &cards("Kh Kd 9s 8c 2d"))
            .unwrap();
        assert_eq!(hand.strength, Strength::TwoPair);
        assert_eq!(hand.cards.iter().filter(|c| c.rank() == Rank::Ace).count(), 2);
    }

    #[test]
    fn stud_has_no_board() {
        let hand = Variant::Stud
            .evaluate(&cards("As Kd Ts Tc Qd 2d 2s"), &[])
            .unwrap();
        assert_eq!(hand.strength, Strength::TwoPair);
        assert!(matches!(
            Variant::Stud.evaluate(&cards("As Kd"), &cards("2c")),
            Err(Error::TooManyCommunityCards { count: 1, limit: 0 })
        ));
    }

    #[test]
    fn ceilings() {
        assert!(matches!(
            Variant::Holdem.evaluate(&cards("As Kd Qh"), &[]),
            Err(Error::TooManyHoleCards { count: 3, limit: 2 })
        ));
        assert!(matches!(
            Variant::Omaha.evaluate(&cards("As Kd Ts Tc 2h"), &[]),
            Err(Error::TooManyHoleCards { count: 5, limit: 4 })
        ));
        assert!(matches!(
            Variant::Pineapple.evaluate(&cards("As Kd Ts"), &cards("Ac 9h Qd 2d 2s Td")),
            Err(Error::TooManyCommunityCards { count: 6, limit: 5 })
        ));
        assert!(matches!(
            Variant::Stud.table(vec![cards("As Kd Ts Td 2d 5c 5h 2s")], vec![]),
            Err(Error::TooManyHoleCards { count: 8, limit: 7 })
        ));
        assert!(matches!(
            Variant::Holdem.table(vec![], cards("2c 3c 4c 5c 6c 7c")),
            Err(Error::TooManyCommunityCards { count: 6, limit: 5 })
        ));
    }

    #[test]
    fn table_checks_every_seat() {
        // the oversized hand sits behind a legal one
        assert!(matches!(
            Variant::Omaha.table(vec![cards("As Kd"), cards("2c 3c 4c 5c 6c")], cards("7d 8d 9d")),
            Err(Error::TooManyHoleCards { count: 5, limit: 4 })
        ));
        let table = Variant::Omaha
            .table(vec![cards("As Kd"), vec![]], cards("7d 8d 9d"))
            .unwrap();
        assert_eq!(table.expected_hole(), 4);
        assert_eq!(table.expected_board(), 5);
    }

    #[test]
    fn fully_unknown_stud_is_too_big_to_count() {
        assert!(matches!(
            Variant::Stud.odds(vec![vec![]; 6], vec![]),
            Err(Error::TooManyScenarios { unknown: 42, available: 52 })
        ));
    }

    #[test]
    fn stud_heads_up() {
        let odds = Variant::Stud
            .odds(vec![cards("As Kd Ks 8c Ac 2d"), cards("9s 8s Ts 6s 4h 2c")], vec![])
            .unwrap();
        assert_eq!((odds[0].wins, odds[0].ties, odds[0].total), (1206, 0, 1560));
        assert_eq!((odds[1].wins, odds[1].ties, odds[1].total), (354, 0, 1560));
        assert!((odds[0].equity - 1206. / 1560.).abs() < 1e-12);
    }

    #[test]
    fn holdem_simulation_pulls() {
        let last = Variant::Holdem
            .simulation(vec![cards("As Ks"), cards("Jd Jh")], cards("Qd Js 8d"))
            .unwrap()
            .with_seed(11)
            .last()
            .unwrap();
        assert_eq!(last[0].total, 1980);
    }
}
