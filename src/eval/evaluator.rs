use super::ranking::Ranking;
use super::tables;
use super::value::Value;
use crate::cards::Hand;

/// A table-driven evaluator for a hand's value.
///
/// The hand is split into its four 13-bit suit patterns. How many cards
/// repeat a rank already seen bounds which categories are reachable, so we
/// only test for flushes and straights when five distinct ranks exist and
/// only hunt for trips and quads when enough duplicates exist to form them.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl From<Hand> for Value {
    fn from(h: Hand) -> Self {
        Evaluator::from(h).find_value()
    }
}

impl Evaluator {
    pub fn find_value(&self) -> Value {
        let [sc, sd, sh, ss] = self.0.suits();
        let ranks = sc | sd | sh | ss;
        let distinct = tables::count(ranks);
        let duplicates = self.0.size() as u32 - distinct;

        let mut made = None;
        if distinct >= 5 {
            made = self.find_flush().or_else(|| self.find_straight(ranks));
            match made {
                Some(v) if v.ranking() == Ranking::StraightFlush => return v,
                Some(v) if duplicates < 3 => return v,
                _ => {}
            }
        }

        // ranks held in an even number of suits, and in three or more
        let twos = ranks ^ (sc ^ sd ^ sh ^ ss);
        let threes = ((sc & sd) | (sh & ss)) & ((sc & sh) | (sd & ss));
        match duplicates {
            0 => Value::from((Ranking::HighCard, tables::five(ranks))),
            1 => self.find_one_pair(ranks, twos),
            2 if twos != 0 => self.find_two_pair(ranks, twos),
            2 => self.find_3_oak(ranks, threes),
            n => None
                .or_else(|| self.find_4_oak(ranks, sc & sd & sh & ss))
                .or_else(|| match tables::count(twos) != n {
                    true => Some(self.find_full_house(twos, threes)),
                    false => None,
                })
                .or(made)
                .unwrap_or_else(|| self.find_two_pair(ranks, twos)),
        }
    }

    /// best flush or straight flush over every suit with five or more cards
    fn find_flush(&self) -> Option<Value> {
        self.0
            .suits()
            .into_iter()
            .filter(|&suit| tables::count(suit) >= 5)
            .map(|suit| match tables::straight(suit) {
                0 => Value::from((Ranking::Flush, tables::five(suit))),
                top => Value::from((Ranking::StraightFlush, top << Value::shift(0))),
            })
            .max()
    }
    fn find_straight(&self, ranks: u16) -> Option<Value> {
        match tables::straight(ranks) {
            0 => None,
            top => Some(Value::from((Ranking::Straight, top << Value::shift(0)))),
        }
    }

    fn find_one_pair(&self, ranks: u16, twos: u16) -> Value {
        let pair = tables::top(twos) << Value::shift(0);
        // top five of the rest, shifted down one field and cut to three kickers
        let kicks = (tables::five(ranks & !twos) >> Value::FIELD) & !0xF;
        Value::from((Ranking::OnePair, pair | kicks))
    }
    fn find_two_pair(&self, ranks: u16, twos: u16) -> Value {
        let hi = tables::top(twos);
        let lo = tables::top(twos & !(1 << hi));
        let kick = tables::top(ranks & !(1 << hi) & !(1 << lo));
        Value::from((
            Ranking::TwoPair,
            hi << Value::shift(0) | lo << Value::shift(1) | kick << Value::shift(2),
        ))
    }
    fn find_3_oak(&self, ranks: u16, threes: u16) -> Value {
        let trip = tables::top(threes);
        let rest = ranks & !(1 << trip);
        let hi = tables::top(rest);
        let lo = tables::top(rest & !(1 << hi));
        Value::from((
            Ranking::ThreeOAK,
            trip << Value::shift(0) | hi << Value::shift(1) | lo << Value::shift(2),
        ))
    }
    fn find_full_house(&self, twos: u16, threes: u16) -> Value {
        let trip = tables::top(threes);
        let pair = tables::top((twos | threes) & !(1 << trip));
        Value::from((
            Ranking::FullHouse,
            trip << Value::shift(0) | pair << Value::shift(1),
        ))
    }
    fn find_4_oak(&self, ranks: u16, fours: u16) -> Option<Value> {
        match fours {
            0 => None,
            _ => {
                let quad = tables::top(fours);
                let kick = tables::top(ranks & !(1 << quad));
                Some(Value::from((
                    Ranking::FourOAK,
                    quad << Value::shift(0) | kick << Value::shift(1),
                )))
            }
        }
    }
}
