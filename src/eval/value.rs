use super::ranking::Ranking;
use crate::cards::Rank;

/// A packed, totally ordered hand value.
///
/// ```text
/// cccc 1111 2222 3333 4444 5555
///  |    \______________________ five 4-bit rank fields, most significant first
///  \___________________________ Ranking category
/// ```
///
/// Which ranks land in which field depends on the category (pair rank,
/// then kickers, and so on), but in every case plain integer comparison
/// orders two values the way poker orders the hands. Equal values tie.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Value(u32);

impl Value {
    pub const FIELD: u32 = 4;

    pub fn ranking(&self) -> Ranking {
        Ranking::from(self.0)
    }
    /// rank stored in field `i`, where field 0 is the most significant
    pub fn rank(&self, i: usize) -> Rank {
        Rank::from(((self.0 >> Self::shift(i)) & 0xF) as u8)
    }
    pub const fn shift(i: usize) -> u32 {
        Self::FIELD * (4 - i as u32)
    }
}

/// u32 isomorphism
impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self(n)
    }
}
impl From<Value> for u32 {
    fn from(v: Value) -> Self {
        v.0
    }
}

/// (Ranking, fields) composition
impl From<(Ranking, u32)> for Value {
    fn from((ranking, fields): (Ranking, u32)) -> Self {
        Self(u32::from(ranking) + fields)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}", self.ranking().to_string())?;
        for i in 0..5 {
            write!(f, "{}", self.rank(i))?;
        }
        Ok(())
    }
}
