use crate::RANK_COUNT;
use std::sync::LazyLock;

/// one entry per 13-bit rank pattern
const PATTERNS: usize = 1 << RANK_COUNT;

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

/// Precomputed answers for every 13-bit rank pattern.
///
/// Each table is a pure function of its index, built once on first use and
/// only read afterwards, so concurrent lookups need no synchronization.
pub struct Tables {
    count: [u8; PATTERNS],
    top: [u8; PATTERNS],
    five: [u32; PATTERNS],
    straight: [u8; PATTERNS],
}

impl Tables {
    fn build() -> Self {
        let mut this = Self {
            count: [0; PATTERNS],
            top: [0; PATTERNS],
            five: [0; PATTERNS],
            straight: [0; PATTERNS],
        };
        for i in 0..PATTERNS {
            let ranks = i as u16;
            this.count[i] = ranks.count_ones() as u8;
            this.top[i] = Self::highest(ranks as u32);
            this.five[i] = Self::pack(ranks);
            this.straight[i] = Self::run(ranks);
        }
        log::trace!("{:<32}{:<32}", "built rank tables", PATTERNS);
        this
    }

    /// index of the highest set bit, 0 for the empty pattern
    fn highest(bits: u32) -> u8 {
        match bits {
            0 => 0,
            n => (31 - n.leading_zeros()) as u8,
        }
    }

    /// top five set ranks, one per nibble, highest first, zero padded
    fn pack(mut ranks: u16) -> u32 {
        let mut packed = 0u32;
        for shift in [16, 12, 8, 4, 0] {
            if ranks == 0 {
                break;
            }
            let top = Self::highest(ranks as u32);
            packed |= (top as u32) << shift;
            ranks &= !(1 << top);
        }
        packed
    }

    /// top rank of the best five-long run, ace allowed low
    ///
    /// The pattern is shifted up one and the ace is mirrored into bit 0,
    /// so bit i of the widened pattern stands for rank i - 1.
    fn run(ranks: u16) -> u8 {
        let m = ((ranks as u32) << 1 | (ranks as u32) >> 12) & 0x3FFF;
        let run = m & m >> 1 & m >> 2 & m >> 3 & m >> 4;
        match run {
            0 => 0,
            r => Self::highest(r) + 3,
        }
    }
}

/// number of distinct ranks
pub fn count(ranks: u16) -> u32 {
    TABLES.count[ranks as usize] as u32
}
/// highest rank index present (0 when empty)
pub fn top(ranks: u16) -> u32 {
    TABLES.top[ranks as usize] as u32
}
/// highest five ranks packed into the five rank fields of a hand value
pub fn five(ranks: u16) -> u32 {
    TABLES.five[ranks as usize]
}
/// highest rank of a straight, or 0 when none
pub fn straight(ranks: u16) -> u32 {
    TABLES.straight[ranks as usize] as u32
}
