use crate::HAND_SIZE;
use crate::error::Error;

/// How many hole cards a hand may, or must, contribute.
///
/// `maximum: None` means "as many as were dealt". Hold'em uses any number,
/// Omaha exactly two, Pineapple at most two.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub minimum: usize,
    pub maximum: Option<usize>,
}

impl Usage {
    pub const fn any() -> Self {
        Self {
            minimum: 0,
            maximum: None,
        }
    }
    pub const fn exactly(n: usize) -> Self {
        Self {
            minimum: n,
            maximum: Some(n),
        }
    }
    pub const fn between(minimum: usize, maximum: usize) -> Self {
        Self {
            minimum,
            maximum: Some(maximum),
        }
    }

    /// Validates against the number of hole cards dealt and clamps the
    /// maximum into `[minimum, min(holes, HAND_SIZE)]`.
    pub fn bounds(&self, holes: usize) -> Result<Bounds, Error> {
        let minimum = self.minimum;
        let maximum = self.maximum.unwrap_or(holes);
        if minimum > holes {
            return Err(Error::MinimumExceedsHoleCards { minimum, holes });
        }
        if minimum > maximum {
            return Err(Error::MinimumExceedsMaximum { minimum, maximum });
        }
        if maximum == 0 {
            return Err(Error::NonPositiveMaximum);
        }
        Ok(Bounds {
            minimum,
            maximum: maximum.min(holes).min(HAND_SIZE).max(minimum),
        })
    }
}

/// A validated, clamped [`Usage`] for a known number of hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub minimum: usize,
    pub maximum: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_every_hole_card() {
        let bounds = Usage::any().bounds(2).unwrap();
        assert_eq!(bounds, Bounds { minimum: 0, maximum: 2 });
    }

    #[test]
    fn clamps_to_five() {
        let bounds = Usage::any().bounds(7).unwrap();
        assert_eq!(bounds, Bounds { minimum: 0, maximum: 5 });
        let bounds = Usage::between(1, 9).bounds(3).unwrap();
        assert_eq!(bounds, Bounds { minimum: 1, maximum: 3 });
    }

    #[test]
    fn rejects_contradictions() {
        assert!(matches!(
            Usage::exactly(2).bounds(1),
            Err(Error::MinimumExceedsHoleCards { minimum: 2, holes: 1 })
        ));
        assert!(matches!(
            Usage::between(2, 1).bounds(4),
            Err(Error::MinimumExceedsMaximum { minimum: 2, maximum: 1 })
        ));
        assert!(matches!(Usage::between(0, 0).bounds(2), Err(Error::NonPositiveMaximum)));
        assert!(matches!(Usage::any().bounds(0), Err(Error::NonPositiveMaximum)));
    }
}
