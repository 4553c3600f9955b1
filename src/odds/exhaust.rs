use super::odds::Odds;
use super::scenario::Scenario;
use super::table::Table;
use super::tally::Tally;
use crate::cards::{Hand, HandIterator};
use crate::combos::{Permutations, arrangements, checked_arrangements};
use crate::error::Error;

/// Exact equity of every player at the table.
///
/// Every ordered way of dealing the unknown cards into the empty seats and
/// board is one scenario, so `total` is P(remaining, unknown). That grows
/// fast: a flop with two hands is 1980 scenarios, a preflop heads-up deal
/// is over three million, and a fully unknown table is far out of reach.
/// Reach for [`Simulation`](super::Simulation) when more than a few cards
/// are missing. Tables whose scenario count does not fit in a u64 are
/// rejected with [`Error::TooManyScenarios`].
pub fn odds(table: &Table) -> Result<Vec<Odds>, Error> {
    table.exhaust()
}

impl Table {
    /// Counts every scenario by walking unordered card sets per slot group.
    ///
    /// Each player's missing hole cards and the missing board are drawn as
    /// bitmask k-subsets of whatever is still undealt. A set of k cards
    /// stands for the k! orderings the permutation walk would visit, all of
    /// which produce the same hands, so each leaf is weighted by the product
    /// of those factorials. Results equal [`Table::enumerate`] exactly.
    pub fn exhaust(&self) -> Result<Vec<Odds>, Error> {
        let mut scenario = Scenario::try_from(self)?;
        let count = Self::count(&scenario)?;
        let mut tally = Tally::new(scenario.players());
        let missing = scenario.missing().collect::<Vec<usize>>();
        let weight = missing
            .iter()
            .try_fold(1u64, |w, &k| w.checked_mul(arrangements(k, k)))
            .ok_or_else(|| Self::overflow(&scenario))?;
        let dealt = Hand::from(scenario.remaining()).complement();
        log::debug!("{:<32}{:<32}", "exhausting scenarios", count);
        Self::descend(&mut scenario, &mut tally, &missing, 0, dealt, weight);
        Ok(tally.odds())
    }

    /// P(remaining, unknown), when it fits
    fn count(scenario: &Scenario) -> Result<u64, Error> {
        checked_arrangements(scenario.remaining().len(), scenario.unknown())
            .ok_or_else(|| Self::overflow(scenario))
    }
    fn overflow(scenario: &Scenario) -> Error {
        Error::TooManyScenarios {
            unknown: scenario.unknown(),
            available: scenario.remaining().len(),
        }
    }

    fn descend(
        scenario: &mut Scenario,
        tally: &mut Tally,
        missing: &[usize],
        group: usize,
        dealt: Hand,
        weight: u64,
    ) {
        match missing.get(group) {
            None => tally.record(scenario.values(), weight),
            Some(&k) => {
                for cards in HandIterator::from((k, dealt)) {
                    scenario.deal_group(group, cards);
                    let dealt = Hand::add(dealt, cards);
                    Self::descend(scenario, tally, missing, group + 1, dealt, weight);
                }
            }
        }
    }

    /// Counts every scenario by walking every ordered deal of the unknown
    /// cards. Much slower than [`Table::exhaust`]; kept as its reference.
    pub fn enumerate(&self) -> Result<Vec<Odds>, Error> {
        let mut scenario = Scenario::try_from(self)?;
        Self::count(&scenario)?;
        let mut tally = Tally::new(scenario.players());
        let remaining = scenario.remaining().to_vec();
        let mut deal = Vec::with_capacity(scenario.unknown());
        match scenario.unknown() {
            0 => tally.record(scenario.values(), 1),
            k => {
                let mut perms = Permutations::new(&remaining, k);
                while let Some(index) = perms.advance() {
                    deal.clear();
                    deal.extend(index.iter().map(|&i| remaining[i]));
                    scenario.deal(&deal);
                    tally.record(scenario.values(), 1);
                }
            }
        }
        log::debug!("{:<32}{:<32}", "enumerated scenarios", tally.total());
        Ok(tally.odds())
    }
}
