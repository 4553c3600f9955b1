use super::odds::Odds;
use super::scenario::Scenario;
use super::table::Table;
use super::tally::Tally;
use crate::SIMULATION_BATCH;
use crate::cards::Card;
use crate::combos::arrangements;
use crate::error::Error;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Monte Carlo equity, pulled one batch at a time.
///
/// Every sample deals a uniformly random ordered selection of the unknown
/// cards (without replacement) into the table and scores the showdown.
/// Each call to `next` draws up to `batch` samples and yields the running
/// totals so far, never a delta, so the last item is the final answer.
///
/// Without an explicit budget the iterator stops after as many samples as
/// there are distinct ordered deals.
pub struct Simulation {
    scenario: Scenario,
    tally: Tally,
    deck: Vec<Card>,
    rng: SmallRng,
    samples: Option<u64>,
    batch: u64,
    drawn: u64,
}

impl TryFrom<&Table> for Simulation {
    type Error = Error;
    fn try_from(table: &Table) -> Result<Self, Self::Error> {
        let scenario = Scenario::try_from(table)?;
        Ok(Self {
            tally: Tally::new(scenario.players()),
            deck: scenario.remaining().to_vec(),
            scenario,
            rng: SmallRng::from_os_rng(),
            samples: None,
            batch: SIMULATION_BATCH,
            drawn: 0,
        })
    }
}

impl Simulation {
    pub fn with_samples(self, samples: u64) -> Self {
        Self {
            samples: Some(samples),
            ..self
        }
    }
    /// samples drawn between two snapshots
    pub fn with_batch(self, batch: u64) -> Self {
        Self {
            batch: batch.max(1),
            ..self
        }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..self
        }
    }

    /// total samples this simulation will draw
    pub fn budget(&self) -> u64 {
        self.samples
            .unwrap_or_else(|| arrangements(self.deck.len(), self.scenario.unknown()))
    }
    pub fn drawn(&self) -> u64 {
        self.drawn
    }
    pub fn odds(&self) -> Vec<Odds> {
        self.tally.odds()
    }

    /// unbounded unless a budget was set
    pub(crate) fn unbounded(self) -> Self {
        Self {
            samples: Some(self.samples.unwrap_or(u64::MAX)),
            ..self
        }
    }

    fn sample(&mut self) {
        let unknown = self.scenario.unknown();
        let (cards, _) = self.deck.partial_shuffle(&mut self.rng, unknown);
        self.scenario.deal(cards);
        self.tally.record(self.scenario.values(), 1);
    }
}

impl Iterator for Simulation {
    type Item = Vec<Odds>;
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.batch.min(self.budget() - self.drawn);
        if n == 0 {
            return None;
        }
        for _ in 0..n {
            self.sample();
        }
        self.drawn += n;
        log::trace!("{:<32}{:<32}", "simulated samples", self.drawn);
        Some(self.odds())
    }
}
