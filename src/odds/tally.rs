use super::odds::Odds;
use crate::eval::Value;

/// Running showdown results for a fixed set of players.
///
/// Tie shares are kept exact: every scenario contributes `weight * scale / n`
/// to each of its n winners, where `scale` is divisible by every possible n.
/// Equity is only turned into a float when a snapshot is taken.
#[derive(Debug, Clone)]
pub struct Tally {
    wins: Vec<u64>,
    ties: Vec<u64>,
    share: Vec<u128>,
    total: u64,
    scale: u128,
}

impl Tally {
    pub fn new(players: usize) -> Self {
        Self {
            wins: vec![0; players],
            ties: vec![0; players],
            share: vec![0; players],
            total: 0,
            scale: (1..=players as u128).fold(1, lcm),
        }
    }

    /// Credits the best value(s) in `values`, one entry per player,
    /// as `weight` identical scenarios.
    pub fn record(&mut self, values: &[Value], weight: u64) {
        let best = values.iter().copied().max().unwrap_or_default();
        let n = values.iter().filter(|&&v| v == best).count();
        let share = weight as u128 * self.scale / n as u128;
        for (i, _) in values.iter().enumerate().filter(|(_, v)| **v == best) {
            match n {
                1 => self.wins[i] = self.wins[i].saturating_add(weight),
                _ => self.ties[i] = self.ties[i].saturating_add(weight),
            }
            self.share[i] = self.share[i].saturating_add(share);
        }
        self.total = self.total.saturating_add(weight);
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn odds(&self) -> Vec<Odds> {
        let denominator = self.scale as f64 * self.total as f64;
        (0..self.wins.len())
            .map(|i| Odds {
                wins: self.wins[i],
                ties: self.ties[i],
                total: self.total,
                equity: match self.total {
                    0 => 0.,
                    _ => self.share[i] as f64 / denominator,
                },
            })
            .collect()
    }
}

fn gcd(a: u128, b: u128) -> u128 {
    match b {
        0 => a,
        _ => gcd(b, a % b),
    }
}
fn lcm(a: u128, b: u128) -> u128 {
    a / gcd(a, b) * b
}
