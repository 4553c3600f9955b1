/// One player's share of the enumerated or sampled scenarios.
///
/// `wins` counts scenarios won outright, `ties` scenarios split with at
/// least one other player. `equity` is the expected fraction of the pot:
/// 1 per win plus 1/n per n-way tie, averaged over `total`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Odds {
    pub wins: u64,
    pub ties: u64,
    pub total: u64,
    pub equity: f64,
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>6.2}%  W {:<10} T {:<10} N {:<10}",
            100. * self.equity,
            self.wins,
            self.ties,
            self.total
        )
    }
}
