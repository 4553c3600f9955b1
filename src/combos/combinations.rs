/// Lazily walks every k-subset of a slice, in lexicographic order of
/// input positions, keeping the input order within each subset.
///
/// The position buffer is advanced in place, so [`Combinations::advance`]
/// can be driven without allocating. The [`Iterator`] impl clones the
/// picked items into a fresh `Vec` per subset. An instance is single-pass;
/// construct a new one to start over.
pub struct Combinations<'a, T> {
    items: &'a [T],
    index: Vec<usize>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            index: (0..k).collect(),
            state: match k == 0 || k > items.len() {
                true => State::Done,
                false => State::Fresh,
            },
        }
    }

    /// step to the next subset and lend out its positions
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Done => return None,
            State::Fresh => self.state = State::Running,
            State::Running => {
                let n = self.items.len();
                let k = self.index.len();
                match (0..k).rev().find(|&i| self.index[i] < n - k + i) {
                    None => {
                        self.state = State::Done;
                        return None;
                    }
                    Some(i) => {
                        self.index[i] += 1;
                        for j in i + 1..k {
                            self.index[j] = self.index[j - 1] + 1;
                        }
                    }
                }
            }
        }
        Some(&self.index)
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Self::Item> {
        let items = self.items;
        self.advance()
            .map(|index| index.iter().map(|&i| items[i].clone()).collect())
    }
}

/// every k-subset of `items`, materialized
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    Combinations::new(items, k).collect()
}

/// C(n, k), saturating at u64::MAX
pub fn choose(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    (0..k)
        .try_fold(1u128, |x, i| x.checked_mul(n - i).map(|x| x / (i + 1)))
        .and_then(|x| u64::try_from(x).ok())
        .unwrap_or(u64::MAX)
}
