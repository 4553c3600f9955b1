/// Lazily walks every ordered arrangement of k distinct items from a slice,
/// in lexicographic order of the picked positions.
///
/// `k` larger than the slice is clamped to its length; `k == 0` yields
/// nothing. Like [`Combinations`], positions are advanced in place and
/// lent out by [`Permutations::advance`], and the [`Iterator`] impl clones.
///
/// [`Combinations`]: super::combinations::Combinations
pub struct Permutations<'a, T> {
    items: &'a [T],
    index: Vec<usize>,
    taken: Vec<bool>,
    fresh: bool,
    done: bool,
}

impl<'a, T> Permutations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        let k = k.min(items.len());
        let mut taken = vec![false; items.len()];
        taken.iter_mut().take(k).for_each(|t| *t = true);
        Self {
            items,
            index: (0..k).collect(),
            taken,
            fresh: true,
            done: k == 0,
        }
    }

    /// step to the next arrangement and lend out its positions
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if self.fresh {
            self.fresh = false;
            return Some(&self.index);
        }
        let n = self.items.len();
        let k = self.index.len();
        for i in (0..k).rev() {
            let prev = self.index[i];
            self.taken[prev] = false;
            if let Some(next) = (prev + 1..n).find(|&j| !self.taken[j]) {
                self.index[i] = next;
                self.taken[next] = true;
                // refill the tail with the smallest free positions
                let mut j = 0;
                for slot in i + 1..k {
                    while self.taken[j] {
                        j += 1;
                    }
                    self.index[slot] = j;
                    self.taken[j] = true;
                }
                return Some(&self.index);
            }
        }
        self.done = true;
        None
    }
}

impl<T: Clone> Iterator for Permutations<'_, T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Self::Item> {
        let items = self.items;
        self.advance()
            .map(|index| index.iter().map(|&i| items[i].clone()).collect())
    }
}

/// every ordered k-arrangement of `items`, materialized
pub fn permutations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    Permutations::new(items, k).collect()
}

/// P(n, k) = n! / (n - k)!, saturating at u64::MAX
pub fn arrangements(n: usize, k: usize) -> u64 {
    checked_arrangements(n, k).unwrap_or(u64::MAX)
}

/// P(n, k), or `None` when it does not fit in a u64
pub fn checked_arrangements(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    (0..k as u64).try_fold(1u64, |x, i| x.checked_mul(n as u64 - i))
}
