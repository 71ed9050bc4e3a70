use log::debug;

/// Lazily yields every distinct permutation of its items in lexicographic
/// order, starting from the sorted arrangement.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    current: Vec<T>,
    exhausted: bool,
}

impl<T: Ord + Clone> Permutations<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort();
        debug!("Enumerating permutations of {} items", items.len());
        Self {
            current: items,
            exhausted: false,
        }
    }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let permutation = self.current.clone();
        if !next_permutation(&mut self.current) {
            self.exhausted = true;
        }
        Some(permutation)
    }
}

/// Rearrange `items` into the next lexicographically greater permutation.
///
/// Returns `false`, leaving the items sorted ascending, when `items` was
/// already the last permutation.
pub fn next_permutation<T: Ord + Clone>(items: &mut [T]) -> bool {
    let Some(pivot) = items
        .windows(2)
        .rposition(|pair| matches!(pair, [a, b] if a < b))
    else {
        items.reverse();
        return false;
    };

    let Some(pivot_value) = items.get(pivot).cloned() else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|item| *item > pivot_value) else {
        return false;
    };

    items.swap(pivot, successor);
    if let Some(tail) = items.get_mut(pivot + 1..) {
        tail.reverse();
    }
    true
}

/// Number of distinct permutations of a multiset, if it fits in a `u64`
pub fn distinct_permutation_count<T: Ord + Clone>(items: &[T]) -> Option<u64> {
    let mut sorted = items.to_vec();
    sorted.sort();

    let mut count: u64 = 1;
    let mut placed: u64 = 0;
    for group in sorted.chunk_by(|a, b| a == b) {
        let size = u64::try_from(group.len()).ok()?;
        placed += size;
        count = count.checked_mul(binomial(placed, size)?)?;
    }
    Some(count)
}

fn binomial(n: u64, k: u64) -> Option<u64> {
    let mut result: u128 = 1;
    for i in 1..=u128::from(k) {
        result = result.checked_mul(u128::from(n - k) + i)? / i;
    }
    u64::try_from(result).ok()
}
