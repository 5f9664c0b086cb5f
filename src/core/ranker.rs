/*
 * Ranking of a `WordTally` into a `RankedSnapshot`.
 *
 * `top_words` never locks anything. The processing engine calls it while it
 * already holds its state lock, so the snapshot is taken from a consistent view
 * of the live tally without copying the whole map first.
 */
use crate::core::notifications::{RankedEntry, RankedSnapshot};
use crate::core::word_tally::WordTally;
use std::cmp::Ordering;

/*
 * Returns the `n` most frequent words, highest count first. Equal counts keep
 * the tally's first-seen order.
 *
 * Selection is partial: the top `n` are isolated with `select_nth_unstable_by`
 * (linear on average) and only those are sorted, so the cost is
 * O(d + n log n) for `d` distinct words. The comparator is a total order
 * (count, then first-seen position), which makes the unstable primitives
 * produce a deterministic result.
 */
pub fn top_words(tally: &WordTally, n: usize) -> RankedSnapshot {
    let entries = tally.as_slice();
    let limit = n.min(entries.len());
    if limit == 0 {
        return Vec::new();
    }

    let by_rank = |a: &usize, b: &usize| -> Ordering {
        entries[*b].1.cmp(&entries[*a].1).then_with(|| a.cmp(b))
    };

    let mut positions: Vec<usize> = (0..entries.len()).collect();
    if limit < positions.len() {
        positions.select_nth_unstable_by(limit - 1, by_rank);
        positions.truncate(limit);
    }
    positions.sort_unstable_by(by_rank);

    positions
        .into_iter()
        .map(|i| RankedEntry::new(entries[i].0.clone(), entries[i].1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn tally_of(words: &[&str]) -> WordTally {
        let mut tally = WordTally::new();
        for word in words {
            tally.increment(word.to_string());
        }
        tally
    }

    fn pairs(snapshot: &RankedSnapshot) -> Vec<(&str, u64)> {
        snapshot.iter().map(|e| (e.word.as_str(), e.count)).collect()
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let tally = tally_of(&["the", "cat", "sat", "the", "cat", "sat"]);
        let snapshot = top_words(&tally, 3);
        assert_eq!(pairs(&snapshot), vec![("the", 2), ("cat", 2), ("sat", 2)]);
    }

    #[test]
    fn test_sorted_descending_and_truncated() {
        let tally = tally_of(&["a", "b", "b", "c", "c", "c", "d", "d", "d", "d"]);
        let snapshot = top_words(&tally, 2);
        assert_eq!(pairs(&snapshot), vec![("d", 4), ("c", 3)]);
    }

    #[test]
    fn test_n_larger_than_distinct_words() {
        let tally = tally_of(&["x", "y", "x"]);
        let snapshot = top_words(&tally, 15);
        assert_eq!(pairs(&snapshot), vec![("x", 2), ("y", 1)]);
    }

    #[test]
    fn test_zero_n_and_empty_tally() {
        let tally = tally_of(&["x"]);
        assert!(top_words(&tally, 0).is_empty());
        assert!(top_words(&WordTally::new(), 5).is_empty());
    }

    #[test]
    fn test_matches_full_stable_sort_on_random_tallies() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let mut tally = WordTally::new();
            let draws = rng.random_range(0..400);
            for _ in 0..draws {
                let word = format!("w{}", rng.random_range(0..60));
                tally.increment(word);
            }
            let n = rng.random_range(0..70);

            let mut expected: Vec<(String, u64)> = tally.as_slice().to_vec();
            expected.sort_by(|a, b| b.1.cmp(&a.1)); // stable
            expected.truncate(n);

            let actual: Vec<(String, u64)> = top_words(&tally, n)
                .into_iter()
                .map(|e| (e.word, e.count))
                .collect();
            assert_eq!(actual, expected);
        }
    }
}
