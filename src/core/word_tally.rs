/*
 * Holds the per-run word counts accumulated by the processing engine.
 *
 * Entries are kept in first-seen order next to a hash index, so lookups stay
 * O(1) while the ranker can still break count ties deterministically by the
 * order in which words were first encountered.
 */
use std::collections::HashMap;
use std::collections::hash_map::Entry;

#[derive(Debug, Default, Clone)]
pub struct WordTally {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
    total: u64,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /*
     * Increments the count for `word` by one, inserting it at the end of the
     * first-seen order when it has not been counted before. The caller is
     * responsible for case folding.
     */
    pub fn increment(&mut self, word: String) {
        match self.index.entry(word) {
            Entry::Occupied(slot) => {
                self.entries[*slot.get()].1 += 1;
            }
            Entry::Vacant(slot) => {
                self.entries.push((slot.key().clone(), 1));
                slot.insert(self.entries.len() - 1);
            }
        }
        self.total += 1;
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    /* Number of distinct words. */
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /* Sum of all counts, i.e. the number of tokens tallied so far. */
    pub fn total(&self) -> u64 {
        self.total
    }

    /* Entries in first-seen order. */
    pub fn as_slice(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
        self.total = 0;
    }
}
