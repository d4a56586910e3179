use std::collections::BTreeMap;

use crate::history::DrawHistory;
use crate::models::{HotCold, Pool};

/// Occurrence counts per digit. Sparse: digits that never occurred have
/// no entry, and [`FrequencyTable::get`] reports them as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, digit: u8) {
        *self.counts.entry(digit).or_insert(0) += 1;
    }

    pub fn get(&self, digit: u8) -> u32 {
        self.counts.get(&digit).copied().unwrap_or(0)
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.counts.contains_key(&digit)
    }

    /// Number of distinct digits observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Observed `(digit, count)` pairs in ascending digit order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    /// Counts for every digit 0-9, zero-filled.
    pub fn dense(&self) -> [u32; 10] {
        let mut out = [0u32; 10];
        for (d, c) in self.iter() {
            if let Some(slot) = out.get_mut(d as usize) {
                *slot = c;
            }
        }
        out
    }

    /// Entries by descending count, ties broken by ascending digit.
    pub fn ranked(&self) -> Vec<(u8, u32)> {
        let mut entries: Vec<(u8, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

impl FromIterator<u8> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for digit in iter {
            table.add(digit);
        }
        table
    }
}

pub fn pool_frequencies(history: &DrawHistory, pool: Pool) -> FrequencyTable {
    history
        .iter()
        .flat_map(|draw| pool.digits_from(draw))
        .collect()
}

/// Main-digit table (3 observations per draw) and fireball table (1 per draw).
/// An empty history yields two empty tables.
pub fn compute_frequencies(history: &DrawHistory) -> (FrequencyTable, FrequencyTable) {
    let main_freq = pool_frequencies(history, Pool::Main);
    let fire_freq = pool_frequencies(history, Pool::Fireball);
    log::debug!(
        "frequencies over {} draws: main {:?}, fireball {:?}",
        history.len(),
        main_freq.counts,
        fire_freq.counts
    );
    (main_freq, fire_freq)
}

/// Top `k` and bottom `k` digits of the ranked table. Cold keeps the ranked
/// order, so it reads from the least-cold to the coldest digit. With fewer
/// than `k` distinct digits both sets hold every digit.
pub fn rank_hot_cold(table: &FrequencyTable, k: usize) -> HotCold {
    let ranked = table.ranked();
    let hot = ranked.iter().take(k).map(|&(d, _)| d).collect();
    let cold = ranked[ranked.len().saturating_sub(k)..]
        .iter()
        .map(|&(d, _)| d)
        .collect();
    HotCold { hot, cold }
}
