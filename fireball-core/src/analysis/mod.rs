pub mod frequency;
pub mod sampler;

use rand::Rng;

use crate::config::{AnalyzerConfig, FireballPool};
use crate::error::AnalyzerError;
use crate::history::DrawHistory;
use crate::models::{Combination, DrawRecord, HotCold, SuggestionSet};

pub use frequency::{compute_frequencies, rank_hot_cold, FrequencyTable};
pub use sampler::{generate_combinations, seeded_rng};

/// Returns `history` with `record` appended. Earlier entries are untouched.
pub fn record_draw(mut history: DrawHistory, record: DrawRecord) -> DrawHistory {
    history.append(record);
    history
}

/// Frequency tables plus hot/cold sets for both pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub main_freq: FrequencyTable,
    pub fire_freq: FrequencyTable,
    pub main: HotCold,
    pub fireball: HotCold,
}

/// Statistics and suggestions over a caller-owned [`DrawHistory`].
#[derive(Debug, Clone, Default)]
pub struct DrawHistoryAnalyzer {
    config: AnalyzerConfig,
}

impl DrawHistoryAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn record_draw(&self, history: DrawHistory, record: DrawRecord) -> DrawHistory {
        record_draw(history, record)
    }

    pub fn compute_frequencies(&self, history: &DrawHistory) -> (FrequencyTable, FrequencyTable) {
        compute_frequencies(history)
    }

    pub fn rank_hot_cold(&self, table: &FrequencyTable) -> HotCold {
        rank_hot_cold(table, self.config.hot_cold_size)
    }

    pub fn generate_combinations<R: Rng + ?Sized>(
        &self,
        digit_pool: &[u8],
        fireball_pool: &[u8],
        rng: &mut R,
    ) -> Result<Vec<Combination>, AnalyzerError> {
        generate_combinations(digit_pool, fireball_pool, self.config.combinations, rng)
    }

    /// `None` when there is nothing to analyze yet.
    pub fn analyze(&self, history: &DrawHistory) -> Option<Analysis> {
        if history.is_empty() {
            return None;
        }
        let (main_freq, fire_freq) = self.compute_frequencies(history);
        let main = self.rank_hot_cold(&main_freq);
        let fireball = self.rank_hot_cold(&fire_freq);
        Some(Analysis {
            main_freq,
            fire_freq,
            main,
            fireball,
        })
    }

    /// Hot mains pair with hot fireballs; cold mains pair with the pool
    /// selected by `cold_fireball_pool`.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        history: &DrawHistory,
        rng: &mut R,
    ) -> Result<Option<SuggestionSet>, AnalyzerError> {
        let Some(analysis) = self.analyze(history) else {
            return Ok(None);
        };

        let cold_fireballs = match self.config.cold_fireball_pool {
            FireballPool::Hot => &analysis.fireball.hot,
            FireballPool::Cold => &analysis.fireball.cold,
        };

        let hot = self.generate_combinations(&analysis.main.hot, &analysis.fireball.hot, rng)?;
        let cold = self.generate_combinations(&analysis.main.cold, cold_fireballs, rng)?;
        Ok(Some(SuggestionSet { hot, cold }))
    }
}
