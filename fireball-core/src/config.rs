use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Which fireball digits the cold combinations are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FireballPool {
    #[default]
    Hot,
    Cold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub section: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: "https://www.lotterypost.com/results/il".to_string(),
            section: "Pick 3 Evening".to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Size of each hot/cold digit set.
    pub hot_cold_size: usize,
    /// Combinations per suggestion column.
    pub combinations: usize,
    pub cold_fireball_pool: FireballPool,
    pub seed: Option<u64>,
    /// Rows shown by the history view.
    pub history_rows: usize,
    pub source: SourceConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            hot_cold_size: 3,
            combinations: 5,
            cold_fireball_pool: FireballPool::Hot,
            seed: None,
            history_rows: 10,
            source: SourceConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<AnalyzerConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {:?}", path))?;
    let config: AnalyzerConfig = serde_json::from_str(&json)
        .with_context(|| format!("invalid config {:?}", path))?;
    log::debug!("loaded config from {:?}: {:?}", path, config);
    Ok(config)
}

pub fn save_config(config: &AnalyzerConfig, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).with_context(|| format!("cannot write config {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.hot_cold_size, 3);
        assert_eq!(config.combinations, 5);
        assert_eq!(config.cold_fireball_pool, FireballPool::Hot);
        assert_eq!(config.seed, None);
        assert_eq!(config.source.section, "Pick 3 Evening");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"combinations": 8, "cold_fireball_pool": "cold", "source": {"timeout_secs": 3}}"#)
                .unwrap();
        assert_eq!(config.combinations, 8);
        assert_eq!(config.hot_cold_size, 3);
        assert_eq!(config.cold_fireball_pool, FireballPool::Cold);
        assert_eq!(config.source.timeout_secs, 3);
        assert_eq!(config.source.url, SourceConfig::default().url);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fireball.json");

        let config = AnalyzerConfig {
            seed: Some(42),
            hot_cold_size: 4,
            ..AnalyzerConfig::default()
        };
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.json")).is_err());
    }
}
