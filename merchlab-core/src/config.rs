//! Dashboard configuration — TOML file describing the data source, default
//! filter window, and ranking/interaction defaults.
//!
//! ```toml
//! [data]
//! source = "transactions.csv"
//!
//! [filter]
//! start_date = "2023-01-01"
//! end_date = "2024-12-31"
//! categories = ["grocery"]
//!
//! [ranking]
//! direction = "top"
//! count = 10
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::filter::FilterConfig;
use crate::ranking::RankingConfig;
use crate::selection::InteractionMode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Data source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the transaction CSV.
    pub source: PathBuf,
}

/// Complete dashboard configuration.
///
/// `interaction_mode` is declared before the table-valued fields so the
/// struct serializes to valid TOML (values must precede tables).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_interaction_mode")]
    pub interaction_mode: InteractionMode,
    pub data: DataConfig,
    pub filter: FilterConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

fn default_interaction_mode() -> InteractionMode {
    InteractionMode::MultiClick
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.end_date < self.filter.start_date {
            return Err(ConfigError::Invalid(format!(
                "end_date {} precedes start_date {}",
                self.filter.end_date, self.filter.start_date
            )));
        }
        if self.ranking.count == 0 {
            return Err(ConfigError::Invalid(
                "ranking count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::RankDirection;

    const FULL_TOML: &str = r#"
interaction_mode = "single_click"

[data]
source = "transactions.csv"

[filter]
start_date = "2023-01-01"
end_date = "2024-12-31"
categories = ["grocery", "fuel"]
cities = ["Austin"]

[ranking]
direction = "bottom"
count = 5
"#;

    const MINIMAL_TOML: &str = r#"
interaction_mode = "multi_click"

[data]
source = "transactions.csv"

[filter]
start_date = "2023-01-01"
end_date = "2024-12-31"
"#;

    #[test]
    fn parses_full_config() {
        let config = DashboardConfig::from_toml(FULL_TOML).unwrap();
        assert_eq!(config.data.source, PathBuf::from("transactions.csv"));
        assert_eq!(config.filter.categories.len(), 2);
        assert_eq!(config.ranking.direction, RankDirection::Bottom);
        assert_eq!(config.ranking.count, 5);
        assert_eq!(config.interaction_mode, InteractionMode::SingleClick);
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let config = DashboardConfig::from_toml(MINIMAL_TOML).unwrap();
        assert!(config.filter.categories.is_empty());
        assert_eq!(config.ranking, RankingConfig::default());
        assert_eq!(config.interaction_mode, InteractionMode::MultiClick);
    }

    #[test]
    fn rejects_inverted_date_range() {
        let toml = r#"
[data]
source = "transactions.csv"

[filter]
start_date = "2024-12-31"
end_date = "2023-01-01"
"#;
        let err = DashboardConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_ranking_count() {
        let toml = r#"
[data]
source = "transactions.csv"

[filter]
start_date = "2023-01-01"
end_date = "2024-12-31"

[ranking]
direction = "top"
count = 0
"#;
        let err = DashboardConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn toml_roundtrip() {
        let config = DashboardConfig::from_toml(FULL_TOML).unwrap();
        let serialized = toml::to_string(&config).unwrap();
        let reparsed = DashboardConfig::from_toml(&serialized).unwrap();
        assert_eq!(config, reparsed);
    }
}
