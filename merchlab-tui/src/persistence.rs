//! UI state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;
use merchlab_core::{FilterConfig, InteractionMode, RankingConfig, SelectionCoordinator};

use crate::app::{App, Panel};

/// Serializable subset of app state that persists across restarts.
///
/// The click selection deliberately does not persist: it is scoped to the
/// lifetime of one rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub filter: FilterConfig,
    pub ranking: RankingConfig,
    pub interaction_mode: InteractionMode,
    pub active_panel: Panel,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            filter: FilterConfig::new(
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            ),
            ranking: RankingConfig::default(),
            interaction_mode: InteractionMode::MultiClick,
            active_panel: Panel::Chart,
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is missing
/// or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app.
pub fn extract(app: &App) -> PersistedState {
    PersistedState {
        filter: app.filter.clone(),
        ranking: app.ranking,
        interaction_mode: app.coordinator.mode(),
        active_panel: app.active_panel,
    }
}

/// Build the pieces of initial app state from a persisted snapshot.
pub fn restore(state: PersistedState) -> (FilterConfig, RankingConfig, SelectionCoordinator, Panel) {
    (
        state.filter,
        state.ranking,
        SelectionCoordinator::new(state.interaction_mode),
        state.active_panel,
    )
}
