//! Click-selection coordinator — chart clicks to highlighted merchants.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// How a click batch is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Only the first click point of a batch is kept.
    SingleClick,
    /// Every click point of a batch is kept (lasso or repeated clicks).
    MultiClick,
}

impl InteractionMode {
    pub fn toggle(self) -> Self {
        match self {
            InteractionMode::SingleClick => InteractionMode::MultiClick,
            InteractionMode::MultiClick => InteractionMode::SingleClick,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::SingleClick => "single-click",
            InteractionMode::MultiClick => "multi-click",
        }
    }
}

/// A single click event forwarded by the presentation layer.
///
/// `x` is the category-axis value under the click — the merchant id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub x: String,
}

impl SelectionEvent {
    pub fn new(x: impl Into<String>) -> Self {
        Self { x: x.into() }
    }
}

/// Holds the current chart selection for the lifetime of one rendered chart.
///
/// Each `update` replaces the selection wholesale with the ids extracted
/// from the incoming batch; an empty batch clears it. Selections are never
/// accumulated across batches.
#[derive(Debug, Clone)]
pub struct SelectionCoordinator {
    mode: InteractionMode,
    selected: HashSet<String>,
}

impl SelectionCoordinator {
    pub fn new(mode: InteractionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Switch interaction modes. The current selection stands until the next
    /// update.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
    }

    /// Replace the selection with the ids from this event batch.
    pub fn update(&mut self, events: &[SelectionEvent]) -> &HashSet<String> {
        self.selected = match self.mode {
            InteractionMode::SingleClick => {
                events.first().map(|e| e.x.clone()).into_iter().collect()
            }
            InteractionMode::MultiClick => events.iter().map(|e| e.x.clone()).collect(),
        };
        &self.selected
    }

    /// Currently highlighted merchant ids.
    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, merchant_id: &str) -> bool {
        self.selected.contains(merchant_id)
    }

    /// Drop the selection; equivalent to an empty update batch.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
