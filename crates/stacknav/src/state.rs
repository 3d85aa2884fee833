//! Serializable controller state.
//!
//! [`SavedState`] is the unit of persistence across host recreation: the tag
//! counter, the selected tab, the current screen's tag, every tab's tag stack
//! and (for the history-keeping strategies) the visit history. Screen
//! *content* is never persisted, only identity and order.
//!
//! A stack entry of `null` marks a screen that could not be resolved when the
//! state was written; restore skips it and re-derives the screen from the
//! root-screen configuration when the tab is next shown.

use serde::{Deserialize, Serialize};

use crate::screen::ScreenTag;

/// Snapshot of a controller's navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// Monotonic tag counter; restored so tags never repeat.
    pub tag_count: u64,
    /// Selected tab, `None` when nothing was selected.
    pub selected_tab: Option<usize>,
    /// Tag of the screen that was on screen, if it resolved at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_tag: Option<ScreenTag>,
    /// Per-tab tag stacks, outer index = tab, inner bottom to top. `None`
    /// entries are unresolvable screens, re-derived at restore time.
    pub stacks: Vec<Vec<Option<ScreenTag>>>,
    /// Tab-history strategy record; omitted when the history is empty or the
    /// strategy keeps none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_history: Option<Vec<usize>>,
}

impl SavedState {
    /// Serialize to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse from JSON. Any malformation is an error; callers treat that as
    /// "restore failed" and initialize fresh.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
