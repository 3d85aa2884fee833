//! Tab-history strategies: what happens when a pop runs out of screens.
//!
//! Three policies govern whether a pop that exhausts the active tab's stack
//! can continue by switching to a previously visited tab:
//!
//! - **CurrentTab**: pops never leave the active tab; popping at the root is
//!   an error. No history is kept.
//! - **UniqueHistory**: every visited tab appears at most once, ordered by
//!   most recent visit. A cascade step removes the two most recent entries
//!   and hops to the earlier of the two.
//! - **UnlimitedHistory**: an unbounded stack where revisits push duplicate
//!   entries; each cascade step pops two (current, then previous) and hops to
//!   the previous one.
//!
//! The controller drives the cascade loop itself; this module owns only the
//! history collection and the per-step decision. Each cascade hop goes back
//! through the controller's switch path, which re-records the target, so a
//! hop nets exactly one removed entry.

/// Selects how pop requests interact with tab history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationStrategy {
    /// Pops are confined to the active tab.
    #[default]
    CurrentTab,
    /// Keep each visited tab once, most recent last; pops cascade backwards
    /// through that order.
    UniqueHistory,
    /// Keep every visit; pops retrace the full visit sequence.
    UnlimitedHistory,
}

/// History collection backing a [`NavigationStrategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TabHistory {
    Current,
    Unique(Vec<usize>),
    Unlimited(Vec<usize>),
}

impl TabHistory {
    pub(crate) fn new(strategy: NavigationStrategy) -> Self {
        match strategy {
            NavigationStrategy::CurrentTab => Self::Current,
            NavigationStrategy::UniqueHistory => Self::Unique(Vec::new()),
            NavigationStrategy::UnlimitedHistory => Self::Unlimited(Vec::new()),
        }
    }

    pub(crate) fn is_current_only(&self) -> bool {
        matches!(self, Self::Current)
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Current => 0,
            Self::Unique(entries) | Self::Unlimited(entries) => entries.len(),
        }
    }

    /// Record a committed switch to `index`.
    pub(crate) fn record_switch(&mut self, index: usize) {
        match self {
            Self::Current => {}
            Self::Unique(entries) => {
                entries.retain(|&entry| entry != index);
                entries.push(index);
            }
            Self::Unlimited(entries) => entries.push(index),
        }
    }

    /// Consume one cascade step: remove the two most recent entries (the
    /// current tab, then the one visited before it) and return the hop
    /// target. `None` when fewer than two entries remain.
    pub(crate) fn take_cascade_target(&mut self) -> Option<usize> {
        match self {
            Self::Current => None,
            Self::Unique(entries) | Self::Unlimited(entries) => {
                if entries.len() < 2 {
                    return None;
                }
                entries.pop();
                entries.pop()
            }
        }
    }

    /// History entries for persistence; `None` when there is nothing to
    /// save, so the field is omitted from the bundle entirely.
    pub(crate) fn save(&self) -> Option<Vec<usize>> {
        match self {
            Self::Current => None,
            Self::Unique(entries) | Self::Unlimited(entries) => {
                if entries.is_empty() {
                    None
                } else {
                    Some(entries.clone())
                }
            }
        }
    }

    /// Replace the collection with restored entries. Ignored by the
    /// current-tab policy.
    pub(crate) fn restore(&mut self, entries: Vec<usize>) {
        match self {
            Self::Current => {}
            Self::Unique(_) => {
                *self = Self::Unique(Vec::new());
                for entry in entries {
                    self.record_switch(entry);
                }
            }
            Self::Unlimited(existing) => *existing = entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drain the history the way the controller does: every hop re-records
    /// its target through the switch path.
    fn run_cascade(history: &mut TabHistory) -> Vec<usize> {
        let mut hops = Vec::new();
        while history.len() > 1 {
            let target = history.take_cascade_target().expect("two entries present");
            history.record_switch(target);
            hops.push(target);
        }
        hops
    }

    #[test]
    fn current_tab_keeps_no_history() {
        let mut history = TabHistory::new(NavigationStrategy::CurrentTab);
        history.record_switch(1);
        history.record_switch(2);
        assert_eq!(history.len(), 0);
        assert_eq!(history.take_cascade_target(), None);
        assert_eq!(history.save(), None);
    }

    #[test]
    fn unique_history_moves_revisited_tab_to_front() {
        let mut history = TabHistory::new(NavigationStrategy::UniqueHistory);
        for index in [1, 2, 3, 2] {
            history.record_switch(index);
        }
        assert_eq!(history.save(), Some(vec![1, 3, 2]));
    }

    #[test]
    fn unlimited_history_keeps_duplicates() {
        let mut history = TabHistory::new(NavigationStrategy::UnlimitedHistory);
        for index in [1, 2, 3, 2] {
            history.record_switch(index);
        }
        assert_eq!(history.save(), Some(vec![1, 2, 3, 2]));
    }

    #[test]
    fn unique_cascade_retraces_visit_order_once() {
        // Visit 1..=5 forward, then walk back 5..=1.
        let mut history = TabHistory::new(NavigationStrategy::UniqueHistory);
        for index in 1..=5 {
            history.record_switch(index);
        }
        for index in (1..=5).rev() {
            history.record_switch(index);
        }
        assert_eq!(run_cascade(&mut history), vec![2, 3, 4, 5]);
        assert_eq!(history.save(), Some(vec![5]));
    }

    #[test]
    fn unlimited_cascade_retraces_every_visit() {
        let mut history = TabHistory::new(NavigationStrategy::UnlimitedHistory);
        for index in 1..=5 {
            history.record_switch(index);
        }
        for index in (1..=5).rev() {
            history.record_switch(index);
        }
        assert_eq!(history.len(), 10);
        assert_eq!(run_cascade(&mut history), vec![2, 3, 4, 5, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn cascade_needs_two_entries() {
        let mut history = TabHistory::new(NavigationStrategy::UniqueHistory);
        history.record_switch(3);
        assert_eq!(history.take_cascade_target(), None);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn save_omits_empty_history() {
        let history = TabHistory::new(NavigationStrategy::UnlimitedHistory);
        assert_eq!(history.save(), None);
    }

    #[test]
    fn restore_replaces_the_collection() {
        let mut history = TabHistory::new(NavigationStrategy::UniqueHistory);
        history.record_switch(0);
        history.restore(vec![5, 4, 3, 2, 1]);
        assert_eq!(history.save(), Some(vec![5, 4, 3, 2, 1]));
        assert_eq!(run_cascade(&mut history), vec![2, 3, 4, 5]);
    }

    #[test]
    fn restore_into_unique_drops_duplicate_entries() {
        let mut history = TabHistory::new(NavigationStrategy::UniqueHistory);
        history.restore(vec![1, 2, 1, 3]);
        assert_eq!(history.save(), Some(vec![2, 1, 3]));
    }
}
