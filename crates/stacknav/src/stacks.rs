//! Per-tab back-stacks of screen tags.
//!
//! One [`ScreenStacks`] holds an ordered tag stack for every tab, bottom =
//! root, top = the screen shown when that tab is selected. The controller is
//! the only mutator; it validates tab indices before calling in, so an
//! out-of-range index here is a programmer error and panics.

use crate::screen::ScreenTag;

/// Ordered screen-tag stacks, one per tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenStacks {
    stacks: Vec<Vec<ScreenTag>>,
}

impl ScreenStacks {
    /// Create `tab_count` empty stacks.
    #[must_use]
    pub fn new(tab_count: usize) -> Self {
        Self {
            stacks: vec![Vec::new(); tab_count],
        }
    }

    /// Number of tabs.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.stacks.len()
    }

    /// Push `tag` onto `tab`'s stack.
    ///
    /// # Panics
    ///
    /// Panics if `tab` is out of range.
    pub fn push(&mut self, tab: usize, tag: ScreenTag) {
        self.stacks[tab].push(tag);
    }

    /// Pop the top tag off `tab`'s stack.
    ///
    /// # Panics
    ///
    /// Panics if `tab` is out of range.
    pub fn pop(&mut self, tab: usize) -> Option<ScreenTag> {
        self.stacks[tab].pop()
    }

    /// The top tag of `tab`'s stack without removing it.
    ///
    /// # Panics
    ///
    /// Panics if `tab` is out of range.
    #[must_use]
    pub fn peek(&self, tab: usize) -> Option<&ScreenTag> {
        self.stacks[tab].last()
    }

    /// Number of screens on `tab`'s stack.
    ///
    /// # Panics
    ///
    /// Panics if `tab` is out of range.
    #[must_use]
    pub fn len(&self, tab: usize) -> usize {
        self.stacks[tab].len()
    }

    /// Whether `tab`'s stack holds no screens.
    ///
    /// # Panics
    ///
    /// Panics if `tab` is out of range.
    #[must_use]
    pub fn is_empty(&self, tab: usize) -> bool {
        self.stacks[tab].is_empty()
    }

    /// All tags on `tab`'s stack, bottom first.
    ///
    /// # Panics
    ///
    /// Panics if `tab` is out of range.
    #[must_use]
    pub fn tags(&self, tab: usize) -> &[ScreenTag] {
        &self.stacks[tab]
    }
}
