//! Error type for navigation operations.
//!
//! Errors fall into two categories. Caller-misuse errors (bad index, bad pop
//! depth, popping a root) indicate a wiring bug in the integrating
//! application and are reported immediately; configuration errors (missing
//! root screen, conflicting builder inputs, state-locked host) mean the
//! controller cannot proceed with that one operation. Neither is retried and
//! neither corrupts navigation state.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NavError>;

/// Failure raised by [`NavController`] operations.
///
/// [`NavController`]: crate::controller::NavController
#[derive(Debug, Error)]
pub enum NavError {
    /// A tab index outside `[0, tab_count)` was supplied.
    #[error("tab index {index} is out of range for {count} tabs")]
    TabOutOfRange { index: usize, count: usize },

    /// Attempted to pop the root screen of the active stack.
    #[error("cannot pop the root screen; use replace_screen to change it")]
    PopRoot,

    /// A pop was requested with a depth below 1.
    #[error("pop depth must be greater than 0")]
    InvalidPopDepth,

    /// A stack operation was requested while no tab is selected.
    #[error("no tab is selected")]
    NoTabSelected,

    /// Neither the root-screen list nor the provider could produce a root
    /// screen for a tab the controller needs to show.
    #[error("no root screen available for tab {index}")]
    MissingRootScreen { index: usize },

    /// The builder was given an unusable combination of inputs.
    #[error("invalid controller configuration: {message}")]
    BadConfig { message: String },

    /// The host has entered a state where only partial-apply commits are
    /// safe, and the transaction options did not allow one.
    #[error("screen host is state-locked; set allow_partial_apply to proceed")]
    HostStateLocked,
}

impl NavError {
    pub(crate) fn bad_config(message: impl Into<String>) -> Self {
        Self::BadConfig {
            message: message.into(),
        }
    }

    /// Whether this error reports caller misuse (fix the call site) as
    /// opposed to incomplete configuration.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::TabOutOfRange { .. } | Self::PopRoot | Self::InvalidPopDepth | Self::NoTabSelected
        )
    }
}
