//! Per-transaction presentation options.
//!
//! [`TransactionOptions`] is inert configuration: the controller never reads
//! the animation or transition fields, it only forwards them to the
//! [`ScreenHost`] alongside each add/replace call. The one field the
//! controller itself consults is [`allow_partial_apply`], which gates
//! committing against a state-locked host.
//!
//! [`ScreenHost`]: crate::host::ScreenHost
//! [`allow_partial_apply`]: TransactionOptions::allow_partial_apply

/// Host-defined transition kind applied when screens change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transition {
    /// No transition.
    #[default]
    None,
    /// A screen is being opened.
    Open,
    /// A screen is being closed.
    Close,
    /// Cross-fade between screens.
    Fade,
}

/// Options forwarded verbatim to the screen host for one transaction.
///
/// Built with chained setters:
///
/// ```
/// use stacknav::{TransactionOptions, Transition};
///
/// let options = TransactionOptions::new()
///     .custom_animations(10, 11)
///     .pop_animations(12, 13)
///     .transition(Transition::Fade)
///     .breadcrumb_title("Settings");
/// assert_eq!(options.enter_animation, Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionOptions {
    /// Host animation id for the entering screen.
    pub enter_animation: Option<u32>,
    /// Host animation id for the exiting screen.
    pub exit_animation: Option<u32>,
    /// Entering animation used when the transaction is a pop.
    pub pop_enter_animation: Option<u32>,
    /// Exiting animation used when the transaction is a pop.
    pub pop_exit_animation: Option<u32>,
    /// Host style resource applied to the transition.
    pub transition_style: Option<u32>,
    /// Transition kind.
    pub transition: Transition,
    /// `(element, name)` pairs shared between the outgoing and incoming
    /// screens.
    pub shared_elements: Vec<(String, String)>,
    /// Breadcrumb title recorded by the host.
    pub breadcrumb_title: Option<String>,
    /// Short breadcrumb title recorded by the host.
    pub breadcrumb_short_title: Option<String>,
    /// Allow commits that the host may not be able to persist. Required for
    /// transactions attempted after the host reports itself state-locked.
    pub allow_partial_apply: bool,
}

impl TransactionOptions {
    /// Empty options; every field defers to host defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enter/exit animation pair.
    #[must_use]
    pub fn custom_animations(mut self, enter: u32, exit: u32) -> Self {
        self.enter_animation = Some(enter);
        self.exit_animation = Some(exit);
        self
    }

    /// Set the animation pair used when popping.
    #[must_use]
    pub fn pop_animations(mut self, pop_enter: u32, pop_exit: u32) -> Self {
        self.pop_enter_animation = Some(pop_enter);
        self.pop_exit_animation = Some(pop_exit);
        self
    }

    /// Set the transition kind.
    #[must_use]
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Set the host style resource for the transition.
    #[must_use]
    pub fn transition_style(mut self, style: u32) -> Self {
        self.transition_style = Some(style);
        self
    }

    /// Add a shared element pair.
    #[must_use]
    pub fn shared_element(mut self, element: impl Into<String>, name: impl Into<String>) -> Self {
        self.shared_elements.push((element.into(), name.into()));
        self
    }

    /// Set the breadcrumb title.
    #[must_use]
    pub fn breadcrumb_title(mut self, title: impl Into<String>) -> Self {
        self.breadcrumb_title = Some(title.into());
        self
    }

    /// Set the short breadcrumb title.
    #[must_use]
    pub fn breadcrumb_short_title(mut self, title: impl Into<String>) -> Self {
        self.breadcrumb_short_title = Some(title.into());
        self
    }

    /// Allow commits even when the host is state-locked.
    #[must_use]
    pub fn allow_partial_apply(mut self, allow: bool) -> Self {
        self.allow_partial_apply = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_defer_everything_to_host() {
        let options = TransactionOptions::new();
        assert_eq!(options.enter_animation, None);
        assert_eq!(options.exit_animation, None);
        assert_eq!(options.pop_enter_animation, None);
        assert_eq!(options.pop_exit_animation, None);
        assert_eq!(options.transition, Transition::None);
        assert_eq!(options.transition_style, None);
        assert!(options.shared_elements.is_empty());
        assert_eq!(options.breadcrumb_title, None);
        assert_eq!(options.breadcrumb_short_title, None);
        assert!(!options.allow_partial_apply);
    }

    #[test]
    fn setters_populate_every_field() {
        let options = TransactionOptions::new()
            .custom_animations(1, 2)
            .pop_animations(3, 4)
            .transition(Transition::Open)
            .transition_style(9)
            .shared_element("avatar", "profile_avatar")
            .breadcrumb_title("Profile")
            .breadcrumb_short_title("P")
            .allow_partial_apply(true);

        assert_eq!(options.enter_animation, Some(1));
        assert_eq!(options.exit_animation, Some(2));
        assert_eq!(options.pop_enter_animation, Some(3));
        assert_eq!(options.pop_exit_animation, Some(4));
        assert_eq!(options.transition, Transition::Open);
        assert_eq!(options.transition_style, Some(9));
        assert_eq!(
            options.shared_elements,
            vec![("avatar".to_owned(), "profile_avatar".to_owned())]
        );
        assert_eq!(options.breadcrumb_title.as_deref(), Some("Profile"));
        assert_eq!(options.breadcrumb_short_title.as_deref(), Some("P"));
        assert!(options.allow_partial_apply);
    }
}
