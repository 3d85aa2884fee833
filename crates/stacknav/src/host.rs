//! Collaborator seams between the controller and the presentation layer.
//!
//! The controller owns the navigation state; everything about how a screen is
//! drawn, hosted, or torn down lives behind [`ScreenHost`]. Two smaller seams
//! complete the picture: [`RootScreenProvider`] manufactures the bottom
//! screen of a stack the first time a tab is visited, and
//! [`TransactionListener`] observes every committed transaction.

use crate::options::TransactionOptions;
use crate::screen::{Screen, ScreenTag, TransactionType};

/// Identifies the host container screens are placed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub u64);

/// The rendering/hosting surface the controller drives.
///
/// Implementations may apply operations immediately or queue them; a queueing
/// host flushes from [`apply_pending`]. A host that has reached a point where
/// committed state can no longer be persisted reports [`is_state_locked`],
/// after which the controller only proceeds when the transaction options set
/// `allow_partial_apply`.
///
/// [`apply_pending`]: ScreenHost::apply_pending
/// [`is_state_locked`]: ScreenHost::is_state_locked
pub trait ScreenHost {
    /// Host-defined screen handle.
    type Screen: Screen + Clone;

    /// Materialize a new screen instance in `container` under `tag`.
    fn add_screen(
        &mut self,
        container: ContainerId,
        screen: &Self::Screen,
        tag: &ScreenTag,
        options: &TransactionOptions,
    );

    /// Permanently remove a hosted screen.
    fn remove_screen(&mut self, screen: &Self::Screen);

    /// Detach a screen from the view hierarchy, keeping its instance around
    /// for a later [`attach`](ScreenHost::attach).
    fn detach(&mut self, screen: &Self::Screen);

    /// Reattach a previously detached screen.
    fn attach(&mut self, screen: &Self::Screen);

    /// Swap the content of `container` for `screen`, hosted under `tag`.
    fn replace_screen(
        &mut self,
        container: ContainerId,
        screen: &Self::Screen,
        tag: &ScreenTag,
        options: &TransactionOptions,
    );

    /// Look up a hosted screen by tag. `None` after a cold start or state
    /// loss; the controller then falls back to recreating the screen.
    fn find_screen_by_tag(&self, tag: &ScreenTag) -> Option<Self::Screen>;

    /// Flush any queued operations.
    fn apply_pending(&mut self);

    /// Whether only partial-apply commits are currently safe.
    fn is_state_locked(&self) -> bool {
        false
    }
}

/// Supplies the root screen for a tab, called lazily the first time a tab's
/// stack is found empty.
pub trait RootScreenProvider<S> {
    /// Produce the root screen for `tab_index`, or `None` if this provider
    /// has no screen for that index.
    fn root_screen(&mut self, tab_index: usize) -> Option<S>;
}

impl<S, F> RootScreenProvider<S> for F
where
    F: FnMut(usize) -> Option<S>,
{
    fn root_screen(&mut self, tab_index: usize) -> Option<S> {
        self(tab_index)
    }
}

/// Observes committed transactions.
pub trait TransactionListener<S> {
    /// A tab switch committed. `index` is `None` when the controller moved to
    /// the no-tab state.
    fn on_tab_transaction(&mut self, screen: Option<&S>, index: Option<usize>);

    /// A push/pop/replace committed on the active stack.
    fn on_screen_transaction(&mut self, screen: Option<&S>, kind: TransactionType);
}
