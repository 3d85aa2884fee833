//! The navigation controller: multiple parallel back-stacks, one visible
//! screen.
//!
//! [`NavController`] owns a tag stack per tab, a tab-history collection for
//! the configured [`NavigationStrategy`], and the monotonic tag counter.
//! Every operation computes the stack mutation, asks the [`ScreenHost`] to
//! materialize the transition, then updates its own state and notifies the
//! [`TransactionListener`].
//!
//! When a screen must become visible the controller walks a fixed fallback
//! order: reattach the hosted instance by tag, else look up the stack top and
//! recreate under the same tag, else manufacture a fresh root from the
//! root-screen configuration.
//!
//! The controller is single-threaded: all operations are synchronous and run
//! to completion before returning. A guard flag makes the pending-operation
//! flush a no-op while a flush is already in progress, since a queueing host
//! may call back into the controller mid-apply.

use std::fmt;

use crate::error::{NavError, Result};
use crate::host::{ContainerId, RootScreenProvider, ScreenHost, TransactionListener};
use crate::options::TransactionOptions;
use crate::screen::{Screen, ScreenTag, TransactionType};
use crate::stacks::ScreenStacks;
use crate::state::SavedState;
use crate::tab_history::{NavigationStrategy, TabHistory};

/// Upper bound on the number of tabs one controller manages.
pub const MAX_TABS: usize = 20;

type Provider<S> = Box<dyn RootScreenProvider<S>>;
type Listener<S> = Box<dyn TransactionListener<S>>;

/// How the next screen gets on screen. Variants are resolved before any
/// state is mutated so a failing resolution leaves the controller untouched.
enum ShowPlan<S> {
    /// The hosted instance is still around; reattach it.
    Reattach(ScreenTag, S),
    /// The tag is known but the instance is gone; recreate under the same
    /// tag.
    AddUnderTag(ScreenTag, S),
    /// The stack is empty; manufacture a root and push a fresh tag.
    AddNewRoot(S),
}

/// Multi-stack navigation controller.
///
/// Built through [`NavControllerBuilder`]; see the crate docs for a usage
/// walkthrough.
pub struct NavController<H: ScreenHost> {
    host: H,
    container: ContainerId,
    stacks: ScreenStacks,
    history: TabHistory,
    strategy: NavigationStrategy,
    root_screens: Vec<H::Screen>,
    root_provider: Option<Provider<H::Screen>>,
    listener: Option<Listener<H::Screen>>,
    default_options: TransactionOptions,
    selected: Option<usize>,
    current: Option<(ScreenTag, H::Screen)>,
    tag_count: u64,
    flushing: bool,
}

impl<H: ScreenHost> fmt::Debug for NavController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavController")
            .field("tab_count", &self.stacks.tab_count())
            .field("selected", &self.selected)
            .field("strategy", &self.strategy)
            .field("tag_count", &self.tag_count)
            .field("current_tag", &self.current.as_ref().map(|(tag, _)| tag))
            .finish()
    }
}

impl<H: ScreenHost> NavController<H> {
    /// Start building a controller that drives `host`, placing screens into
    /// `container`.
    #[must_use]
    pub fn builder(host: H, container: ContainerId) -> NavControllerBuilder<H> {
        NavControllerBuilder::new(host, container)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Currently selected tab, `None` in the no-tab state.
    #[must_use]
    pub fn selected_tab(&self) -> Option<usize> {
        self.selected
    }

    /// Number of tabs this controller manages.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.stacks.tab_count()
    }

    /// Configured tab-history strategy.
    #[must_use]
    pub fn strategy(&self) -> NavigationStrategy {
        self.strategy
    }

    /// Whether the active stack is at (or below) its root screen.
    #[must_use]
    pub fn is_root_screen(&self) -> bool {
        self.selected
            .is_some_and(|index| self.stacks.len(index) <= 1)
    }

    /// Tags on the active stack, bottom first. `None` with no tab selected.
    #[must_use]
    pub fn current_stack(&self) -> Option<&[ScreenTag]> {
        self.selected.map(|index| self.stacks.tags(index))
    }

    /// Tags on `index`'s stack, bottom first.
    pub fn stack_at(&self, index: usize) -> Result<&[ScreenTag]> {
        if index >= self.tab_count() {
            return Err(NavError::TabOutOfRange {
                index,
                count: self.tab_count(),
            });
        }
        Ok(self.stacks.tags(index))
    }

    /// The screen currently on screen, if the host can still resolve one.
    ///
    /// The cached handle is revalidated against the active stack and the
    /// host before it is trusted; a stale cache falls back to resolving the
    /// stack top by tag.
    pub fn current_screen(&mut self) -> Option<H::Screen> {
        self.current_screen_cloned()
    }

    /// Whether the host reports that only partial-apply commits are safe.
    #[must_use]
    pub fn is_host_locked(&self) -> bool {
        self.host.is_state_locked()
    }

    /// Borrow the driven host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the driven host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // ------------------------------------------------------------------
    // Navigation operations
    // ------------------------------------------------------------------

    /// Switch to the stack at `index`.
    ///
    /// A no-op when `index` is already selected. Otherwise the current
    /// screen is detached and `index`'s top screen is shown via the
    /// reattach/recreate fallback order; an empty stack gets a root screen
    /// from the root-screen configuration.
    pub fn switch_tab(&mut self, index: usize, options: Option<&TransactionOptions>) -> Result<()> {
        if index >= self.tab_count() {
            return Err(NavError::TabOutOfRange {
                index,
                count: self.tab_count(),
            });
        }
        if self.selected == Some(index) {
            return Ok(());
        }
        let options = self.resolve_options(options);
        self.check_state_lock(&options)?;
        self.switch_internal(index, &options)
    }

    /// Leave the tabbed state entirely, detaching the current screen.
    pub fn deselect(&mut self, options: Option<&TransactionOptions>) -> Result<()> {
        if self.selected.is_none() {
            return Ok(());
        }
        let options = self.resolve_options(options);
        self.check_state_lock(&options)?;
        let from = self.selected;
        self.detach_current();
        self.selected = None;
        self.current = None;
        self.apply_pending_ops();
        tracing::debug!(message = "nav.deselect", from = ?from);
        self.notify_tab(None);
        Ok(())
    }

    /// Push `screen` onto the active stack and show it.
    pub fn push_screen(
        &mut self,
        screen: H::Screen,
        options: Option<&TransactionOptions>,
    ) -> Result<()> {
        let Some(index) = self.selected else {
            return Err(NavError::NoTabSelected);
        };
        let options = self.resolve_options(options);
        self.check_state_lock(&options)?;

        self.detach_current();
        let tag = self.generate_tag(&screen);
        self.stacks.push(index, tag.clone());
        self.host.add_screen(self.container, &screen, &tag, &options);
        self.apply_pending_ops();
        tracing::debug!(message = "nav.push", tab = index, tag = %tag);
        self.current = Some((tag, screen));
        self.notify_screen(TransactionType::Push);
        Ok(())
    }

    /// Pop a single screen; see [`pop_screens`](Self::pop_screens).
    pub fn pop_screen(&mut self, options: Option<&TransactionOptions>) -> Result<bool> {
        self.pop_screens(1, options)
    }

    /// Pop `depth` screens, cascading across tabs when the configured
    /// strategy keeps history.
    ///
    /// Returns whether anything changed. Each cascade iteration first tries
    /// to satisfy the remaining depth within the active tab; only a
    /// zero-yield in-tab attempt consults the tab history, and each cross-tab
    /// hop consumes one unit of depth.
    pub fn pop_screens(
        &mut self,
        depth: usize,
        options: Option<&TransactionOptions>,
    ) -> Result<bool> {
        let options = self.resolve_options(options);
        self.check_state_lock(&options)?;

        if self.history.is_current_only() {
            return Ok(self.try_pop_from_current_stack(depth, &options)? > 0);
        }

        let mut remaining = depth;
        let mut changed = false;
        loop {
            let mut progressed = false;
            let count = self.try_pop_from_current_stack(remaining, &options)?;
            if count > 0 {
                changed = true;
                progressed = true;
                remaining -= count;
            } else if self.history.len() > 1 {
                if let Some(target) = self.history.take_cascade_target() {
                    self.switch_internal(target, &options)?;
                    changed = true;
                    progressed = true;
                    remaining -= 1;
                }
            }
            if remaining == 0 || !progressed {
                break;
            }
        }
        Ok(changed)
    }

    /// Pop everything above the root of the active stack in one batch.
    ///
    /// A no-op when no tab is selected or the stack is already at its root.
    pub fn clear_stack(&mut self, options: Option<&TransactionOptions>) -> Result<()> {
        let Some(index) = self.selected else {
            return Ok(());
        };
        let options = self.resolve_options(options);
        self.check_state_lock(&options)?;
        self.clear_stack_internal(index, &options)
    }

    /// Swap the top of the active stack for `screen` in place.
    ///
    /// Unlike pop, replace may target the root screen. A no-op when no
    /// screen is currently resolvable.
    pub fn replace_screen(
        &mut self,
        screen: H::Screen,
        options: Option<&TransactionOptions>,
    ) -> Result<()> {
        let Some(index) = self.selected else {
            return Ok(());
        };
        let options = self.resolve_options(options);
        self.check_state_lock(&options)?;
        if self.current_screen_cloned().is_none() {
            return Ok(());
        }

        let tag = self.generate_tag(&screen);
        self.host
            .replace_screen(self.container, &screen, &tag, &options);
        self.apply_pending_ops();
        self.stacks.pop(index);
        self.stacks.push(index, tag.clone());
        tracing::debug!(message = "nav.replace", tab = index, tag = %tag);
        self.current = Some((tag, screen));
        self.notify_screen(TransactionType::Replace);
        Ok(())
    }

    /// Flush queued host operations.
    ///
    /// Safe to call at any time; re-entrant calls while a flush is already
    /// running are no-ops, so a host that calls back into the controller
    /// mid-apply cannot corrupt transaction ordering.
    pub fn apply_pending_ops(&mut self) {
        if self.flushing {
            return;
        }
        self.flushing = true;
        self.host.apply_pending();
        self.flushing = false;
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Snapshot the navigation state for persistence.
    pub fn save_state(&mut self) -> SavedState {
        let current_tag = self
            .current_screen_cloned()
            .and_then(|_| self.current.as_ref().map(|(tag, _)| tag.clone()));
        let stacks = (0..self.tab_count())
            .map(|tab| {
                self.stacks
                    .tags(tab)
                    .iter()
                    .cloned()
                    .map(Some)
                    .collect()
            })
            .collect();
        SavedState {
            tag_count: self.tag_count,
            selected_tab: self.selected,
            current_tag,
            stacks,
            tab_history: self.history.save(),
        }
    }

    /// Apply a saved state to this freshly built controller. Returns false
    /// when the state does not fit the configuration; nothing is applied in
    /// that case.
    fn restore_from(&mut self, state: &SavedState) -> bool {
        let tab_count = self.tab_count();
        if state.stacks.len() != tab_count {
            return false;
        }
        if let Some(selected) = state.selected_tab
            && selected >= tab_count
        {
            return false;
        }
        if let Some(entries) = &state.tab_history
            && entries.iter().any(|&entry| entry >= tab_count)
        {
            return false;
        }

        let mut stacks = ScreenStacks::new(tab_count);
        for (tab, tags) in state.stacks.iter().enumerate() {
            for tag in tags.iter().flatten() {
                if tag.is_empty() {
                    continue;
                }
                stacks.push(tab, tag.clone());
            }
        }

        self.stacks = stacks;
        self.tag_count = state.tag_count;
        self.selected = state.selected_tab;
        self.current = state.current_tag.as_ref().and_then(|tag| {
            self.host
                .find_screen_by_tag(tag)
                .map(|screen| (tag.clone(), screen))
        });
        self.history = TabHistory::new(self.strategy);
        if let Some(selected) = self.selected {
            self.history.record_switch(selected);
        }
        if let Some(entries) = &state.tab_history {
            self.history.restore(entries.clone());
        }
        true
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// First interaction after construction: restore if a usable saved state
    /// was supplied, otherwise set up stacks and show the initial root.
    fn initialize(
        &mut self,
        initial_tab: usize,
        eager: bool,
        saved: Option<&SavedState>,
    ) -> Result<()> {
        if let Some(state) = saved {
            if self.restore_from(state) {
                tracing::debug!(
                    message = "nav.restore",
                    selected = ?self.selected,
                    tag_count = self.tag_count
                );
                return Ok(());
            }
            tracing::warn!(message = "nav.restore_failed");
        }
        self.fresh_initialize(initial_tab, eager)
    }

    fn fresh_initialize(&mut self, initial_tab: usize, eager: bool) -> Result<()> {
        let tab_count = self.tab_count();
        self.stacks = ScreenStacks::new(tab_count);
        self.history = TabHistory::new(self.strategy);
        self.tag_count = 0;
        self.current = None;
        self.history.record_switch(initial_tab);

        let options = self.default_options.clone();
        let (lower, upper) = if eager {
            (0, tab_count)
        } else {
            (initial_tab, initial_tab + 1)
        };
        for tab in lower..upper {
            let screen = self.provider_root(tab)?;
            let tag = self.generate_tag(&screen);
            self.stacks.push(tab, tag.clone());
            self.host.add_screen(self.container, &screen, &tag, &options);
            if tab == initial_tab {
                self.current = Some((tag, screen));
            } else {
                self.host.detach(&screen);
            }
        }
        self.selected = Some(initial_tab);
        self.apply_pending_ops();
        self.notify_tab(Some(initial_tab));
        Ok(())
    }

    /// Switch without the range/no-op/lock checks; shared by the public
    /// entry point and cascade hops (which re-record the target here).
    fn switch_internal(&mut self, index: usize, options: &TransactionOptions) -> Result<()> {
        if self.selected == Some(index) {
            return Ok(());
        }
        // Resolve the screen to show before touching any state, so a missing
        // root leaves the controller unchanged.
        let plan = self.plan_show(index)?;
        let from = self.selected;

        self.detach_current();
        self.selected = Some(index);
        self.history.record_switch(index);
        let shown = self.execute_plan(index, plan, options);
        self.apply_pending_ops();
        tracing::debug!(message = "nav.switch", from = ?from, to = index);
        self.current = Some(shown);
        self.notify_tab(Some(index));
        Ok(())
    }

    /// Decide how `index`'s top screen will be shown: reattach by tag, else
    /// recreate under the exposed tag, else manufacture a new root.
    fn plan_show(&mut self, index: usize) -> Result<ShowPlan<H::Screen>> {
        if let Some(tag) = self.stacks.peek(index).cloned() {
            if let Some(screen) = self.host.find_screen_by_tag(&tag) {
                return Ok(ShowPlan::Reattach(tag, screen));
            }
            let screen = self.provider_root(index)?;
            return Ok(ShowPlan::AddUnderTag(tag, screen));
        }
        let screen = self.provider_root(index)?;
        Ok(ShowPlan::AddNewRoot(screen))
    }

    fn execute_plan(
        &mut self,
        index: usize,
        plan: ShowPlan<H::Screen>,
        options: &TransactionOptions,
    ) -> (ScreenTag, H::Screen) {
        match plan {
            ShowPlan::Reattach(tag, screen) => {
                self.host.attach(&screen);
                (tag, screen)
            }
            ShowPlan::AddUnderTag(tag, screen) => {
                self.host.add_screen(self.container, &screen, &tag, options);
                (tag, screen)
            }
            ShowPlan::AddNewRoot(screen) => {
                let tag = self.generate_tag(&screen);
                self.stacks.push(index, tag.clone());
                self.host.add_screen(self.container, &screen, &tag, options);
                (tag, screen)
            }
        }
    }

    /// The raw in-tab pop: remove up to `depth` screens from the active
    /// stack and show what is exposed. Returns how many were removed; zero
    /// means the stack was already at its root (history strategies then
    /// consult the cascade).
    fn try_pop_from_current_stack(
        &mut self,
        depth: usize,
        options: &TransactionOptions,
    ) -> Result<usize> {
        if depth < 1 {
            return Err(NavError::InvalidPopDepth);
        }
        if self.history.is_current_only() && self.is_root_screen() {
            return Err(NavError::PopRoot);
        }
        let Some(index) = self.selected else {
            return Err(NavError::NoTabSelected);
        };

        // A depth that would drain the stack degenerates to clearing it.
        let poppable = self.stacks.len(index).saturating_sub(1);
        if depth >= poppable {
            self.clear_stack_internal(index, options)?;
            return Ok(poppable);
        }

        for _ in 0..depth {
            if let Some(tag) = self.stacks.pop(index)
                && let Some(screen) = self.host.find_screen_by_tag(&tag)
            {
                self.host.remove_screen(&screen);
            }
        }
        let shown = self.show_exposed_top(index, options)?;
        self.apply_pending_ops();
        tracing::debug!(message = "nav.pop", tab = index, depth);
        self.current = Some(shown);
        self.notify_screen(TransactionType::Pop);
        Ok(depth)
    }

    fn clear_stack_internal(&mut self, index: usize, options: &TransactionOptions) -> Result<()> {
        if self.stacks.len(index) <= 1 {
            return Ok(());
        }
        while self.stacks.len(index) > 1 {
            if let Some(tag) = self.stacks.pop(index)
                && let Some(screen) = self.host.find_screen_by_tag(&tag)
            {
                self.host.remove_screen(&screen);
            }
        }
        let shown = self.show_exposed_top(index, options)?;
        self.apply_pending_ops();
        tracing::debug!(message = "nav.clear", tab = index);
        self.current = Some(shown);
        self.notify_screen(TransactionType::Pop);
        Ok(())
    }

    /// After screens were removed, bring the newly exposed stack top on
    /// screen through the same fallback order as a tab switch.
    fn show_exposed_top(
        &mut self,
        index: usize,
        options: &TransactionOptions,
    ) -> Result<(ScreenTag, H::Screen)> {
        let plan = self.plan_show(index)?;
        Ok(self.execute_plan(index, plan, options))
    }

    fn detach_current(&mut self) {
        if let Some(screen) = self.current_screen_cloned() {
            self.host.detach(&screen);
        }
    }

    fn current_screen_cloned(&mut self) -> Option<H::Screen> {
        if let Some((tag, screen)) = &self.current {
            let on_top = self
                .selected
                .and_then(|index| self.stacks.peek(index))
                .is_some_and(|top| top == tag);
            if on_top && self.host.find_screen_by_tag(tag).is_some() {
                return Some(screen.clone());
            }
        }
        let index = self.selected?;
        let tag = self.stacks.peek(index)?.clone();
        let screen = self.host.find_screen_by_tag(&tag)?;
        self.current = Some((tag, screen.clone()));
        Some(screen)
    }

    /// Resolve a root screen for `index`: the hosted stack top if it still
    /// exists, else the provider or the configured root list.
    fn provider_root(&mut self, index: usize) -> Result<H::Screen> {
        if !self.stacks.is_empty(index)
            && let Some(tag) = self.stacks.peek(index)
            && let Some(screen) = self.host.find_screen_by_tag(tag)
        {
            return Ok(screen);
        }
        if let Some(provider) = self.root_provider.as_mut() {
            if let Some(screen) = provider.root_screen(index) {
                return Ok(screen);
            }
        } else if let Some(screen) = self.root_screens.get(index) {
            return Ok(screen.clone());
        }
        Err(NavError::MissingRootScreen { index })
    }

    fn generate_tag(&mut self, screen: &H::Screen) -> ScreenTag {
        self.tag_count += 1;
        ScreenTag::generate(screen.kind_name(), self.tag_count)
    }

    fn resolve_options(&self, options: Option<&TransactionOptions>) -> TransactionOptions {
        options
            .cloned()
            .unwrap_or_else(|| self.default_options.clone())
    }

    fn check_state_lock(&self, options: &TransactionOptions) -> Result<()> {
        if self.host.is_state_locked() && !options.allow_partial_apply {
            return Err(NavError::HostStateLocked);
        }
        Ok(())
    }

    fn notify_tab(&mut self, index: Option<usize>) {
        let screen = self.current.as_ref().map(|(_, s)| s.clone());
        if let Some(listener) = self.listener.as_mut() {
            listener.on_tab_transaction(screen.as_ref(), index);
        }
    }

    fn notify_screen(&mut self, kind: TransactionType) {
        let screen = self.current.as_ref().map(|(_, s)| s.clone());
        if let Some(listener) = self.listener.as_mut() {
            listener.on_screen_transaction(screen.as_ref(), kind);
        }
    }
}

/// Builder for [`NavController`].
///
/// Exactly one root-screen source is required: either a list of root screens
/// (one per tab) or a [`RootScreenProvider`] with a tab count. Everything
/// else is optional.
pub struct NavControllerBuilder<H: ScreenHost> {
    host: H,
    container: ContainerId,
    root_screens: Vec<H::Screen>,
    root_provider: Option<(usize, Provider<H::Screen>)>,
    listener: Option<Listener<H::Screen>>,
    strategy: NavigationStrategy,
    default_options: TransactionOptions,
    initial_tab: usize,
    eager: bool,
}

impl<H: ScreenHost> NavControllerBuilder<H> {
    #[must_use]
    pub fn new(host: H, container: ContainerId) -> Self {
        Self {
            host,
            container,
            root_screens: Vec::new(),
            root_provider: None,
            listener: None,
            strategy: NavigationStrategy::default(),
            default_options: TransactionOptions::default(),
            initial_tab: 0,
            eager: false,
        }
    }

    /// Use a fixed list of root screens; the list length is the tab count.
    #[must_use]
    pub fn root_screens(mut self, screens: Vec<H::Screen>) -> Self {
        self.root_screens = screens;
        self
    }

    /// Single-stack shorthand for [`root_screens`](Self::root_screens).
    #[must_use]
    pub fn root_screen(self, screen: H::Screen) -> Self {
        self.root_screens(vec![screen])
    }

    /// Create root screens lazily through `provider` for `tab_count` tabs.
    #[must_use]
    pub fn root_provider(
        mut self,
        tab_count: usize,
        provider: impl RootScreenProvider<H::Screen> + 'static,
    ) -> Self {
        self.root_provider = Some((tab_count, Box::new(provider)));
        self
    }

    /// Observe committed transactions.
    #[must_use]
    pub fn transaction_listener(
        mut self,
        listener: impl TransactionListener<H::Screen> + 'static,
    ) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Select the tab-history strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: NavigationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Options applied when an operation is called without its own.
    #[must_use]
    pub fn default_options(mut self, options: TransactionOptions) -> Self {
        self.default_options = options;
        self
    }

    /// Tab selected on fresh initialization. Defaults to 0.
    #[must_use]
    pub fn initial_tab(mut self, index: usize) -> Self {
        self.initial_tab = index;
        self
    }

    /// Materialize every tab's root screen up front on fresh initialization,
    /// detaching all but the selected one.
    #[must_use]
    pub fn eager(mut self, eager: bool) -> Self {
        self.eager = eager;
        self
    }

    /// Validate the configuration and initialize the controller, restoring
    /// from `saved` when it fits; a failed restore falls back to fresh
    /// initialization.
    pub fn build(self, saved: Option<&SavedState>) -> Result<NavController<H>> {
        let Self {
            host,
            container,
            root_screens,
            root_provider,
            listener,
            strategy,
            default_options,
            initial_tab,
            eager,
        } = self;

        if !root_screens.is_empty() && root_provider.is_some() {
            return Err(NavError::bad_config(
                "root screens and a root-screen provider cannot both be set",
            ));
        }
        let (tab_count, root_provider) = match root_provider {
            Some((count, provider)) => (count, Some(provider)),
            None => (root_screens.len(), None),
        };
        if tab_count == 0 {
            return Err(NavError::bad_config(
                "either root screens or a root-screen provider must be set",
            ));
        }
        if tab_count > MAX_TABS {
            return Err(NavError::bad_config(format!(
                "tab count {tab_count} exceeds the maximum of {MAX_TABS}"
            )));
        }
        if initial_tab >= tab_count {
            return Err(NavError::TabOutOfRange {
                index: initial_tab,
                count: tab_count,
            });
        }

        let mut controller = NavController {
            host,
            container,
            stacks: ScreenStacks::new(tab_count),
            history: TabHistory::new(strategy),
            strategy,
            root_screens,
            root_provider,
            listener,
            default_options,
            selected: None,
            current: None,
            tag_count: 0,
            flushing: false,
        };
        controller.initialize(initial_tab, eager, saved)?;
        Ok(controller)
    }
}
