#![forbid(unsafe_code)]
//! Multi-stack tab navigation with pluggable tab-history strategies.
//!
//! `stacknav` keeps one back-stack of screens per tab and guarantees a
//! single visible screen at a time. The host UI layer implements
//! [`ScreenHost`] (add, remove, attach, detach, lookup-by-tag) and the
//! [`NavController`] drives it: tab switches detach the outgoing screen and
//! reattach or recreate the incoming stack top, pushes and pops mutate the
//! active stack, and the whole navigation state round-trips through
//! [`SavedState`] for process-death persistence.
//!
//! Back navigation across tabs is governed by a [`NavigationStrategy`]:
//!
//! - [`CurrentTab`](NavigationStrategy::CurrentTab) confines pops to the
//!   active stack and refuses to pop its root.
//! - [`UniqueHistory`](NavigationStrategy::UniqueHistory) remembers each
//!   visited tab once, most recent last.
//! - [`UnlimitedHistory`](NavigationStrategy::UnlimitedHistory) remembers
//!   every visit; popping walks the full visit sequence backwards.
//!
//! # Example
//!
//! ```
//! use stacknav::{
//!     ContainerId, NavController, NavigationStrategy, Screen, ScreenHost, ScreenTag,
//!     TransactionOptions,
//! };
//!
//! #[derive(Clone)]
//! struct Page(&'static str);
//!
//! impl Screen for Page {
//!     fn kind_name(&self) -> &str {
//!         self.0
//!     }
//! }
//!
//! /// A host that materializes screens into a flat tag map.
//! #[derive(Default)]
//! struct MapHost {
//!     screens: std::collections::HashMap<ScreenTag, Page>,
//! }
//!
//! impl ScreenHost for MapHost {
//!     type Screen = Page;
//!
//!     fn add_screen(
//!         &mut self,
//!         _container: ContainerId,
//!         screen: &Page,
//!         tag: &ScreenTag,
//!         _options: &TransactionOptions,
//!     ) {
//!         self.screens.insert(tag.clone(), screen.clone());
//!     }
//!
//!     fn remove_screen(&mut self, screen: &Page) {
//!         self.screens.retain(|_, s| s.0 != screen.0);
//!     }
//!
//!     fn detach(&mut self, _screen: &Page) {}
//!     fn attach(&mut self, _screen: &Page) {}
//!
//!     fn replace_screen(
//!         &mut self,
//!         container: ContainerId,
//!         screen: &Page,
//!         tag: &ScreenTag,
//!         options: &TransactionOptions,
//!     ) {
//!         self.add_screen(container, screen, tag, options);
//!     }
//!
//!     fn find_screen_by_tag(&self, tag: &ScreenTag) -> Option<Page> {
//!         self.screens.get(tag).cloned()
//!     }
//!
//!     fn apply_pending(&mut self) {}
//! }
//!
//! # fn main() -> stacknav::Result<()> {
//! let mut nav = NavController::builder(MapHost::default(), ContainerId(0))
//!     .root_screens(vec![Page("home"), Page("search")])
//!     .strategy(NavigationStrategy::UniqueHistory)
//!     .build(None)?;
//!
//! nav.push_screen(Page("detail"), None)?;
//! nav.switch_tab(1, None)?;
//! assert!(nav.is_root_screen());
//!
//! // Popping at a root with history configured hops back to the prior tab.
//! nav.pop_screen(None)?;
//! assert_eq!(nav.selected_tab(), Some(0));
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod host;
pub mod options;
pub mod screen;
pub mod stacks;
pub mod state;
pub mod tab_history;

pub use controller::{MAX_TABS, NavController, NavControllerBuilder};
pub use error::{NavError, Result};
pub use host::{ContainerId, RootScreenProvider, ScreenHost, TransactionListener};
pub use options::{TransactionOptions, Transition};
pub use screen::{Screen, ScreenTag, TransactionType};
pub use stacks::ScreenStacks;
pub use state::SavedState;
pub use tab_history::NavigationStrategy;
