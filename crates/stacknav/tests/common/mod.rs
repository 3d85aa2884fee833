//! Shared test doubles: an in-memory screen host that records every call,
//! plus a listener that collects transaction events.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use stacknav::{
    ContainerId, Screen, ScreenHost, ScreenTag, TransactionListener, TransactionOptions,
    TransactionType,
};

pub const CONTAINER: ContainerId = ContainerId(7);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestScreen {
    pub kind: &'static str,
    id: u64,
}

impl TestScreen {
    pub fn new(kind: &'static str) -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        Self {
            kind,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl Screen for TestScreen {
    fn kind_name(&self) -> &str {
        self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    Add(ScreenTag),
    Remove(ScreenTag),
    Detach(ScreenTag),
    Attach(ScreenTag),
    Replace(ScreenTag),
}

/// Screen host backed by a tag map. Screens stay resolvable by tag until
/// removed, mirroring a retained view hierarchy; `evict` simulates the host
/// discarding instances (a cold restart) so the recreate fallback kicks in.
#[derive(Debug, Default)]
pub struct MockHost {
    screens: HashMap<ScreenTag, TestScreen>,
    detached: HashSet<ScreenTag>,
    pub ops: Vec<HostOp>,
    pub apply_count: usize,
    pub state_locked: bool,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all hosted instances without telling the controller.
    pub fn evict(&mut self) {
        self.screens.clear();
        self.detached.clear();
    }

    pub fn hosted_count(&self) -> usize {
        self.screens.len()
    }

    pub fn is_detached(&self, tag: &ScreenTag) -> bool {
        self.detached.contains(tag)
    }

    fn tag_of(&self, screen: &TestScreen) -> Option<ScreenTag> {
        self.screens
            .iter()
            .find(|(_, s)| *s == screen)
            .map(|(tag, _)| tag.clone())
    }
}

impl ScreenHost for MockHost {
    type Screen = TestScreen;

    fn add_screen(
        &mut self,
        _container: ContainerId,
        screen: &TestScreen,
        tag: &ScreenTag,
        _options: &TransactionOptions,
    ) {
        self.screens.insert(tag.clone(), screen.clone());
        self.detached.remove(tag);
        self.ops.push(HostOp::Add(tag.clone()));
    }

    fn remove_screen(&mut self, screen: &TestScreen) {
        if let Some(tag) = self.tag_of(screen) {
            self.screens.remove(&tag);
            self.detached.remove(&tag);
            self.ops.push(HostOp::Remove(tag));
        }
    }

    fn detach(&mut self, screen: &TestScreen) {
        if let Some(tag) = self.tag_of(screen) {
            self.detached.insert(tag.clone());
            self.ops.push(HostOp::Detach(tag));
        }
    }

    fn attach(&mut self, screen: &TestScreen) {
        if let Some(tag) = self.tag_of(screen) {
            self.detached.remove(&tag);
            self.ops.push(HostOp::Attach(tag));
        }
    }

    fn replace_screen(
        &mut self,
        _container: ContainerId,
        screen: &TestScreen,
        tag: &ScreenTag,
        _options: &TransactionOptions,
    ) {
        // The host swaps whatever occupies the container for the new screen.
        if let Some(attached) = self
            .screens
            .iter()
            .find(|(t, _)| !self.detached.contains(*t))
            .map(|(t, _)| t.clone())
        {
            self.screens.remove(&attached);
        }
        self.screens.insert(tag.clone(), screen.clone());
        self.ops.push(HostOp::Replace(tag.clone()));
    }

    fn find_screen_by_tag(&self, tag: &ScreenTag) -> Option<TestScreen> {
        self.screens.get(tag).cloned()
    }

    fn apply_pending(&mut self) {
        self.apply_count += 1;
    }

    fn is_state_locked(&self) -> bool {
        self.state_locked
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Tab {
        index: Option<usize>,
        kind: Option<&'static str>,
    },
    Screen {
        transaction: TransactionType,
        kind: Option<&'static str>,
    },
}

/// Listener that appends every notification to a shared log.
pub struct RecordingListener {
    pub events: Rc<RefCell<Vec<Event>>>,
}

impl RecordingListener {
    pub fn new() -> (Self, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                events: Rc::clone(&events),
            },
            events,
        )
    }
}

impl TransactionListener<TestScreen> for RecordingListener {
    fn on_tab_transaction(&mut self, screen: Option<&TestScreen>, index: Option<usize>) {
        self.events.borrow_mut().push(Event::Tab {
            index,
            kind: screen.map(|s| s.kind),
        });
    }

    fn on_screen_transaction(&mut self, screen: Option<&TestScreen>, transaction: TransactionType) {
        self.events.borrow_mut().push(Event::Screen {
            transaction,
            kind: screen.map(|s| s.kind),
        });
    }
}

/// Roots named "root0", "root1", ... for an n-tab controller.
pub fn numbered_roots(count: usize) -> Vec<TestScreen> {
    const KINDS: [&str; 8] = [
        "root0", "root1", "root2", "root3", "root4", "root5", "root6", "root7",
    ];
    KINDS[..count].iter().map(|kind| TestScreen::new(kind)).collect()
}
