//! Screen identity: the [`Screen`] trait and generated [`ScreenTag`]s.
//!
//! A screen is any unit of navigable content the host can materialize. The
//! controller never inspects screen internals; it only needs a stable kind
//! name so that every hosted instance can be keyed by a generated tag and
//! found again later.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Implemented by the host's screen handle type.
pub trait Screen {
    /// Stable name for this screen's kind. Used as the prefix of generated
    /// tags, so it should not change between runs of the same application.
    fn kind_name(&self) -> &str;
}

/// Unique key tying a logical screen to a hosted (possibly recreated)
/// instance.
///
/// Tags are generated as `kind_name + counter` from a per-controller counter
/// that is persisted across save/restore, so a tag is never reused within one
/// controller's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenTag(String);

impl ScreenTag {
    pub(crate) fn generate(kind: &str, counter: u64) -> Self {
        Self(format!("{kind}{counter}"))
    }

    /// The tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag carries no usable key. Restored bundles may contain
    /// such entries; they are treated as the "re-derive from root" sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty() || self.0.eq_ignore_ascii_case("null")
    }
}

impl fmt::Display for ScreenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ScreenTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ScreenTag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ScreenTag {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Kind of screen transaction reported to the [`TransactionListener`].
///
/// [`TransactionListener`]: crate::host::TransactionListener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// A screen was pushed onto the active stack.
    Push,
    /// One or more screens were popped off the active stack.
    Pop,
    /// The top screen was swapped for another in place.
    Replace,
}
