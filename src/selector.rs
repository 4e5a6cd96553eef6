//! The selection contract shared by every node-picking strategy.

use crate::error::Result;
use std::collections::BTreeMap;
use std::error::Error;

/// Deferred accessor returned by [`Selector::select`].
///
/// Each call yields exactly one address string.
pub type Next = Box<dyn Fn() -> String + Send + Sync>;

/// Opaque per-call hints. Wrapping selectors pass them through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    hints: BTreeMap<String, String>,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.hints.insert(key.into(), value.into());
        self
    }

    pub fn hint(&self, key: &str) -> Option<&str> {
        self.hints.get(key).map(String::as_str)
    }
}

/// A pluggable policy that picks one node out of a candidate list.
pub trait Selector: Send + Sync {
    /// Pick one of `candidates`. Fails with
    /// [`SelectorError::NoCandidates`](crate::SelectorError::NoCandidates)
    /// when there is nothing to choose from.
    fn select(&self, candidates: &[String], opts: &SelectOptions) -> Result<Next>;

    /// Report how a call to a previously selected `address` went.
    fn record(&self, address: &str, outcome: Option<&dyn Error>) -> Result<()>;

    /// Drop any adaptive state.
    fn reset(&self) -> Result<()>;

    fn name(&self) -> &str;
}

/// Accessor that always yields `address`.
pub(crate) fn constant(address: String) -> Next {
    Box::new(move || address.clone())
}
