//! The published index shared across all callers.
//!
//! One long-lived [`Index`] is held (typically in an `Arc`) for the life of
//! the process and injected into whatever consumes it. Searches load the
//! currently published tree through an atomic reference; reloads build a
//! replacement tree privately and publish it in a single swap, so readers
//! see either the entirely-old or the entirely-new dataset, never a mix.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use smol_str::SmolStr;
use tracing::{debug, info};

use crate::error::LocatorError;
use crate::ingest::{self, ReloadStats};
use crate::tree::{Node, NodeBuilder};

/// Outcome of a [`Index::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The path resolved; the platforms that apply there, possibly none.
    Found(Vec<SmolStr>),
    /// Some segment of the path has no node chain in the current tree.
    NotFound,
}

impl Lookup {
    /// The platform list if the path resolved.
    pub fn platforms(&self) -> Option<&[SmolStr]> {
        match self {
            Lookup::Found(platforms) => Some(platforms),
            Lookup::NotFound => None,
        }
    }
}

/// The in-memory location → platforms index.
///
/// Initializes with an empty root: every search resolves at `/` and returns
/// no platforms until the first [`reload`](Index::reload). No teardown is
/// required; a superseded tree is dropped once the last in-flight search
/// releases it.
#[derive(Debug)]
pub struct Index {
    /// The currently published tree. Never null; swapped wholesale.
    root: ArcSwap<Node>,
    /// Serializes reloads so publishes happen in acquisition order instead
    /// of racing (last-publish-wins would let an old dataset clobber a
    /// newer one).
    reload_guard: Mutex<()>,
}

impl Index {
    pub fn new() -> Self {
        Self {
            root: ArcSwap::from_pointee(Node::empty_root()),
            reload_guard: Mutex::new(()),
        }
    }

    /// Look up the platforms that apply at `location`.
    ///
    /// A blank (empty or whitespace-only) location is an invalid argument,
    /// not a miss; `"/"` is valid and resolves to the root. The lookup is
    /// lock-free: it traverses one immutable published tree, which stays
    /// alive for the duration of this call even if a reload swaps it out
    /// concurrently.
    pub fn search(&self, location: &str) -> Result<Lookup, LocatorError> {
        if location.trim().is_empty() {
            return Err(LocatorError::BlankLocation);
        }

        let root = self.root.load();
        Ok(match root.find(location) {
            Some(platforms) => Lookup::Found(platforms),
            None => Lookup::NotFound,
        })
    }

    /// Replace the entire dataset from raw lines.
    ///
    /// Builds a fresh tree off to the side, then publishes it with one
    /// atomic store. This is a full replace, never a merge: a location
    /// absent from `lines` disappears even if present before. Malformed
    /// lines are skipped and counted, never an error.
    ///
    /// Concurrent reloads are serialized; each runs synchronously to
    /// completion before returning.
    pub fn reload<S>(&self, lines: &[S]) -> ReloadStats
    where
        S: AsRef<str> + Sync,
    {
        let _guard = self.reload_guard.lock();

        let builder = NodeBuilder::root();
        let stats = ingest::ingest(&builder, lines);
        let fresh = builder.freeze();
        debug!(children = fresh.child_count(), "built replacement tree");

        self.root.store(Arc::new(fresh));
        info!(
            lines_total = stats.lines_total,
            lines_skipped = stats.lines_skipped,
            "published new dataset"
        );
        stats
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}
