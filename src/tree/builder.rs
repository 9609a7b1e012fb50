//! Build-side tree node, used only while a reload constructs its
//! replacement tree.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use smol_str::SmolStr;

use crate::base::{eq_fold, fold};
use crate::tree::Node;

/// A tree node under construction.
///
/// Unlike the frozen [`Node`], a `NodeBuilder` is mutable through `&self`:
/// ingestion may be spread across rayon workers, so the children map and the
/// platform list are each guarded by a per-node mutex. The locks are
/// per-node on purpose; a whole-tree lock would serialize ingestion for no
/// benefit.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    segment: SmolStr,
    platforms: Mutex<Vec<SmolStr>>,
    children: Mutex<IndexMap<SmolStr, Arc<NodeBuilder>>>,
}

impl NodeBuilder {
    /// A fresh root with the empty segment.
    pub fn root() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn new(segment: &str) -> Self {
        Self {
            segment: SmolStr::from(segment),
            platforms: Mutex::new(Vec::new()),
            children: Mutex::new(IndexMap::new()),
        }
    }

    /// Return the child matching `segment` case-insensitively, creating and
    /// appending it first if absent.
    ///
    /// The read-modify-write of the children map runs under this node's
    /// child-list lock, so concurrent callers racing on the same segment get
    /// the same child and never a duplicate.
    pub fn get_or_create_child(&self, segment: &str) -> Arc<NodeBuilder> {
        let mut children = self.children.lock();
        Arc::clone(
            children
                .entry(fold(segment))
                .or_insert_with(|| Arc::new(NodeBuilder::new(segment))),
        )
    }

    /// Attach a platform at exactly this node.
    ///
    /// Empty or whitespace-only names are ignored. Insertion is
    /// case-insensitive; the first-inserted casing is the one retained.
    pub fn add_platform(&self, name: &str) {
        if name.trim().is_empty() {
            return;
        }
        let mut platforms = self.platforms.lock();
        if !platforms.iter().any(|p| eq_fold(p, name)) {
            platforms.push(SmolStr::from(name));
        }
    }

    /// Snapshot this builder (and its whole subtree) into a frozen [`Node`].
    ///
    /// Called once, after ingestion has finished; the resulting tree is what
    /// gets published and is never mutated again.
    pub fn freeze(&self) -> Node {
        let children = self
            .children
            .lock()
            .iter()
            .map(|(key, child)| (key.clone(), child.freeze()))
            .collect();
        Node::new(self.segment.clone(), self.platforms.lock().clone(), children)
    }
}
