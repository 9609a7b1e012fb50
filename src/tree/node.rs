//! Frozen read-side tree node and the segment-matching algorithm.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::{fold, split_segments};

/// One path segment of the published tree.
///
/// Holds the platforms attached directly at this segment and its children in
/// insertion order, keyed by the case-folded segment so that no two children
/// of one node have case-insensitively equal segments.
///
/// A `Node` is never mutated after construction; see
/// [`NodeBuilder`](crate::tree::NodeBuilder) for the build side.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// This node's own path component; empty for the root.
    segment: SmolStr,
    /// Platforms attached at exactly this segment, first-seen casing.
    platforms: Vec<SmolStr>,
    /// Children in insertion order, keyed by folded segment.
    children: IndexMap<SmolStr, Node>,
}

impl Node {
    pub(crate) fn new(
        segment: SmolStr,
        platforms: Vec<SmolStr>,
        children: IndexMap<SmolStr, Node>,
    ) -> Self {
        Self { segment, platforms, children }
    }

    /// An empty root, the initial state of a fresh index.
    pub fn empty_root() -> Self {
        Self::default()
    }

    /// This node's own path component (empty for the root).
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Platforms attached directly at this segment, first-inserted casing.
    pub fn platforms(&self) -> &[SmolStr] {
        &self.platforms
    }

    /// The child matching `segment` case-insensitively, if any.
    pub fn child(&self, segment: &str) -> Option<&Node> {
        self.children.get(&fold(segment))
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Resolve `path` and collect every platform inherited along it.
    ///
    /// Returns `None` when some segment of the path has no matching node
    /// chain; returns `Some(vec![])` when the path resolves but no platform
    /// is attached anywhere along it. The two outcomes are never conflated.
    ///
    /// The result is deduplicated case-insensitively across the whole path,
    /// preserving first-seen casing.
    pub fn find(&self, path: &str) -> Option<Vec<SmolStr>> {
        let segments = split_segments(path);
        let mut collected = Vec::new();

        if !self.collect(&segments, 0, &mut collected) {
            return None;
        }

        let mut seen = FxHashSet::default();
        collected.retain(|p| seen.insert(fold(p)));
        Some(collected)
    }

    /// Walk the segment chain, accumulating platforms top-down.
    ///
    /// Every ancestor's platforms apply to all of its descendants, so the
    /// current node contributes before the path is fully consumed.
    fn collect(&self, segments: &[&str], position: usize, collected: &mut Vec<SmolStr>) -> bool {
        collected.extend_from_slice(&self.platforms);

        let Some(segment) = segments.get(position) else {
            // Path fully consumed at this node
            return true;
        };

        match self.children.get(&fold(segment)) {
            Some(child) => child.collect(segments, position + 1, collected),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeBuilder;

    fn sample() -> Node {
        let root = NodeBuilder::root();
        let ru = root.get_or_create_child("ru");
        ru.add_platform("Google");
        let msk = ru.get_or_create_child("msk");
        msk.add_platform("Yandex");
        ru.get_or_create_child("spb");
        root.freeze()
    }

    #[test]
    fn test_find_inherits_down_the_path() {
        let tree = sample();
        let platforms = tree.find("/ru/msk").unwrap();
        assert_eq!(platforms, ["Google", "Yandex"]);
    }

    #[test]
    fn test_find_excludes_descendants_from_ancestors() {
        let tree = sample();
        assert_eq!(tree.find("/ru").unwrap(), ["Google"]);
    }

    #[test]
    fn test_find_resolved_but_empty_is_some() {
        let tree = sample();
        assert_eq!(tree.find("/"), Some(vec![]));
    }

    #[test]
    fn test_find_unresolved_is_none() {
        let tree = sample();
        assert_eq!(tree.find("/ru/ekb"), None);
        assert_eq!(tree.find("/ru/msk/center"), None);
    }

    #[test]
    fn test_find_matches_segments_case_insensitively() {
        let tree = sample();
        assert_eq!(tree.find("/RU/MSK"), tree.find("/ru/msk"));
    }

    #[test]
    fn test_find_tolerates_slash_noise() {
        let tree = sample();
        assert_eq!(tree.find("//ru//msk/"), tree.find("/ru/msk"));
    }

    #[test]
    fn test_find_dedups_across_the_whole_path() {
        let root = NodeBuilder::root();
        let ru = root.get_or_create_child("ru");
        ru.add_platform("Google");
        ru.get_or_create_child("spb").add_platform("GOOGLE");
        let tree = root.freeze();

        // Two insertions, one entry, first-seen casing wins
        assert_eq!(tree.find("/ru/spb").unwrap(), ["Google"]);
    }
}
