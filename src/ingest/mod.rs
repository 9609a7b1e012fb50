//! Ingestion: turns raw dataset lines into insertions against a tree under
//! construction.
//!
//! The line grammar is `platform : location[, location...]`, each location a
//! `/`-delimited path. Ingestion is deliberately permissive: malformed lines
//! are skipped, counted, and logged at trace level; they never fail a reload.

use rayon::prelude::*;
use tracing::trace;

use crate::base::split_segments;
use crate::tree::NodeBuilder;

/// Counts reported by a reload, for callers that want to log data quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadStats {
    /// Lines handed to ingestion, blank ones included.
    pub lines_total: usize,
    /// Lines that contributed nothing: blank, missing `:`, empty platform
    /// name, or no usable location.
    pub lines_skipped: usize,
}

/// Split a raw upload body into lines on any of `\r\n`, `\r`, or `\n`.
///
/// A `\r\n` pair produces an extra empty line, which ingestion skips anyway,
/// so callers can feed the result straight to [`crate::Index::reload`].
pub fn split_upload(raw: &str) -> Vec<&str> {
    raw.split(['\r', '\n']).collect()
}

/// Populate `root` from `lines`, in parallel across lines.
///
/// Per-line insertions are order-independent (platform sets, not lists), so
/// parallelism cannot change the resulting tree; the per-node locks in
/// [`NodeBuilder`] keep concurrent child creation safe.
pub fn ingest<S>(root: &NodeBuilder, lines: &[S]) -> ReloadStats
where
    S: AsRef<str> + Sync,
{
    let skipped = lines
        .par_iter()
        .filter(|line| !ingest_line(root, line.as_ref()))
        .count();

    ReloadStats { lines_total: lines.len(), lines_skipped: skipped }
}

/// Apply one dataset line to the tree. Returns false if the line was skipped.
fn ingest_line(root: &NodeBuilder, line: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }

    let Some((platform, locations)) = line.split_once(':') else {
        trace!(line, "skipping line without separator");
        return false;
    };

    let platform = platform.trim();
    if platform.is_empty() {
        trace!(line, "skipping line with empty platform name");
        return false;
    }

    let mut contributed = false;
    for location in locations.split(',') {
        let location = location.trim();
        if location.is_empty() {
            continue;
        }

        // Walk/create the chain; only the leaf receives the platform.
        // A bare "/" has no segments and attaches the platform at the root
        // itself, i.e. globally.
        let mut leaf = None;
        for segment in split_segments(location) {
            leaf = Some(leaf.as_deref().unwrap_or(root).get_or_create_child(segment));
        }
        leaf.as_deref().unwrap_or(root).add_platform(platform);
        contributed = true;
    }

    if !contributed {
        trace!(line, "skipping line with no usable location");
    }
    contributed
}
