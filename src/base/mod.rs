//! Foundation helpers shared by matching and ingestion.
//!
//! - [`fold`] - case folding for segment and platform comparison
//! - [`split_segments`] - location-path segmentation
//!
//! This module has NO dependencies on other adplat modules.

use smol_str::SmolStr;

/// Case-fold a segment or platform name for comparison and map keys.
///
/// Matching and dedup are case-insensitive throughout; the folded form is
/// used only as a key, never returned to callers.
pub fn fold(s: &str) -> SmolStr {
    SmolStr::from(s.to_lowercase())
}

/// True if two names are equal under [`fold`].
pub fn eq_fold(a: &str, b: &str) -> bool {
    // Cheap path for the common all-ASCII case
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

/// Split a location path into its segments.
///
/// Leading, trailing, and repeated `/` are tolerated: `//ru//msk/` yields
/// `["ru", "msk"]`. A path with no segments (e.g. `"/"`) yields an empty
/// vector, which addresses the tree root.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
