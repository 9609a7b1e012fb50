//! # adplat-base
//!
//! Core library for hierarchical advertising-platform location indexing.
//!
//! A platform registered at a location (e.g. `/ru/msk`) applies to that
//! location and to every location nested beneath it. The whole dataset is
//! rebuilt from a flat text description and swapped in atomically; lookups
//! run lock-free against the published tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! index     → published Index (atomic publish, search, reload)
//!   ↓
//! ingest    → line parser, parallel ingestion, upload splitting
//!   ↓
//! tree      → frozen Node, NodeBuilder, matching algorithm
//!   ↓
//! base      → primitives (case folding, path segmentation)
//! ```

/// Foundation helpers: case folding, path segmentation
pub mod base;

/// Error types
pub mod error;

/// Published index: atomic publish, search, reload
pub mod index;

/// Ingestion: line parser, parallel population of a tree under construction
pub mod ingest;

/// Tree: frozen read-side nodes, build-side nodes, segment matching
pub mod tree;

// Re-export the public surface
pub use error::LocatorError;
pub use index::{Index, Lookup};
pub use ingest::{ReloadStats, split_upload};
pub use tree::{Node, NodeBuilder};
