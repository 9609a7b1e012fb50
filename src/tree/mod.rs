//! The path-segment tree.
//!
//! Two node types realize the build/read split:
//! - [`NodeBuilder`] - the tree under construction during a reload; per-node
//!   locks make concurrent population safe.
//! - [`Node`] - the frozen tree readers traverse; immutable after
//!   [`NodeBuilder::freeze`], so lookups take no locks at all.

mod builder;
mod node;

pub use builder::NodeBuilder;
pub use node::Node;
