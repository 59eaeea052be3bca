//! Graph description and image rendering
//!
//! The tree is projected into a directed graph of labeled, shaped nodes
//! (`builder`), serialized to Graphviz DOT, and rasterized to PNG by the
//! external `dot` binary (`render`).

mod builder;
mod render;

pub use builder::{EntryNode, NodeShape, TreeGraph, build_graph};
pub use render::{render_png, to_dot};
