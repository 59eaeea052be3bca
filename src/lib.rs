//! Treeviz - directory snapshots as a terminal tree, a JSON document,
//! and a PNG graph

pub mod error;
pub mod graph;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Result, TreeVizError};
pub use graph::{build_graph, render_png, to_dot};
pub use output::{OutputConfig, TreeFormatter, to_json_string, write_json};
pub use tree::{TreeNode, TreeWalker, WalkerConfig};
