//! Directory tree walking logic
//!
//! `TreeWalker` builds the whole tree in memory once; the text, JSON and
//! graph outputs all traverse that single structure.

mod config;
mod node;
mod walker;

pub use config::WalkerConfig;
pub use node::{ACCESS_DENIED_LABEL, DEPTH_LIMIT_LABEL, TreeNode};
pub use walker::TreeWalker;
