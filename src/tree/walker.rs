//! TreeWalker - builds the directory tree in memory
//!
//! The walk runs once per invocation; every output format consumes the
//! tree it produces.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, TreeVizError};

use super::config::WalkerConfig;
use super::node::TreeNode;

/// Walks a directory and builds the full tree in memory.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        self.walk_dir(root, 0)
    }

    fn walk_dir(&self, path: &Path, depth: usize) -> Result<TreeNode> {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return Ok(TreeNode::Dir {
                name,
                children: vec![TreeNode::DepthLimit],
            });
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            // A directory we may not list collapses to a single marker
            // child; the rest of the walk is unaffected.
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                return Ok(TreeNode::Dir {
                    name,
                    children: vec![TreeNode::AccessDenied],
                });
            }
            Err(e) => {
                return Err(TreeVizError::ReadDir {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let mut listed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TreeVizError::ReadDir {
                path: path.to_path_buf(),
                source: e,
            })?;
            let entry_name = entry.file_name().to_string_lossy().into_owned();
            if !self.config.show_hidden && entry_name.starts_with('.') {
                continue;
            }
            listed.push((entry_name, entry));
        }
        // Byte-wise ascending, so repeated runs produce identical output
        listed.sort_by(|a, b| a.0.cmp(&b.0));

        let mut children = Vec::with_capacity(listed.len());
        for (entry_name, entry) in listed {
            // file_type() does not follow symlinks: a symlink to a
            // directory is recorded as a plain file and never descended
            // into.
            let file_type = entry.file_type().map_err(|e| TreeVizError::ReadDir {
                path: entry.path(),
                source: e,
            })?;
            if file_type.is_dir() {
                children.push(self.walk_dir(&entry.path(), depth + 1)?);
            } else {
                children.push(TreeNode::File { name: entry_name });
            }
        }

        Ok(TreeNode::Dir { name, children })
    }
}
