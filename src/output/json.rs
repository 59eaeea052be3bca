//! JSON document output
//!
//! A directory serializes to an object keyed by child name in child
//! order, a file to `null`, and a sentinel to its label as a bare
//! string. A directory whose listing was cut off (depth limit or
//! permission failure) carries a single sentinel child and serializes
//! to that string in place of its object.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::tree::TreeNode;

/// Borrowed serde view of a `TreeNode`.
///
/// The document shape is name-keyed rather than field-keyed, so this is
/// written by hand instead of derived.
struct Document<'a>(&'a TreeNode);

impl Serialize for Document<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            TreeNode::Dir { children, .. } => {
                if let [only] = children.as_slice() {
                    if only.is_sentinel() {
                        return serializer.serialize_str(only.name());
                    }
                }
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for child in children {
                    map.serialize_entry(child.name(), &Document(child))?;
                }
                map.end()
            }
            TreeNode::File { .. } => serializer.serialize_unit(),
            TreeNode::DepthLimit | TreeNode::AccessDenied => {
                serializer.serialize_str(self.0.name())
            }
        }
    }
}

/// Serialize the tree with 4-space indentation.
pub fn to_json_string(node: &TreeNode) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Document(node).serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the tree document to `path` as UTF-8, 4-space indented.
pub fn write_json(node: &TreeNode, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    Document(node).serialize(&mut ser)?;
    ser.into_inner().flush()?;
    Ok(())
}
