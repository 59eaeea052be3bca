//! Graph construction from a directory tree

use petgraph::graph::{DiGraph, NodeIndex};

use crate::tree::TreeNode;

/// Shape a node takes when the graph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Real filesystem entries
    Box,
    /// Sentinel leaves (depth limit, access denied)
    Ellipse,
}

/// One node of the rendered graph.
#[derive(Debug, Clone)]
pub struct EntryNode {
    /// The full chain of names from the root, so equal simple names in
    /// different branches never collide.
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
}

/// Directed graph handed to the DOT serializer: edges run parent to
/// child and carry no data.
pub type TreeGraph = DiGraph<EntryNode, ()>;

/// Project the tree into a graph. Every tree node becomes exactly one
/// graph node; the root is always present, labeled `root_label`.
pub fn build_graph(root: &TreeNode, root_label: &str) -> TreeGraph {
    let mut graph = TreeGraph::new();
    let root_ix = graph.add_node(EntryNode {
        id: root_label.to_string(),
        label: root_label.to_string(),
        shape: NodeShape::Box,
    });
    add_children(&mut graph, root, root_ix);
    graph
}

fn add_children(graph: &mut TreeGraph, node: &TreeNode, parent_ix: NodeIndex) {
    let TreeNode::Dir { children, .. } = node else {
        return;
    };
    for child in children {
        match child {
            TreeNode::Dir { name, .. } | TreeNode::File { name } => {
                let child_id = format!("{}/{}", graph[parent_ix].id, name);
                let child_ix = graph.add_node(EntryNode {
                    id: child_id,
                    label: name.clone(),
                    shape: NodeShape::Box,
                });
                graph.add_edge(parent_ix, child_ix, ());
                add_children(graph, child, child_ix);
            }
            TreeNode::DepthLimit | TreeNode::AccessDenied => {
                // Synthetic leaf hanging off the owning directory, so the
                // sentinel text shows as its own node
                let leaf_id = format!("{}_leaf", graph[parent_ix].id);
                let leaf_ix = graph.add_node(EntryNode {
                    id: leaf_id,
                    label: child.name().to_string(),
                    shape: NodeShape::Ellipse,
                });
                graph.add_edge(parent_ix, leaf_ix, ());
            }
        }
    }
}
