//! DOT serialization and Graphviz rendering

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use petgraph::visit::EdgeRef;

use crate::error::{Result, TreeVizError};

use super::builder::{NodeShape, TreeGraph};

/// Serialize the graph as Graphviz DOT with a top-to-bottom layout.
pub fn to_dot(graph: &TreeGraph) -> String {
    let mut out = String::new();
    out.push_str("digraph directory_tree {\n");
    out.push_str("    rankdir=TB;\n");
    for ix in graph.node_indices() {
        let node = &graph[ix];
        let shape = match node.shape {
            NodeShape::Box => "box",
            NodeShape::Ellipse => "ellipse",
        };
        out.push_str(&format!(
            "    {} [label={}, shape={}];\n",
            quote(&node.id),
            quote(&node.label),
            shape
        ));
    }
    for edge in graph.edge_references() {
        out.push_str(&format!(
            "    {} -> {};\n",
            quote(&graph[edge.source()].id),
            quote(&graph[edge.target()].id)
        ));
    }
    out.push_str("}\n");
    out
}

/// Quote a DOT identifier, escaping embedded quotes and backslashes.
fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Rasterize the graph to a PNG file by piping DOT through the Graphviz
/// `dot` binary.
pub fn render_png(graph: &TreeGraph, output_path: &Path) -> Result<()> {
    let dot_source = to_dot(graph);

    let mut child = Command::new("dot")
        .arg("-Tpng")
        .arg("-o")
        .arg(output_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| TreeVizError::GraphRender(format!("failed to run 'dot': {e}")))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(dot_source.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(TreeVizError::GraphRender(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(())
}
