//! Terminal tree rendering
//!
//! `TreeFormatter` draws a complete `TreeNode` either into a plain string
//! or to stdout with colors.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;

/// Formatter for indented tree output.
///
/// The root prints its simple name with no connector; every other node
/// gets exactly one line. Sentinel leaves print their label one level
/// under the owning directory, with no branch glyph.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        self.format_node(node, &mut output, "", true, true);
        output
    }

    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.print_node(node, &mut stdout, "", true, true)
    }

    fn format_node(
        &self,
        node: &TreeNode,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) {
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            TreeNode::File { name } => {
                output.push_str(prefix);
                output.push_str(connector);
                output.push_str(name);
                output.push('\n');
            }
            TreeNode::Dir { name, children } => {
                if is_root {
                    output.push_str(name);
                    output.push('\n');
                } else {
                    output.push_str(prefix);
                    output.push_str(connector);
                    output.push_str(name);
                    output.push('\n');
                }

                let new_prefix = if is_root {
                    String::new()
                } else if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };

                for (i, child) in children.iter().enumerate() {
                    if child.is_sentinel() {
                        // Inline notice: one level under this directory,
                        // no glyph
                        output.push_str(prefix);
                        output.push_str("    ");
                        output.push_str(child.name());
                        output.push('\n');
                    } else {
                        let child_is_last = i == children.len() - 1;
                        self.format_node(child, output, &new_prefix, child_is_last, false);
                    }
                }
            }
            TreeNode::DepthLimit | TreeNode::AccessDenied => {
                output.push_str(prefix);
                output.push_str("    ");
                output.push_str(node.name());
                output.push('\n');
            }
        }
    }

    fn print_node(
        &self,
        node: &TreeNode,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            TreeNode::File { name } => {
                write!(stdout, "{}{}", prefix, connector)?;
                writeln!(stdout, "{}", name)?;
            }
            TreeNode::Dir { name, children } => {
                if is_root {
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                    writeln!(stdout, "{}", name)?;
                    stdout.reset()?;
                } else {
                    write!(stdout, "{}{}", prefix, connector)?;
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                    writeln!(stdout, "{}", name)?;
                    stdout.reset()?;
                }

                let new_prefix = if is_root {
                    String::new()
                } else if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };

                for (i, child) in children.iter().enumerate() {
                    if child.is_sentinel() {
                        write!(stdout, "{}    ", prefix)?;
                        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                        writeln!(stdout, "{}", child.name())?;
                        stdout.reset()?;
                    } else {
                        let child_is_last = i == children.len() - 1;
                        self.print_node(child, stdout, &new_prefix, child_is_last, false)?;
                    }
                }
            }
            TreeNode::DepthLimit | TreeNode::AccessDenied => {
                write!(stdout, "{}    ", prefix)?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                writeln!(stdout, "{}", node.name())?;
                stdout.reset()?;
            }
        }
        Ok(())
    }
}
