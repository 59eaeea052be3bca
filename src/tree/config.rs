//! Configuration for the tree walker

/// Configuration for tree walking behavior.
///
/// Replaces ambient argument state: the CLI builds one of these and hands
/// it to the walker.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include entries whose name starts with '.'
    pub show_hidden: bool,
    /// Maximum recursion depth; `None` means unlimited.
    ///
    /// A directory sitting at the limit keeps its own name but its
    /// children are replaced by a single depth-limit marker, so
    /// `max_depth = 0` collapses the root's listing to one marker.
    pub max_depth: Option<usize>,
}
