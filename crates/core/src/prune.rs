use tracing::trace;

use crate::dom_tree::{DomTree, NodeData, NodeId};
use crate::visibility::{is_excluded_tag, is_hidden_node};

/// What a [`prune`] pass removed or replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Excluded-tag subtrees removed (script, style, ...)
    pub excluded: usize,
    /// Comment nodes removed
    pub comments: usize,
    /// Hidden subtrees removed
    pub hidden: usize,
    /// `br` elements turned into newline breaks
    pub line_breaks: usize,
}

/// Prune a parsed tree down to renderable content, in place.
///
/// Excluded tags and hidden elements are both removed before line breaks are
/// materialized, so a `br` inside a removed subtree never becomes a newline.
pub fn prune(tree: &mut DomTree) -> PruneStats {
    let stats = PruneStats {
        excluded: remove_excluded_tags(tree),
        comments: remove_comments(tree),
        hidden: remove_hidden_elements(tree),
        line_breaks: replace_line_breaks(tree),
    };

    trace!(
        excluded = stats.excluded,
        comments = stats.comments,
        hidden = stats.hidden,
        line_breaks = stats.line_breaks,
        "pruned document"
    );

    stats
}

/// Remove script, style, noscript, template, svg, canvas and head subtrees
fn remove_excluded_tags(tree: &mut DomTree) -> usize {
    let found = tree.find_subtrees(|node| node.tag_name().is_some_and(is_excluded_tag));
    detach_all(tree, &found)
}

/// Remove HTML comments from the document
fn remove_comments(tree: &mut DomTree) -> usize {
    let found = tree.find_subtrees(|node| matches!(node.data, NodeData::Comment(_)));
    detach_all(tree, &found)
}

/// Remove elements hidden by their own attributes, with everything inside
fn remove_hidden_elements(tree: &mut DomTree) -> usize {
    let found = tree.find_subtrees(is_hidden_node);
    detach_all(tree, &found)
}

/// Replace each remaining `br` with a newline break at the same position
fn replace_line_breaks(tree: &mut DomTree) -> usize {
    tree.find_subtrees(|node| node.tag_name() == Some("br"))
        .into_iter()
        .filter_map(|id| tree.replace(id, NodeData::Break))
        .count()
}

fn detach_all(tree: &mut DomTree, ids: &[NodeId]) -> usize {
    for &id in ids {
        tree.detach(id);
    }
    ids.len()
}
