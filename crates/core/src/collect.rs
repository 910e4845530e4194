//! Document-order text collection.
//!
//! The collector walks a (normally pruned) [`DomTree`] and turns visible text
//! into line fragments. Every text node is re-checked against its direct
//! parent's tag and against the visibility of each ancestor, so hidden text
//! stays out even if it survived pruning.

use crate::dom_tree::{DomTree, NodeData, NodeId};
use crate::visibility::{is_excluded_tag, is_hidden_node};

/// Elements whose edges end the current line.
const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "caption",
    "dd",
    "details",
    "dialog",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "html",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "td",
    "th",
    "tr",
    "ul",
];

/// Elements whose text keeps its source line breaks.
const PREFORMATTED_ELEMENTS: &[&str] = &["pre", "textarea"];

/// Checks whether an element starts its own line.
pub fn is_block_element(tag_name: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag_name)
}

/// Checks whether a text (or break) node would be painted.
///
/// False when the direct parent is an excluded tag or any ancestor is hidden.
pub fn is_visible_text(tree: &DomTree, node_id: NodeId) -> bool {
    if tree
        .get_parent(node_id)
        .and_then(|parent| parent.tag_name())
        .is_some_and(is_excluded_tag)
    {
        return false;
    }

    !tree.ancestors(node_id).any(is_hidden_node)
}

/// Checks whether a node sits inside `pre` or `textarea`.
pub fn is_preformatted(tree: &DomTree, node_id: NodeId) -> bool {
    tree.ancestors(node_id)
        .any(|node| node.tag_name().is_some_and(|tag| PREFORMATTED_ELEMENTS.contains(&tag)))
}

/// Collect visible text as trimmed line fragments, in document order.
///
/// Inline text accumulates into one fragment; a fragment ends at the edge of
/// a block element or at a line break. Source whitespace inside a fragment
/// collapses to single spaces, except that newlines inside `pre` and
/// `textarea` end lines like a line break does. Fragments ended by a block
/// edge are dropped when empty, fragments ended by a line break are always
/// kept.
pub fn collect_fragments(tree: &DomTree) -> Vec<String> {
    enum Visit {
        Enter(NodeId),
        Leave,
    }

    let mut fragments = Fragments::default();
    let mut stack = vec![Visit::Enter(DomTree::ROOT)];

    while let Some(visit) = stack.pop() {
        let node_id = match visit {
            Visit::Enter(node_id) => node_id,
            Visit::Leave => {
                fragments.end_line(false);
                continue;
            }
        };
        let Some(node) = tree.get_node(node_id) else {
            continue;
        };

        match &node.data {
            NodeData::Text(text) => {
                if !is_visible_text(tree, node_id) {
                    continue;
                }
                if is_preformatted(tree, node_id) {
                    fragments.push_preformatted(text);
                } else {
                    fragments.push_text(text);
                }
            }
            NodeData::Break => {
                if is_visible_text(tree, node_id) {
                    fragments.end_line(true);
                }
            }
            NodeData::Element(element) => {
                if is_block_element(&element.tag_name) {
                    fragments.end_line(false);
                    stack.push(Visit::Leave);
                }
                stack.extend(node.child_ids.iter().rev().map(|&child| Visit::Enter(child)));
            }
            NodeData::Document => {
                stack.extend(node.child_ids.iter().rev().map(|&child| Visit::Enter(child)));
            }
            NodeData::Comment(_) => {}
        }
    }

    fragments.finish()
}

#[derive(Debug, Default)]
struct Fragments {
    line: String,
    done: Vec<String>,
}

impl Fragments {
    fn push_text(&mut self, text: &str) {
        self.line.push_str(text);
    }

    fn push_preformatted(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.push_text(first);
        }
        for line in lines {
            self.end_line(true);
            self.push_text(line);
        }
    }

    fn end_line(&mut self, keep_empty: bool) {
        let fragment = self.line.split_whitespace().collect::<Vec<_>>().join(" ");
        self.line.clear();
        if keep_empty || !fragment.is_empty() {
            self.done.push(fragment);
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.end_line(false);
        self.done
    }
}
