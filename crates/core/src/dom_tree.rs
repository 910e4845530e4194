//! Index-addressed document tree.
//!
//! [`DomTree`] is an arena of [`DomNode`]s built from a lenient
//! `scraper`/html5ever parse. Children are owned id lists; the parent link is
//! a plain id that is only ever used to walk upwards (ancestor visibility
//! checks). Removing a node detaches it from its parent and it is never
//! re-attached, so everything below it becomes unreachable from the root.

use scraper::{Html, Node};
use tracing::debug;

/// Index of a node inside a [`DomTree`].
pub type NodeId = usize;

/// Payload of a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The document root.
    Document,
    /// An element with its tag name and attributes.
    Element(ElementData),
    /// Character data from the source.
    Text(String),
    /// An HTML comment.
    Comment(String),
    /// Synthetic newline text standing in for a removed `<br>`.
    Break,
}

/// Tag name and attributes of an element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag_name: String,
    /// Attributes in parser order
    pub attributes: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(tag_name: &str) -> Self {
        Self { tag_name: tag_name.to_ascii_lowercase(), attributes: Vec::new() }
    }

    /// Adds an attribute, builder style.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Checks whether an attribute is present, whatever its value.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|(key, _)| key == name)
    }
}

/// A node in the DOM tree
#[derive(Debug, Clone)]
pub struct DomNode {
    /// What the node holds
    pub data: NodeData,
    /// Parent node ID (if any)
    pub parent_id: Option<NodeId>,
    /// Child node IDs
    pub child_ids: Vec<NodeId>,
}

impl DomNode {
    /// Element payload, if this node is an element.
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Tag name, if this node is an element.
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|element| element.tag_name.as_str())
    }
}

/// A DOM tree structure that tracks parent-child relationships
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes ever created, attached or not
    nodes: Vec<DomNode>,
}

impl DomTree {
    /// Id of the document root.
    pub const ROOT: NodeId = 0;

    /// Create a tree holding only the document root
    pub fn new() -> Self {
        Self { nodes: vec![DomNode { data: NodeData::Document, parent_id: None, child_ids: Vec::new() }] }
    }

    /// Parses an HTML document.
    ///
    /// Never fails: html5ever repairs malformed markup and the recoveries it
    /// records are only logged.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            debug!(recovered = document.errors.len(), "parser recovered from malformed markup");
        }
        let tree = Self::from_html(&document);
        debug!(nodes = tree.len(), "built document tree");
        tree
    }

    /// Copies a parsed `scraper` document into an arena.
    ///
    /// Doctypes and processing instructions are dropped; comments are kept so
    /// that pruning can remove them explicitly.
    pub fn from_html(document: &Html) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<_> = document
            .tree
            .root()
            .children()
            .rev()
            .map(|child| (child, Self::ROOT))
            .collect();

        while let Some((node, parent_id)) = stack.pop() {
            let data = match node.value() {
                Node::Element(element) => NodeData::Element(ElementData {
                    tag_name: element.name().to_ascii_lowercase(),
                    attributes: element
                        .attrs()
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect(),
                }),
                Node::Text(text) => NodeData::Text(text.text.to_string()),
                Node::Comment(comment) => NodeData::Comment(comment.comment.to_string()),
                _ => continue,
            };

            let node_id = tree.append(parent_id, data);
            stack.extend(node.children().rev().map(|child| (child, node_id)));
        }

        tree
    }

    /// Appends a new node as the last child of `parent_id`.
    pub fn append(&mut self, parent_id: NodeId, data: NodeData) -> NodeId {
        let node_id = self.nodes.len();
        self.nodes.push(DomNode { data, parent_id: Some(parent_id), child_ids: Vec::new() });
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.child_ids.push(node_id);
        }
        node_id
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&DomNode> {
        self.nodes.get(id)
    }

    /// Get the parent of a node
    pub fn get_parent(&self, node_id: NodeId) -> Option<&DomNode> {
        let node = self.nodes.get(node_id)?;
        let parent_id = node.parent_id?;
        self.nodes.get(parent_id)
    }

    /// Iterates over the ancestors of a node, nearest first.
    pub fn ancestors(&self, node_id: NodeId) -> Ancestors<'_> {
        Ancestors { tree: self, next: self.nodes.get(node_id).and_then(|node| node.parent_id) }
    }

    /// Node ids reachable from `node_id`, in document order, `node_id` included.
    pub fn descendants(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut stack = vec![node_id];

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            ids.push(id);
            stack.extend(node.child_ids.iter().rev());
        }

        ids
    }

    /// Outermost nodes under the root matching `predicate`.
    ///
    /// The walk does not descend into a match, so a matching subtree is
    /// reported once however many matches it contains.
    pub fn find_subtrees<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&DomNode) -> bool,
    {
        let mut found = Vec::new();
        let mut stack = vec![Self::ROOT];

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if id != Self::ROOT && predicate(node) {
                found.push(id);
                continue;
            }
            stack.extend(node.child_ids.iter().rev());
        }

        found
    }

    /// Detaches a node (and with it its subtree) from its parent.
    pub fn detach(&mut self, node_id: NodeId) {
        let Some(parent_id) = self.nodes.get_mut(node_id).and_then(|node| node.parent_id.take()) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.child_ids.retain(|&child| child != node_id);
        }
    }

    /// Puts a new node where `node_id` sits among its siblings and detaches
    /// the old one. Returns the new node's id, or `None` for a detached node.
    pub fn replace(&mut self, node_id: NodeId, data: NodeData) -> Option<NodeId> {
        let parent_id = self.nodes.get(node_id)?.parent_id?;
        let position = self
            .nodes
            .get(parent_id)?
            .child_ids
            .iter()
            .position(|&child| child == node_id)?;

        let new_id = self.nodes.len();
        self.nodes.push(DomNode { data, parent_id: Some(parent_id), child_ids: Vec::new() });
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.child_ids[position] = new_id;
        }
        if let Some(old) = self.nodes.get_mut(node_id) {
            old.parent_id = None;
        }

        Some(new_id)
    }

    /// Checks whether a node is still reachable from the root.
    #[cfg(test)]
    pub(crate) fn is_attached(&self, node_id: NodeId) -> bool {
        node_id == Self::ROOT || self.ancestors(node_id).last().is_some_and(|root| root.data == NodeData::Document)
    }

    /// Get the total number of nodes, detached ones included
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's ancestors. See [`DomTree::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a DomNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get_node(self.next?)?;
        self.next = node.parent_id;
        Some(node)
    }
}
