//! Per-element visibility rules.
//!
//! [`is_hidden`] looks only at an element's own `hidden`, `aria-hidden`,
//! `class` and `style` attributes. Nothing here resolves a cascade: a text
//! node's visibility comes from walking its ancestors, see
//! [`collect`](crate::collect).

use crate::dom_tree::{DomNode, ElementData};

/// Tags whose whole subtree is never rendered as text.
pub const EXCLUDED_TAGS: [&str; 7] = ["script", "style", "noscript", "template", "svg", "canvas", "head"];

/// Class tokens used by CSS frameworks for screen-reader-only content.
const HIDDEN_CLASSES: [&str; 3] = ["sr-only", "visually-hidden", "hidden"];

/// Inline declarations that hide an element. Matched as raw substrings of the
/// lower-cased `style` value, so `display: none` (with a space) is missed and
/// `display:none-ish` is caught.
const HIDDEN_STYLES: [&str; 2] = ["display:none", "visibility:hidden"];

/// Checks whether a tag belongs to [`EXCLUDED_TAGS`].
pub fn is_excluded_tag(tag_name: &str) -> bool {
    EXCLUDED_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Classifies a single element as hidden by its own attributes.
pub fn is_hidden(element: &ElementData) -> bool {
    if element.has_attr("hidden") {
        return true;
    }

    if element
        .attr("aria-hidden")
        .is_some_and(|aria| aria.trim().eq_ignore_ascii_case("true"))
    {
        return true;
    }

    if let Some(class) = element.attr("class")
        && class
            .split_whitespace()
            .any(|name| HIDDEN_CLASSES.iter().any(|hidden| name.eq_ignore_ascii_case(hidden)))
    {
        return true;
    }

    if let Some(style) = element.attr("style") {
        let style = style.to_lowercase();
        return HIDDEN_STYLES.iter().any(|declaration| style.contains(declaration));
    }

    false
}

/// [`is_hidden`] for any tree node; non-elements are never hidden themselves.
pub fn is_hidden_node(node: &DomNode) -> bool {
    node.as_element().is_some_and(is_hidden)
}
