use crate::collect::collect_fragments;
use crate::dom_tree::DomTree;
use crate::normalize::normalize_fragments;
use crate::prune::{PruneStats, prune};

/// The result of visible-text extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Normalized visible text
    pub text: String,
    /// Number of line fragments collected before normalization
    pub fragment_count: usize,
    /// What pruning removed
    pub pruned: PruneStats,
}

/// Extract the visible text of an HTML document.
///
/// Parses leniently, prunes non-rendered and hidden subtrees, collects the
/// remaining text in document order and normalizes its whitespace.
///
/// # Example
///
/// ```rust
/// use sightline_core::extract_visible_text;
///
/// let html = r#"<div>Hello <span style="display:none">secret</span> <b>world</b></div>"#;
/// assert_eq!(extract_visible_text(html), "Hello world");
/// ```
pub fn extract_visible_text(html: &str) -> String {
    extract_content(html).text
}

/// Like [`extract_visible_text`], also reporting pruning and fragment counts.
pub fn extract_content(html: &str) -> ExtractedText {
    let mut tree = DomTree::parse(html);
    let pruned = prune(&mut tree);
    let fragments = collect_fragments(&tree);
    let text = normalize_fragments(&fragments);

    ExtractedText { text, fragment_count: fragments.len(), pruned }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_span_is_dropped() {
        let html = r#"<div>Hello <span style="display:none">secret</span> <b>world</b></div>"#;
        assert_eq!(extract_visible_text(html), "Hello world");
    }

    #[test]
    fn test_br_becomes_newline() {
        assert_eq!(extract_visible_text("<p>Line one<br>Line two</p>"), "Line one\nLine two");
    }

    #[test]
    fn test_empty_paragraphs_collapse_to_one_blank_line() {
        let html = "<p>First paragraph</p><p><br></p><p><br></p><p><br></p><p>Second paragraph</p>";
        assert_eq!(extract_visible_text(html), "First paragraph\n\nSecond paragraph");
    }

    #[test]
    fn test_childless_paragraphs_leave_no_blank_line() {
        assert_eq!(extract_visible_text("<p>A</p><p></p><p></p><p></p><p>B</p>"), "A\nB");
    }

    #[test]
    fn test_pre_keeps_line_breaks() {
        let html = "<pre>line one\nline two\n\n\n\nline three</pre>";
        assert_eq!(extract_visible_text(html), "line one\nline two\n\nline three");
    }

    #[test]
    fn test_pre_lines_collapse_inner_spaces() {
        let html = "<p>Intro</p><pre>  fn main() {\n\t    run();\n  }</pre>";
        assert_eq!(extract_visible_text(html), "Intro\nfn main() {\nrun();\n}");
    }

    #[test]
    fn test_newlines_in_paragraph_render_as_spaces() {
        assert_eq!(extract_visible_text("<p>para one\n\n\n\npara two</p>"), "para one para two");
    }

    #[test]
    fn test_breaks_inside_hidden_regions_leave_no_lines() {
        let html = r#"<p>top</p><div hidden><br><br><br>gone</div><p>bottom</p>"#;
        assert_eq!(extract_visible_text(html), "top\nbottom");
    }

    #[test]
    fn test_full_page() {
        let html = r#"
            <!DOCTYPE html>
            <html>
            <head>
                <title>Page title</title>
                <script>console.log('test');</script>
                <style>.hidden{display:none;}</style>
            </head>
            <body>
                <!-- navigation -->
                <nav><a href="/">Home</a> | <a href="/about">About</a></nav>
                <main>
                    <h1>Heading</h1>
                    <p>Some <em>visible</em> text.</p>
                    <p class="hidden">Hidden by class</p>
                    <p aria-hidden="true">Hidden by aria</p>
                    <noscript>Enable JavaScript</noscript>
                    <svg><text>chart</text></svg>
                </main>
            </body>
            </html>
        "#;

        let extracted = extract_content(html);

        assert_eq!(extracted.text, "Home | About\nHeading\nSome visible text.");
        assert_eq!(extracted.fragment_count, 3);
        assert_eq!(extracted.pruned.hidden, 2);
        assert_eq!(extracted.pruned.comments, 1);
    }

    #[test]
    fn test_empty_and_markup_only_input() {
        assert_eq!(extract_visible_text(""), "");
        assert_eq!(extract_visible_text("<div><span></span></div>"), "");
        assert_eq!(extract_visible_text("<script>only()</script>"), "");
    }
}
