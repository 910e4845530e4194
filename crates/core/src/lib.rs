pub mod assemble;
pub mod collect;
pub mod dom_tree;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod prune;
pub mod sightline;
pub mod source;
pub mod tokenize;
pub mod visibility;

pub use assemble::{
    AssembleConfig, AssembleConfigBuilder, Section, SightlineConfig, SightlineConfigBuilder, assemble_document,
    section_header,
};
pub use collect::collect_fragments;
#[doc(hidden)]
pub use dom_tree::{DomNode, DomTree, ElementData, NodeData, NodeId};
pub use error::{Result, SightlineError};
pub use extract::{ExtractedText, extract_content, extract_visible_text};
pub use normalize::{normalize_fragments, normalize_text};
pub use prune::{PruneStats, prune};
pub use sightline::{Diagnostic, Extraction, RunSummary, Sightline};
pub use source::{SourceFile, SourceKind, SourceUnit, discover_units, read_source, select_files};
pub use tokenize::{Tokens, tokenize};
pub use visibility::{EXCLUDED_TAGS, is_excluded_tag, is_hidden};
