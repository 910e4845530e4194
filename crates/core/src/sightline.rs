//! Main extraction API.
//!
//! [`Sightline`] drives a whole run: it discovers the numbered folders of a
//! content root, extracts every selected file, and assembles the sections
//! into one document. The run is a pure function of the files on disk and
//! the [`SightlineConfig`]; nothing is written and nothing global is touched.
//! Problems with single files come back as [`Diagnostic`]s next to the
//! document, only a missing root is an error.
//!
//! # Example
//!
//! ```rust,no_run
//! use sightline_core::{Sightline, SightlineConfig};
//!
//! let config = SightlineConfig::builder().headers(true).build();
//! let extraction = Sightline::with_config(config).extract_root("content")?;
//!
//! for warning in &extraction.diagnostics {
//!     eprintln!("warning: {warning}");
//! }
//! std::fs::write("visible.txt", &extraction.document)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::Result;
use crate::assemble::{Section, SightlineConfig, assemble_document};
use crate::extract::extract_visible_text;
use crate::source::{SourceFile, SourceKind, SourceUnit, discover_units, read_source};

/// A non-fatal problem met during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A file or folder could not be read; it contributed nothing.
    UnreadableSource { path: PathBuf, reason: String },
    /// The root holds no numbered folders.
    NoUnits { root: PathBuf },
    /// Numbered folders exist but none produced any text.
    EmptyResult { units: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreadableSource { path, reason } => write!(f, "failed to read {}: {}", path.display(), reason),
            Self::NoUnits { root } => write!(f, "no numbered folders found under root: {}", root.display()),
            Self::EmptyResult { units } => write!(f, "no visible text found in {} numbered folders", units),
        }
    }
}

/// The result of a run.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    /// Assembled output document, newline-terminated.
    pub document: String,

    /// Non-empty sections in folder order.
    pub sections: Vec<Section>,

    /// Number of numbered folders looked at.
    pub units: usize,

    /// Warnings collected along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Short machine-readable account of the run.
    pub fn summary(&self) -> RunSummary {
        RunSummary { sections: self.sections.len(), units: self.units, warnings: self.diagnostics.len() }
    }

    /// Summary counts plus the diagnostics, as JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        let summary = self.summary();
        Ok(json!({
            "sections": summary.sections,
            "units": summary.units,
            "warnings": summary.warnings,
            "diagnostics": serde_json::to_value(&self.diagnostics)?,
        }))
    }
}

/// Counts describing a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub sections: usize,
    pub units: usize,
    pub warnings: usize,
}

/// Main entry point for folder extraction.
///
/// # Example
///
/// ```rust
/// use sightline_core::Sightline;
///
/// let reader = Sightline::new();
/// let text = reader.extract_html("<p>Visible<span hidden> hidden</span></p>");
/// assert_eq!(text, "Visible");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sightline {
    config: SightlineConfig,
}

impl Sightline {
    /// Creates a new Sightline instance with default settings.
    pub fn new() -> Self {
        Self { config: SightlineConfig::default() }
    }

    /// Creates a new Sightline instance with a custom configuration.
    pub fn with_config(config: SightlineConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SightlineConfig {
        &self.config
    }

    /// Extracts the visible text of one HTML document.
    pub fn extract_html(&self, html: &str) -> String {
        extract_visible_text(html)
    }

    /// Discovers, extracts and assembles every numbered folder under `root`.
    ///
    /// # Errors
    ///
    /// Fails only when `root` is missing, not a directory, or cannot be
    /// listed. Unreadable files and folders become diagnostics.
    pub fn extract_root(&self, root: impl AsRef<Path>) -> Result<Extraction> {
        let root = root.as_ref();
        let units = discover_units(root)?;

        let mut extraction = self.extract_units(&units);
        if units.is_empty() {
            report(&mut extraction.diagnostics, Diagnostic::NoUnits { root: root.to_path_buf() });
        }

        Ok(extraction)
    }

    /// Extracts and assembles already discovered units, in the given order.
    pub fn extract_units(&self, units: &[SourceUnit]) -> Extraction {
        let mut diagnostics = Vec::new();
        let mut sections = Vec::new();

        for unit in units {
            let files = match unit.files() {
                Ok(files) => files,
                Err(e) => {
                    report(&mut diagnostics, Diagnostic::UnreadableSource {
                        path: unit.path.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            debug!(unit = %unit.id, files = files.len(), "extracting unit");

            if let Some(section) = self.extract_unit(unit, &files, &mut diagnostics) {
                sections.push(section);
            }
        }

        if !units.is_empty() && sections.is_empty() {
            report(&mut diagnostics, Diagnostic::EmptyResult { units: units.len() });
        }

        let document = assemble_document(&sections, &self.config);
        Extraction { document, sections, units: units.len(), diagnostics }
    }

    /// Builds one unit's section from its files; `None` if it has no text.
    pub fn extract_unit(
        &self, unit: &SourceUnit, files: &[SourceFile], diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<Section> {
        let bodies: Vec<String> = files
            .iter()
            .filter_map(|file| match self.extract_file(file) {
                Ok(text) => Some(text),
                Err(e) => {
                    report(diagnostics, Diagnostic::UnreadableSource { path: file.path.clone(), reason: e.to_string() });
                    None
                }
            })
            .collect();

        Section::from_bodies(&unit.id, &bodies, &self.config)
    }

    /// Reads one file and returns its text: extracted for markup, trimmed
    /// as-is otherwise.
    pub fn extract_file(&self, file: &SourceFile) -> Result<String> {
        let content = read_source(&file.path)?;
        let text = match file.kind {
            SourceKind::Markup => extract_visible_text(&content),
            SourceKind::PlainText => content.trim().to_string(),
        };
        debug!(path = %file.path.display(), chars = text.chars().count(), "extracted file");
        Ok(text)
    }
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}
