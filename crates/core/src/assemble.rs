//! Section rendering and document assembly.
//!
//! Each unit's extracted bodies become one section; non-empty sections are
//! joined with a blank line into the output document.

use serde::Serialize;

use crate::tokenize::tokenize;

/// Configuration for section assembly.
///
/// # Example
///
/// ```rust
/// use sightline_core::AssembleConfig;
///
/// let config = AssembleConfig::builder()
///     .words(true)
///     .one_per_line(true)
///     .headers(true)
///     .build();
/// assert!(config.words);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembleConfig {
    /// Write tokenized words instead of text (default: false).
    pub words: bool,

    /// With `words`, one word per line instead of space-separated (default: false).
    pub one_per_line: bool,

    /// Prefix each section with a `----- NNN -----` marker line (default: false).
    pub headers: bool,
}

impl AssembleConfig {
    /// Creates a new builder for AssembleConfig.
    pub fn builder() -> AssembleConfigBuilder {
        AssembleConfigBuilder::new()
    }
}

/// Builder for AssembleConfig.
pub struct AssembleConfigBuilder {
    config: AssembleConfig,
}

impl AssembleConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AssembleConfig::default() }
    }

    /// Sets word mode.
    pub fn words(mut self, value: bool) -> Self {
        self.config.words = value;
        self
    }

    /// Sets one-word-per-line rendering for word mode.
    pub fn one_per_line(mut self, value: bool) -> Self {
        self.config.one_per_line = value;
        self
    }

    /// Sets section headers.
    pub fn headers(mut self, value: bool) -> Self {
        self.config.headers = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AssembleConfig {
        self.config
    }
}

impl Default for AssembleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for AssembleConfig.
pub type SightlineConfig = AssembleConfig;

/// Type alias for AssembleConfigBuilder.
pub type SightlineConfigBuilder = AssembleConfigBuilder;

/// One rendered unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Folder name the section came from
    pub id: String,
    /// Rendered body, without header
    pub body: String,
}

impl Section {
    /// Builds a section from a unit's extracted bodies.
    ///
    /// Returns `None` when the final body is empty, including word mode
    /// bodies without a single token.
    pub fn from_bodies<I, S>(id: &str, bodies: I, config: &AssembleConfig) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = join_bodies(bodies);
        let body = if config.words { render_words(&text, config.one_per_line) } else { text };

        if body.is_empty() { None } else { Some(Self { id: id.to_string(), body }) }
    }

    /// Renders the section, with its header line when `headers` is set.
    pub fn render(&self, headers: bool) -> String {
        if headers { format!("{}\n{}", section_header(&self.id), self.body) } else { self.body.clone() }
    }
}

/// Joins a unit's bodies with blank lines, skipping empty ones, and trims.
pub fn join_bodies<I, S>(bodies: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    bodies
        .into_iter()
        .map(|body| body.as_ref().trim().to_string())
        .filter(|body| !body.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Replaces text with its tokens, space-joined or one per line.
pub fn render_words(text: &str, one_per_line: bool) -> String {
    let separator = if one_per_line { "\n" } else { " " };
    tokenize(text).collect::<Vec<_>>().join(separator)
}

/// Marker line for a section: the folder name left-padded with zeros to 3.
pub fn section_header(id: &str) -> String {
    format!("----- {id:0>3} -----")
}

/// Joins rendered sections with a blank line; the result ends with exactly
/// one newline.
pub fn assemble_document(sections: &[Section], config: &AssembleConfig) -> String {
    let joined = sections
        .iter()
        .map(|section| section.render(config.headers))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n", joined.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, body: &str) -> Section {
        Section { id: id.to_string(), body: body.to_string() }
    }

    #[test]
    fn test_config_builder() {
        let config = AssembleConfig::builder().words(true).headers(true).build();
        assert!(config.words);
        assert!(config.headers);
        assert!(!config.one_per_line);
        assert_eq!(AssembleConfig::default(), AssembleConfigBuilder::default().build());
    }

    #[test]
    fn test_section_header_padding() {
        assert_eq!(section_header("7"), "----- 007 -----");
        assert_eq!(section_header("42"), "----- 042 -----");
        assert_eq!(section_header("1234"), "----- 1234 -----");
        assert_eq!(section_header("007"), "----- 007 -----");
    }

    #[test]
    fn test_from_bodies_joins_with_blank_line() {
        let config = AssembleConfig::default();
        let built = Section::from_bodies("1", ["  first  ", "", "second\n"], &config).unwrap();
        assert_eq!(built.body, "first\n\nsecond");
    }

    #[test]
    fn test_from_bodies_skips_empty_units() {
        let config = AssembleConfig::default();
        assert!(Section::from_bodies("1", Vec::<String>::new(), &config).is_none());
        assert!(Section::from_bodies("1", ["", "  \n"], &config).is_none());

        let words = AssembleConfig::builder().words(true).build();
        assert!(Section::from_bodies("1", ["!!! ... ---"], &words).is_none());
    }

    #[test]
    fn test_word_modes() {
        let spaced = AssembleConfig::builder().words(true).build();
        let lines = AssembleConfig::builder().words(true).one_per_line(true).build();
        let text = "Hello, world!\n\nIt's over-due.";

        assert_eq!(Section::from_bodies("1", [text], &spaced).unwrap().body, "Hello world It's over-due");
        assert_eq!(Section::from_bodies("1", [text], &lines).unwrap().body, "Hello\nworld\nIt's\nover-due");
    }

    #[test]
    fn test_one_per_line_without_words_is_ignored() {
        let config = AssembleConfig::builder().one_per_line(true).build();
        assert_eq!(Section::from_bodies("1", ["a b"], &config).unwrap().body, "a b");
    }

    #[test]
    fn test_assemble_document() {
        let sections = [section("1", "alpha"), section("12", "beta\ngamma")];

        let plain = assemble_document(&sections, &AssembleConfig::default());
        assert_eq!(plain, "alpha\n\nbeta\ngamma\n");

        let headed = assemble_document(&sections, &AssembleConfig::builder().headers(true).build());
        assert_eq!(headed, "----- 001 -----\nalpha\n\n----- 012 -----\nbeta\ngamma\n");
    }

    #[test]
    fn test_assemble_empty_document() {
        assert_eq!(assemble_document(&[], &AssembleConfig::default()), "\n");
    }
}
