use std::sync::LazyLock;

use regex::Regex;

static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank line pattern"));

/// Join line fragments and normalize the result.
///
/// Fragments are joined with single newlines, then passed through
/// [`normalize_text`].
pub fn normalize_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = fragments
        .into_iter()
        .map(|fragment| fragment.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    normalize_text(&joined)
}

/// Normalize whitespace while keeping line structure.
///
/// Each line has its whitespace runs collapsed to one space and is trimmed,
/// three or more newlines in a row become exactly two, and the whole string
/// is trimmed. Applying it twice gives the same result as applying it once.
pub fn normalize_text(text: &str) -> String {
    let lines = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n");

    BLANK_LINE_RUNS.replace_all(&lines, "\n\n").trim().to_string()
}
