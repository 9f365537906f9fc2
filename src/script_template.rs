//! Template parsing and classification.

/// Separator between template statements in the raw settings value.
pub const DEFAULT_SEPARATOR: &str = "\u{1}";

/// Placeholder replaced by the bare media path.
pub const MOVIE_FILENAME_TOKEN: &str = "<moviefilename>";

/// Placeholder replaced by the full source-loading line.
pub const MOVIE_TOKEN: &str = "<movie>";

/// Placeholder replaced by the subtitle directive.
pub const SUB_TOKEN: &str = "<sub>";

/// Substring marking any movie placeholder.
const MOVIE_MARKER: &str = "<movie";

/// Substring marking any subtitle placeholder.
const SUB_MARKER: &str = "<sub";

/// A user script template split into statements and classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTemplate {
    /// Statement lines in template order
    pub lines: Vec<String>,

    /// True when the template places the source and subtitle lines itself
    pub fully_managed: bool,
}

impl ScriptTemplate {
    /// Split a raw template on the separator and classify it.
    ///
    /// Empty tokens are dropped. A template is fully managed when any
    /// line contains a movie or subtitle placeholder marker; the
    /// assembler then substitutes into the template instead of emitting
    /// the default layout.
    pub fn parse(raw: &str, separator: &str) -> Self {
        // split("") would yield per-character tokens
        let lines: Vec<String> = if separator.is_empty() {
            if raw.is_empty() {
                Vec::new()
            } else {
                vec![raw.to_string()]
            }
        } else {
            raw.split(separator)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect()
        };

        let fully_managed = lines
            .iter()
            .any(|line| line.contains(MOVIE_MARKER) || line.contains(SUB_MARKER));

        Self {
            lines,
            fully_managed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_template() {
        let template = ScriptTemplate::parse("", DEFAULT_SEPARATOR);
        assert!(template.lines.is_empty());
        assert!(!template.fully_managed);
    }

    #[test]
    fn test_split_preserves_order_and_skips_empty_tokens() {
        let raw = "\u{1}first\u{1}\u{1}second\u{1}";
        let template = ScriptTemplate::parse(raw, DEFAULT_SEPARATOR);
        assert_eq!(template.lines, vec!["first", "second"]);
    }

    #[test]
    fn test_movie_placeholder_marks_fully_managed() {
        let template = ScriptTemplate::parse("<movie>\u{1}clip", DEFAULT_SEPARATOR);
        assert!(template.fully_managed);
    }

    #[test]
    fn test_moviefilename_placeholder_marks_fully_managed() {
        // "<moviefilename>" contains the movie marker substring.
        let raw = "DirectShowSource(\"<moviefilename>\")";
        let template = ScriptTemplate::parse(raw, DEFAULT_SEPARATOR);
        assert!(template.fully_managed);
    }

    #[test]
    fn test_sub_placeholder_marks_fully_managed() {
        let template = ScriptTemplate::parse("<sub>", DEFAULT_SEPARATOR);
        assert!(template.fully_managed);
    }

    #[test]
    fn test_plain_statements_stay_default() {
        let raw = "SetMemoryMax(512)\u{1}Subtitle(\"credits\")\u{1}clip";
        let template = ScriptTemplate::parse(raw, DEFAULT_SEPARATOR);
        assert!(!template.fully_managed);
        assert_eq!(template.lines.len(), 3);
    }

    #[test]
    fn test_empty_separator_keeps_template_whole() {
        let template = ScriptTemplate::parse("clip", "");
        assert_eq!(template.lines, vec!["clip"]);
    }

    #[test]
    fn test_custom_separator() {
        let template = ScriptTemplate::parse("<movie>;clip", ";");
        assert_eq!(template.lines, vec!["<movie>", "clip"]);
        assert!(template.fully_managed);
    }
}
