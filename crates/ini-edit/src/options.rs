//! Parsing and rendering configuration

use serde::{Deserialize, Serialize};

/// How keys and section titles are compared during lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringComparison {
    /// Exact byte-for-byte comparison (the default).
    #[default]
    Ordinal,
    /// ASCII case-insensitive comparison.
    IgnoreCase,
}

impl StringComparison {
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::Ordinal => a == b,
            Self::IgnoreCase => a.eq_ignore_ascii_case(b),
        }
    }
}

/// Which lines count as comments.
///
/// The predicate sees the raw line and matches on its trimmed-start content,
/// so indented comments are recognized.
#[derive(Debug, Clone, Copy)]
pub enum CommentStyle {
    /// Trimmed line starts with `;` (the default).
    Semicolon,
    /// Trimmed line starts with `#`.
    Hash,
    /// Trimmed line starts with either `;` or `#`.
    SemicolonOrHash,
    /// Caller-supplied predicate over the raw line.
    Custom(fn(&str) -> bool),
}

impl CommentStyle {
    pub fn is_comment(self, line: &str) -> bool {
        match self {
            Self::Semicolon => line.trim_start().starts_with(';'),
            Self::Hash => line.trim_start().starts_with('#'),
            Self::SemicolonOrHash => {
                matches!(line.trim_start().chars().next(), Some(';' | '#'))
            }
            Self::Custom(predicate) => predicate(line),
        }
    }
}

/// Newline convention used by the writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Configuration for reading and writing a document.
///
/// Immutable for the duration of a read or write operation; the document
/// holds it behind an `Arc` so sections and transformers share one instance.
#[derive(Debug, Clone)]
pub struct IniOptions {
    /// Comparison used for entry-key lookups.
    pub key_comparison: StringComparison,
    /// Comparison used for section-title lookups.
    pub section_comparison: StringComparison,
    /// Abort the parse with [`Error::MalformedLine`](crate::Error::MalformedLine)
    /// instead of tolerating unparsable lines.
    pub throw_on_invalid_lines: bool,
    /// Retain unparsable lines as trivia so they round-trip as inert text.
    pub keep_invalid_lines: bool,
    /// Accept entry lines whose key is empty (separator at position 0).
    pub allow_empty_keys: bool,
    /// Trim surrounding whitespace from values. Keys are always trimmed.
    pub trim_values: bool,
    /// Observer invoked for every invalid line, regardless of policy.
    pub on_invalid_line: Option<fn(usize, &str)>,
    /// Token opening a section header.
    pub section_open: String,
    /// Token closing a section header.
    pub section_close: String,
    /// Token separating keys from values.
    pub key_value_separator: String,
    /// Comment-line detection.
    pub comment: CommentStyle,
    /// Newline emitted by the writer.
    pub line_ending: LineEnding,
}

impl Default for IniOptions {
    fn default() -> Self {
        Self {
            key_comparison: StringComparison::Ordinal,
            section_comparison: StringComparison::Ordinal,
            throw_on_invalid_lines: false,
            keep_invalid_lines: true,
            allow_empty_keys: true,
            trim_values: true,
            on_invalid_line: None,
            section_open: "[".to_string(),
            section_close: "]".to_string(),
            key_value_separator: "=".to_string(),
            comment: CommentStyle::Semicolon,
            line_ending: LineEnding::Lf,
        }
    }
}

impl IniOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive key and section-title lookups.
    pub fn ignore_case(mut self) -> Self {
        self.key_comparison = StringComparison::IgnoreCase;
        self.section_comparison = StringComparison::IgnoreCase;
        self
    }

    /// Abort parsing on the first malformed line.
    pub fn strict(mut self) -> Self {
        self.throw_on_invalid_lines = true;
        self
    }

    pub fn with_comment_style(mut self, comment: CommentStyle) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_value_separator = separator.into();
        self
    }

    pub fn with_section_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.section_open = open.into();
        self.section_close = close.into();
        self
    }

    pub fn with_invalid_line_observer(mut self, observer: fn(usize, &str)) -> Self {
        self.on_invalid_line = Some(observer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semicolon_style_ignores_leading_whitespace() {
        assert!(CommentStyle::Semicolon.is_comment("; hello"));
        assert!(CommentStyle::Semicolon.is_comment("   ; indented"));
        assert!(!CommentStyle::Semicolon.is_comment("# hash"));
        assert!(!CommentStyle::Semicolon.is_comment("key=value"));
    }

    #[test]
    fn hash_and_either_styles() {
        assert!(CommentStyle::Hash.is_comment("# hello"));
        assert!(!CommentStyle::Hash.is_comment("; semi"));
        assert!(CommentStyle::SemicolonOrHash.is_comment("# hello"));
        assert!(CommentStyle::SemicolonOrHash.is_comment("; semi"));
        assert!(!CommentStyle::SemicolonOrHash.is_comment("plain"));
    }

    #[test]
    fn custom_predicate_sees_raw_line() {
        let style = CommentStyle::Custom(|line| line.starts_with("//"));
        assert!(style.is_comment("// slashes"));
        assert!(!style.is_comment("  // indented, raw line does not start with //"));
    }

    #[test]
    fn ignore_case_comparison() {
        assert!(StringComparison::IgnoreCase.matches("General", "general"));
        assert!(!StringComparison::Ordinal.matches("General", "general"));
    }
}
