//! Line-oriented INI parser

use std::io::Read;
use std::sync::Arc;

use crate::document::Ini;
use crate::error::{Error, Result};
use crate::options::IniOptions;
use crate::section::{Entry, Section};
use crate::trivia::Trivia;

/// Streams physical lines and incrementally builds an [`Ini`] document,
/// attaching accumulated trivia to the structural element that follows it.
///
/// Stateless apart from its options; one reader can parse any number of
/// inputs.
pub struct IniReader {
    options: Arc<IniOptions>,
}

impl IniReader {
    pub fn new(options: Arc<IniOptions>) -> Self {
        Self { options }
    }

    /// Parse a complete text into a fresh document.
    pub fn read_str(&self, text: &str) -> Result<Ini> {
        let mut ini = Ini::with_options(Arc::clone(&self.options));
        self.read_into(text, &mut ini)?;
        Ok(ini)
    }

    /// Parse a UTF-8 byte stream into a fresh document.
    pub fn read<R: Read>(&self, mut reader: R) -> Result<Ini> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.read_str(&text)
    }

    fn read_into(&self, text: &str, ini: &mut Ini) -> Result<()> {
        let opts = &*self.options;
        let open = opts.section_open.as_str();
        let close = opts.section_close.as_str();
        let separator = opts.key_value_separator.as_str();
        // An empty key before the separator is rejected unless allowed.
        let min_separator_index = if opts.allow_empty_keys { 0 } else { 1 };

        let mut pending: Vec<String> = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_number = idx + 1;
            let trimmed = line.trim();

            // Header: the trimmed line must both start with the open token
            // and end with the close token. `[foo` is not a header.
            if trimmed.len() >= open.len() + close.len()
                && trimmed.starts_with(open)
                && trimmed.ends_with(close)
            {
                let title = trimmed[open.len()..trimmed.len() - close.len()].to_string();
                let mut section = Section::named(title, opts.key_comparison);
                *section.leading_trivia_mut() = Trivia::from(std::mem::take(&mut pending));
                ini.push_section(section);
                continue;
            }

            if opts.comment.is_comment(line) {
                pending.push(line.to_string());
                continue;
            }

            // The position check runs on the trimmed line, the split on the
            // raw line, so whitespace around the key stays trimmable and the
            // value keeps its raw form when trimming is off.
            if let Some(idx_in_trimmed) = trimmed.find(separator) {
                if idx_in_trimmed >= min_separator_index {
                    if let Some(idx_in_raw) = line.find(separator) {
                        let key = line[..idx_in_raw].trim();
                        let mut value = &line[idx_in_raw + separator.len()..];
                        if opts.trim_values {
                            value = value.trim();
                        }

                        let mut entry = Entry::with_value(key, value);
                        entry.leading_trivia = Trivia::from(std::mem::take(&mut pending));
                        ini.current_section_mut().set_entry(entry);
                        continue;
                    }
                }
            }

            if trimmed.is_empty() {
                pending.push(line.to_string());
                continue;
            }

            // Malformed line. The observer always fires; whether the line is
            // retained or aborts the parse is policy.
            if opts.keep_invalid_lines {
                pending.push(line.to_string());
            }
            tracing::warn!(line = line_number, content = line, "Invalid INI line");
            if let Some(on_invalid_line) = opts.on_invalid_line {
                on_invalid_line(line_number, line);
            }
            if opts.throw_on_invalid_lines {
                return Err(Error::MalformedLine {
                    line: line_number,
                    content: line.to_string(),
                });
            }
        }

        // Dangling comments or blank lines after the last entry.
        if !pending.is_empty() {
            ini.trailing_trivia_mut().extend(pending);
        }

        Ok(())
    }
}
