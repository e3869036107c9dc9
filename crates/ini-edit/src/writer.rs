//! Serializes an [`Ini`] document back to text

use std::io::Write;
use std::sync::Arc;

use crate::document::Ini;
use crate::error::Result;
use crate::options::IniOptions;
use crate::section::Section;

/// Walks a document and re-emits it as text, re-attaching trivia in its
/// original positions. For an unmodified parsed document the output matches
/// the input byte-for-byte (modulo the configured newline).
pub struct IniWriter {
    options: Arc<IniOptions>,
}

impl IniWriter {
    pub fn new(options: Arc<IniOptions>) -> Self {
        Self { options }
    }

    /// Serialize the document to a string. Infallible.
    pub fn render(&self, ini: &Ini) -> String {
        let mut out = String::new();
        self.write_section(&mut out, ini.global(), false);
        for section in ini.sections() {
            self.write_section(&mut out, section, true);
        }
        let newline = self.options.line_ending.as_str();
        for line in ini.trailing_trivia().lines() {
            out.push_str(line);
            out.push_str(newline);
        }
        out
    }

    /// Serialize the document as UTF-8 bytes into `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W, ini: &Ini) -> Result<()> {
        writer.write_all(self.render(ini).as_bytes())?;
        Ok(())
    }

    fn write_section(&self, out: &mut String, section: &Section, with_title: bool) {
        let newline = self.options.line_ending.as_str();

        for line in section.leading_trivia().lines() {
            out.push_str(line);
            out.push_str(newline);
        }
        // The implicit global section never gets a header line.
        if with_title {
            out.push_str(&self.options.section_open);
            if let Some(title) = section.title() {
                out.push_str(title);
            }
            out.push_str(&self.options.section_close);
            out.push_str(newline);
        }
        for entry in section.entries() {
            for line in entry.leading_trivia.lines() {
                out.push_str(line);
                out.push_str(newline);
            }
            out.push_str(&entry.key);
            out.push_str(&self.options.key_value_separator);
            out.push_str(&entry.value);
            out.push_str(newline);
        }
    }
}
