//! The INI document type

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::options::IniOptions;
use crate::reader::IniReader;
use crate::section::Section;
use crate::trivia::Trivia;
use crate::writer::IniWriter;

/// An editable INI document: one implicit global section, ordered named
/// sections, and any trailing trivia after the last structural element.
///
/// Duplicate section titles coexist as separate [`Section`] values; the
/// reader appends a new section per header line and never merges. The
/// find-or-create accessors always resolve to the first match.
#[derive(Debug, Clone)]
pub struct Ini {
    options: Arc<IniOptions>,
    global: Section,
    sections: Vec<Section>,
    trailing_trivia: Trivia,
}

impl Ini {
    /// Create an empty document.
    pub fn new(options: IniOptions) -> Self {
        Self::with_options(Arc::new(options))
    }

    pub(crate) fn with_options(options: Arc<IniOptions>) -> Self {
        Self {
            global: Section::global(options.key_comparison),
            sections: Vec::new(),
            trailing_trivia: Trivia::new(),
            options,
        }
    }

    /// Parse INI text with default options.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, IniOptions::default())
    }

    /// Parse INI text with explicit options.
    pub fn parse_with(text: &str, options: IniOptions) -> Result<Self> {
        IniReader::new(Arc::new(options)).read_str(text)
    }

    /// Parse a UTF-8 byte stream.
    pub fn from_reader<R: Read>(reader: R, options: IniOptions) -> Result<Self> {
        IniReader::new(Arc::new(options)).read(reader)
    }

    /// Load a document from a file, or `Ok(None)` when the path does not
    /// exist.
    pub fn load(path: impl AsRef<Path>, options: IniOptions) -> Result<Option<Self>> {
        let path = path.as_ref();
        match crate::io::read_if_exists(path)? {
            Some(text) => {
                tracing::debug!(path = %path.display(), "Loading INI document");
                Self::parse_with(&text, options).map(Some)
            }
            None => {
                tracing::debug!(path = %path.display(), "INI file not found");
                Ok(None)
            }
        }
    }

    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    pub(crate) fn options_arc(&self) -> Arc<IniOptions> {
        Arc::clone(&self.options)
    }

    /// The implicit section holding entries before the first header line.
    pub fn global(&self) -> &Section {
        &self.global
    }

    pub fn global_mut(&mut self) -> &mut Section {
        &mut self.global
    }

    /// Named sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut Vec<Section> {
        &mut self.sections
    }

    pub fn trailing_trivia(&self) -> &Trivia {
        &self.trailing_trivia
    }

    pub fn trailing_trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trailing_trivia
    }

    fn position(&self, title: &str) -> Option<usize> {
        let comparison = self.options.section_comparison;
        self.sections
            .iter()
            .position(|section| section.title().is_some_and(|t| comparison.matches(t, title)))
    }

    /// Returns the first section matching `title`, creating and appending an
    /// empty section when none exists. Never fails.
    pub fn get(&mut self, title: &str) -> &mut Section {
        let idx = match self.position(title) {
            Some(idx) => idx,
            None => {
                self.sections
                    .push(Section::named(title.to_string(), self.options.key_comparison));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }

    /// Non-mutating probe for the first section matching `title`.
    pub fn try_get(&self, title: &str) -> Option<&Section> {
        self.position(title).map(|idx| &self.sections[idx])
    }

    pub fn try_get_mut(&mut self, title: &str) -> Option<&mut Section> {
        match self.position(title) {
            Some(idx) => Some(&mut self.sections[idx]),
            None => None,
        }
    }

    pub fn contains_section(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    /// Replace the entries and leading trivia of the first section matching
    /// `title` wholesale, or append `section` under that title when none
    /// exists.
    pub fn set(&mut self, title: &str, section: Section) {
        match self.position(title) {
            Some(idx) => self.sections[idx].replace_contents(section),
            None => {
                let mut section = section;
                section.set_title(title);
                self.sections.push(section);
            }
        }
    }

    /// Append a section verbatim, even when its title duplicates an existing
    /// one.
    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Removes every section matching `title`.
    pub fn remove(&mut self, title: &str) {
        let comparison = self.options.section_comparison;
        self.sections
            .retain(|section| !section.title().is_some_and(|t| comparison.matches(t, title)));
    }

    /// The section receiving new entries during a parse: the last appended
    /// named section, or the global section before the first header line.
    pub(crate) fn current_section_mut(&mut self) -> &mut Section {
        match self.sections.len() {
            0 => &mut self.global,
            len => &mut self.sections[len - 1],
        }
    }

    /// Serialize to text with the configured newline. Writing an unmodified
    /// parsed document reproduces the original text byte-for-byte.
    pub fn render(&self) -> String {
        IniWriter::new(self.options_arc()).render(self)
    }

    /// Serialize as UTF-8 bytes into `writer`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        IniWriter::new(self.options_arc()).write_to(writer, self)
    }

    /// Serialize to a file, creating or replacing it atomically.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Saving INI document");
        crate::io::write_atomic(path, self.render().as_bytes())
    }
}

impl Default for Ini {
    fn default() -> Self {
        Self::new(IniOptions::default())
    }
}

impl fmt::Display for Ini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Structural equality over sections, entries, and trivia; options are
/// configuration and are ignored.
impl PartialEq for Ini {
    fn eq(&self, other: &Self) -> bool {
        self.global == other.global
            && self.sections == other.sections
            && self.trailing_trivia == other.trailing_trivia
    }
}

impl Eq for Ini {}
