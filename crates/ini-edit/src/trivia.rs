//! Non-semantic text preserved for faithful round-trips

use serde::{Deserialize, Serialize};

/// Ordered raw lines (comments, blank lines, retained invalid lines)
/// attached to the structural element that follows them, or to the end of
/// the document when nothing follows.
///
/// Lines are stored without their terminating newline; the writer appends
/// the configured line ending when emitting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trivia {
    lines: Vec<String>,
}

impl Trivia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one raw line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append raw lines in order.
    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Discard all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Iterate the raw lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Trivia {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl FromIterator<String> for Trivia {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
