//! Section and entry types

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::options::StringComparison;
use crate::trivia::Trivia;
use crate::value::FromIniValue;

/// One key-value pair with its leading trivia.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub leading_trivia: Trivia,
}

impl Entry {
    /// Create an entry with an empty value.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            leading_trivia: Trivia::new(),
        }
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            leading_trivia: Trivia::new(),
        }
    }
}

/// A named or implicit (global) grouping of key-value entries.
///
/// Entries are exclusively owned and keep document order. Keys are not
/// required to be unique; lookups return the first match under the
/// configured comparison, so keys behave as unique after any find-or-create
/// mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    title: Option<String>,
    leading_trivia: Trivia,
    entries: Vec<Entry>,
    comparison: StringComparison,
}

impl Section {
    /// Create an empty named section with ordinal key comparison.
    pub fn new(title: impl Into<String>) -> Self {
        Self::named(title.into(), StringComparison::Ordinal)
    }

    pub(crate) fn named(title: String, comparison: StringComparison) -> Self {
        Self {
            title: Some(title),
            leading_trivia: Trivia::new(),
            entries: Vec::new(),
            comparison,
        }
    }

    /// The implicit section holding entries before the first header line.
    pub(crate) fn global(comparison: StringComparison) -> Self {
        Self {
            title: None,
            leading_trivia: Trivia::new(),
            entries: Vec::new(),
            comparison,
        }
    }

    pub fn with_comparison(mut self, comparison: StringComparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// `None` only for the implicit global section.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn is_global(&self) -> bool {
        self.title.is_none()
    }

    pub fn leading_trivia(&self) -> &Trivia {
        &self.leading_trivia
    }

    pub fn leading_trivia_mut(&mut self) -> &mut Trivia {
        &mut self.leading_trivia
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<Entry> {
        &mut self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, key: &str) -> Option<usize> {
        let comparison = self.comparison;
        self.entries
            .iter()
            .position(|entry| comparison.matches(&entry.key, key))
    }

    /// Returns the entry matching `key`, creating and appending an empty
    /// entry when none exists. Never fails.
    pub fn get(&mut self, key: &str) -> &mut Entry {
        let idx = match self.position(key) {
            Some(idx) => idx,
            None => {
                self.entries.push(Entry::new(key));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx]
    }

    /// Non-mutating probe for the first entry matching `key`.
    pub fn try_get(&self, key: &str) -> Option<&Entry> {
        self.position(key).map(|idx| &self.entries[idx])
    }

    pub fn try_get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        match self.position(key) {
            Some(idx) => Some(&mut self.entries[idx]),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Find-or-create, then overwrite the value. Leading trivia is kept.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.get(key).value = value.into();
    }

    /// Find-or-create, overwrite the value, and discard leading trivia.
    pub fn set_and_clear_trivia(&mut self, key: &str, value: impl Into<String>) {
        let entry = self.get(key);
        entry.value = value.into();
        entry.leading_trivia.clear();
    }

    /// Find-or-create by `entry.key`, overwriting both the value and the
    /// leading trivia of an existing entry.
    pub fn set_entry(&mut self, entry: Entry) {
        match self.position(&entry.key) {
            Some(idx) => {
                let existing = &mut self.entries[idx];
                existing.value = entry.value;
                existing.leading_trivia = entry.leading_trivia;
            }
            None => self.entries.push(entry),
        }
    }

    /// Removes every entry matching `key`.
    pub fn remove(&mut self, key: &str) {
        let comparison = self.comparison;
        self.entries
            .retain(|entry| !comparison.matches(&entry.key, key));
    }

    /// The raw string value for `key`, or [`Error::KeyNotFound`].
    pub fn get_value(&self, key: &str) -> Result<&str> {
        self.try_get(key)
            .map(|entry| entry.value.as_str())
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// The value for `key` converted to `T`, or [`Error::KeyNotFound`] /
    /// [`Error::TypeConversion`].
    pub fn get_value_as<T: FromIniValue>(&self, key: &str) -> Result<T> {
        let value = self.get_value(key)?;
        T::from_ini_value(value).map_err(|kind| Error::TypeConversion {
            key: key.to_string(),
            value: value.to_string(),
            target: std::any::type_name::<T>(),
            kind,
        })
    }

    /// The raw value for `key`, or `default` when the key is absent.
    pub fn get_value_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.try_get(key)
            .map(|entry| entry.value.as_str())
            .unwrap_or(default)
    }

    /// The converted value for `key`, or `default` when the key is absent.
    /// A present but unconvertible value is still an error.
    pub fn get_value_as_or<T: FromIniValue>(&self, key: &str, default: T) -> Result<T> {
        match self.try_get(key) {
            Some(entry) => T::from_ini_value(&entry.value).map_err(|kind| Error::TypeConversion {
                key: key.to_string(),
                value: entry.value.clone(),
                target: std::any::type_name::<T>(),
                kind,
            }),
            None => Ok(default),
        }
    }

    /// Replace entries and leading trivia wholesale, keeping the existing
    /// title and comparison.
    pub(crate) fn replace_contents(&mut self, other: Section) {
        self.entries = other.entries;
        self.leading_trivia = other.leading_trivia;
    }
}

/// Structural equality: title, trivia, and entries. The comparison mode is
/// configuration, not content, and is ignored.
impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.leading_trivia == other.leading_trivia
            && self.entries == other.entries
    }
}

impl Eq for Section {}
