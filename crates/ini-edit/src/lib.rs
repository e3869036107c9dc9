//! Round-trip-preserving INI document model
//!
//! Parses free-form INI text into an editable document tree, keeping
//! comments, blank lines, and ordering exactly where the original author
//! placed them, and serializes it back out — byte-identical for an
//! unmodified document.
//!
//! ```
//! use ini_edit::Ini;
//!
//! let text = "; settings\n[General]\nfontsize=9\n";
//! let mut doc = Ini::parse(text)?;
//!
//! assert_eq!(doc.get("General").get_value_as::<i32>("fontsize")?, 9);
//!
//! doc.get("General").set("fontsize", "11");
//! assert_eq!(doc.render(), "; settings\n[General]\nfontsize=11\n");
//! # Ok::<(), ini_edit::Error>(())
//! ```

pub mod document;
pub mod error;
pub mod options;
pub mod reader;
pub mod section;
pub mod trivia;
pub mod value;
pub mod writer;

mod io;

pub use document::Ini;
pub use error::{ConversionKind, Error, Result};
pub use options::{CommentStyle, IniOptions, LineEnding, StringComparison};
pub use reader::IniReader;
pub use section::{Entry, Section};
pub use trivia::Trivia;
pub use value::FromIniValue;
pub use writer::IniWriter;
