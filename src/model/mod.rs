//! In-memory representation of an INI document.
//!
//! A [`Document`] owns one [`OptionSet`] per section; neither is shared
//! across documents. Both honor the document's ordered/unordered mode.

pub mod document;
pub mod options;

pub use document::Document;
pub use options::OptionSet;
