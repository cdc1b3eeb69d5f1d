//! In-memory INI document model with an order-preserving text codec.
//!
//! A [`Document`] maps section names to option name/value pairs, with an
//! optional guarantee that iteration follows first-insertion order. The
//! codec turns INI text into a document and back:
//!
//! ```rust
//! use inidoc::{parse, write_string};
//!
//! let doc = parse("[server]\nhost = example.com\nport = 8080\n".as_bytes(), true).unwrap();
//! assert_eq!(doc.get_option("server", "port"), Some("8080"));
//! assert_eq!(
//!     write_string(&doc),
//!     "[server]\nhost = example.com\nport = 8080\n\n"
//! );
//! ```
//!
//! # Format
//!
//! Lines are classified after trimming surrounding whitespace:
//!
//! - blank lines and lines starting with `;` or `#` are skipped
//! - `key = value` sets an option in the current section (the value may be
//!   empty and may contain further `=` characters)
//! - `[name]` opens a section; options before any header belong to a
//!   section named `""`
//! - anything else is a syntax error carrying its 1-based line number
//!
//! The section pattern captures greedily up to the last `]`, so `[a]junk]`
//! is accepted as a section named `a]junk` while `[a] extra` is rejected.
//! This quirk is kept deliberately for compatibility with existing files.
//!
//! Values are opaque strings; there is no comment preservation on write,
//! no multi-line values, no escaping and no type coercion.

pub mod codec;
pub mod error;
pub mod model;

pub use codec::reader::{parse, parse_file};
pub use codec::writer::{write, write_file, write_string};
pub use error::IniError;
pub use model::{Document, OptionSet};
