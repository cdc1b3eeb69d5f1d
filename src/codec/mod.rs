//! Text codec: parsing INI text into a [`Document`](crate::Document) and
//! serializing it back.

pub mod reader;
pub mod writer;

pub use reader::{parse, parse_file};
pub use writer::{write, write_file, write_string};
