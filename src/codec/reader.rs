//! Line-oriented INI parser.
//!
//! The parser walks the input one line at a time, keeping a single piece of
//! state: the name of the current section. Options seen before any section
//! header land in an implicit section named `""`, which is created on
//! demand like any other.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::IniError;
use crate::model::Document;

lazy_static! {
    // The section pattern captures greedily, so a line like `[a]junk]`
    // parses as a section named `a]junk` while `[a] extra` is rejected.
    // Known quirk, kept for compatibility.
    static ref SECTION_REGEX: Regex = Regex::new(r"^\[(.*)\]$").unwrap();
    static ref ASSIGN_REGEX: Regex = Regex::new(r"^([^=]+)=(.*)$").unwrap();
}

/// Parse an INI document from a buffered reader.
///
/// Passing `ordered` as true preserves first-insertion order of sections
/// and options, at some bookkeeping cost.
///
/// Parsing stops at the first malformed line with [`IniError::Syntax`];
/// nothing built before the error is returned.
pub fn parse<R: BufRead>(mut reader: R, ordered: bool) -> Result<Document, IniError> {
    let mut doc = Document::new(ordered);
    let mut section = String::new();
    let mut buf = String::new();
    let mut line_num = 0usize;

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_num += 1;

        let line = buf.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(caps) = ASSIGN_REGEX.captures(line) {
            let key = caps[1].trim();
            let value = caps[2].trim();
            doc.add_option(&section, key, value);
        } else if let Some(caps) = SECTION_REGEX.captures(line) {
            section = caps[1].trim().to_string();
            doc.add_section(&section);
        } else {
            return Err(IniError::Syntax {
                line: line_num,
                text: line.to_string(),
            });
        }
    }

    debug!(
        "parsed {} sections from {} lines",
        doc.section_count(),
        line_num
    );
    Ok(doc)
}

/// Parse an INI document from a file. The file handle is released on every
/// exit path.
pub fn parse_file<P: AsRef<Path>>(path: P, ordered: bool) -> Result<Document, IniError> {
    let file = File::open(path)?;
    parse(BufReader::new(file), ordered)
}
