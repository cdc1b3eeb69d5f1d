//! INI serializer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::IniError;
use crate::model::Document;

/// Write a document to a sink in INI text form.
///
/// Each section becomes a `[name]` line followed by one `name = value`
/// line per option and a trailing blank line, in the document's iteration
/// order. Names and values are written verbatim: a value containing a
/// newline or a name containing `=` will not survive a round trip.
///
/// The first failed write aborts the remaining output.
pub fn write<W: Write>(doc: &Document, sink: &mut W) -> Result<(), IniError> {
    for section in doc.sections() {
        writeln!(sink, "[{}]", section)?;
        for option in doc.options(section) {
            let value = doc.get_option(section, option).unwrap_or_default();
            writeln!(sink, "{} = {}", option, value)?;
        }
        writeln!(sink)?;
    }
    Ok(())
}

/// Write a document to a file, replacing any existing content.
pub fn write_file<P: AsRef<Path>>(doc: &Document, path: P) -> Result<(), IniError> {
    let file = File::create(&path)?;
    let mut sink = BufWriter::new(file);
    write(doc, &mut sink)?;
    sink.flush()?;
    debug!("wrote {} sections to file", doc.section_count());
    Ok(())
}

/// Serialize a document into a `String`.
pub fn write_string(doc: &Document) -> String {
    let mut buf = Vec::new();
    // Writes into a Vec cannot fail.
    let _ = write(doc, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
