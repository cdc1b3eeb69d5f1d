use std::io;

use thiserror::Error;

/// Errors reported by the codec.
///
/// Structural absence (a missing section or option) is never an error;
/// the document API signals it through `bool`/`Option` returns instead.
#[derive(Error, Debug)]
pub enum IniError {
    /// A non-blank, non-comment line matched neither the assignment nor
    /// the section-header pattern. Carries the 1-based line number and
    /// the offending line with surrounding whitespace removed.
    #[error("invalid INI syntax on line {line}: {text}")]
    Syntax { line: usize, text: String },

    /// The underlying stream or file could not be opened, read or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = IniError::Syntax {
            line: 3,
            text: "not valid".to_string(),
        };
        assert_eq!(err.to_string(), "invalid INI syntax on line 3: not valid");
    }

    #[test]
    fn test_io_error_from() {
        let err: IniError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, IniError::Io(_)));
    }
}
