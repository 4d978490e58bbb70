use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for descriptor operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(fidlgen::io_error),
        help("pass the JSON IR emitted by fidlc for the library")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse library descriptor")]
    #[diagnostic(code(fidlgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = byte_offset(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Convert serde_json's 1-based line/column into a byte offset into `src`.
///
/// serde_json reports line 0 for errors that have no position (e.g. I/O).
fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    Some(offset.min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset_first_line() {
        assert_eq!(byte_offset("{\"name\": 1}", 1, 10), Some(9));
    }

    #[test]
    fn test_byte_offset_later_line() {
        let src = "{\n  \"name\": 1\n}";
        // line 2 starts after "{\n" (2 bytes)
        assert_eq!(byte_offset(src, 2, 3), Some(4));
    }

    #[test]
    fn test_byte_offset_without_position() {
        assert_eq!(byte_offset("{}", 0, 0), None);
    }

    #[test]
    fn test_byte_offset_clamped_to_source() {
        assert_eq!(byte_offset("{", 1, 40), Some(1));
    }

    #[test]
    fn test_parse_error_has_span() {
        let src = "{\n  \"name\": \n}";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::parse(err, src, "library.json");
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
