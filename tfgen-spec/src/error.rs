use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for tfgen-spec operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the specification file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse provider specification")]
    #[diagnostic(code(tfgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(tfgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_at(src, source.line(), source.column());
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            message: message.into(),
        })
    }
}

/// Convert serde_json's 1-based line/column position into a byte span.
fn span_at(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, l) in src.split('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(l.len());
            return Some(SourceSpan::from(offset + col));
        }
        offset += l.len() + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_at_first_line() {
        assert_eq!(span_at("{\"a\": 1}", 1, 2), Some(SourceSpan::from(1)));
    }

    #[test]
    fn test_span_at_later_line() {
        let src = "{\n  \"a\": oops\n}";
        // line 2, column 8 points at the start of "oops"
        assert_eq!(span_at(src, 2, 8), Some(SourceSpan::from(9)));
    }

    #[test]
    fn test_span_at_out_of_range() {
        assert_eq!(span_at("{}", 10, 1), None);
        assert_eq!(span_at("{}", 0, 0), None);
    }
}
